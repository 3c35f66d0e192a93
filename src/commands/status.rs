//! oxadm status コマンド
//!
//! 保存済みセッションの状態を表示する。トークンは表示しない。

use crate::config::ApiConfig;
use crate::error::Result;
use crate::session::{Session, SessionStore};
use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

pub fn run(store: &SessionStore) -> Result<()> {
    let session = store.load()?;
    println!(
        "{}",
        describe(session.as_ref(), &ApiConfig::from_env(), Utc::now())
    );
    Ok(())
}

/// セッション状態の説明文
fn describe(session: Option<&Session>, api: &ApiConfig, now: DateTime<Utc>) -> String {
    let Some(session) = session else {
        return format!("{} Not logged in", "•".yellow());
    };

    let url = session.base_url(api);
    match session.expires_at {
        Some(expires_at) if session.is_expired(now) => format!(
            "{} Session for {} expired at {}",
            "✗".red(),
            url,
            local_time(expires_at)
        ),
        Some(expires_at) => format!(
            "{} Logged in to {} (expires at {})",
            "✓".green(),
            url,
            local_time(expires_at)
        ),
        None => format!("{} Logged in to {}", "✓".green(), url),
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
