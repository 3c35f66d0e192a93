//! oxadm login コマンド
//!
//! 認証情報をトークンに交換し、セッションとして保存する。

use crate::api::{self, Credentials};
use crate::config::{ApiConfig, HttpConfig};
use crate::error::{AdminError, Result};
use crate::session::{Session, SessionStore};
use chrono::{Local, Utc};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Tenant subdomain (https://<subdomain>.<api domain>)
    #[arg(long, env = "OXADM_SUBDOMAIN")]
    pub subdomain: String,

    /// Account username
    #[arg(long, short, env = "OXADM_USERNAME")]
    pub username: String,

    /// Account password
    #[arg(long, env = "OXADM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub async fn run(args: Args, store: &SessionStore) -> Result<()> {
    let password = args.password.ok_or_else(|| {
        AdminError::InvalidArgument("password required (use --password or OXADM_PASSWORD)".to_string())
    })?;
    let credentials = Credentials::new(args.username, password, args.subdomain)?;

    let http = HttpConfig::from_env().build_client();
    let api_config = ApiConfig::from_env();

    let response = api::login(&http, &api_config, &credentials).await?;

    let session = Session::new(credentials.subdomain(), response.token)
        .with_lifetime(Utc::now(), response.lifetime);
    store.save(&session)?;

    println!(
        "{} Logged in to {} as {}",
        "✓".green(),
        session.base_url(&api_config),
        credentials.username()
    );
    if let Some(expires_at) = session.expires_at {
        println!(
            "  Session expires at {}",
            expires_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
