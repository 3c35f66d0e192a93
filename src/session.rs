//! セッション管理
//!
//! ログインで得たテナント（サブドメイン）とトークンを保持する。
//! ネットワーク層はセッションを直接読まず、呼び出し側が `Session` を明示的に渡す。

use crate::config::ApiConfig;
use crate::env::EnvVar;
use crate::error::{AdminError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// ログイン済みセッション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub subdomain: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(subdomain: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            token: token.into(),
            expires_at: None,
        }
    }

    /// トークン有効期間（秒）から期限を設定
    ///
    /// `lifetime` が0以下なら期限なしとして扱う。
    pub fn with_lifetime(mut self, now: DateTime<Utc>, lifetime_secs: i64) -> Self {
        self.expires_at = (lifetime_secs > 0).then(|| now + Duration::seconds(lifetime_secs));
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// テナントのベースURL
    pub fn base_url(&self, api: &ApiConfig) -> String {
        api.base_url(&self.subdomain)
    }

    /// Authorization ヘッダー値
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// セッションの保存先
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// デフォルトの保存先
    ///
    /// 優先順位:
    /// 1. 環境変数 OXADM_SESSION_FILE
    /// 2. $HOME/.config/oxadm/session.json
    pub fn default_location() -> Result<Self> {
        if let Some(path) = EnvVar::get("OXADM_SESSION_FILE") {
            return Ok(Self::new(path));
        }

        let home = EnvVar::get("HOME").ok_or_else(|| {
            AdminError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            ))
        })?;

        Ok(Self::new(
            PathBuf::from(home)
                .join(".config")
                .join("oxadm")
                .join("session.json"),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存済みセッションを読み込む（ファイルがなければNone）
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// 有効なセッションを取得
    ///
    /// 未ログインなら `NotLoggedIn`、期限切れなら `SessionExpired`。
    pub fn require(&self, now: DateTime<Utc>) -> Result<Session> {
        let session = self.load()?.ok_or(AdminError::NotLoggedIn)?;
        if session.is_expired(now) {
            return Err(AdminError::SessionExpired);
        }
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        restrict_permissions(&self.path)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// セッションを削除する（存在しなければ何もしない）
    ///
    /// 削除した場合は true を返す。
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
