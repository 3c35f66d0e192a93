//! ログイン（トークン交換）

use crate::config::ApiConfig;
use crate::error::{AdminError, Result};
use reqwest::Client;
use serde::Deserialize;

const AUTH_CHECK_PATH: &str = "/security/auth_check";
const DEFAULT_AUTH_ERROR: &str = "Authentication failed";

/// ログイン情報
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
    subdomain: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("subdomain", &self.subdomain)
            .finish()
    }
}

impl Credentials {
    /// 空の値は受け付けない
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Result<Self> {
        let username = username.into().trim().to_string();
        let password = password.into();
        let subdomain = subdomain.into().trim().to_lowercase();

        if username.is_empty() {
            return Err(AdminError::InvalidArgument("username is empty".to_string()));
        }
        if password.is_empty() {
            return Err(AdminError::InvalidArgument("password is empty".to_string()));
        }
        if subdomain.is_empty() {
            return Err(AdminError::InvalidArgument("subdomain is empty".to_string()));
        }
        if !subdomain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(AdminError::InvalidArgument(format!(
                "subdomain '{}' contains invalid characters",
                subdomain
            )));
        }

        Ok(Self {
            username,
            password,
            subdomain,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    fn form(&self) -> [(&'static str, &str); 3] {
        [
            ("_username", self.username.as_str()),
            ("_password", self.password.as_str()),
            ("_subdomain", self.subdomain.as_str()),
        ]
    }
}

/// ログイン成功レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// トークン有効期間（秒）
    #[serde(default)]
    pub lifetime: i64,
}

/// ログイン失敗時のレスポンス
#[derive(Debug, Deserialize)]
struct AuthErrorResponse {
    #[allow(dead_code)]
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

/// 認証エンドポイントURL
pub fn auth_check_url(api: &ApiConfig, subdomain: &str) -> String {
    format!("{}{}", api.base_url(subdomain), AUTH_CHECK_PATH)
}

/// 失敗レスポンスをエラーに変換
///
/// JSONの `{ code, message }` が読めればサーバーのメッセージを使う。
fn auth_error(status: u16, body: &str) -> AdminError {
    match serde_json::from_str::<AuthErrorResponse>(body) {
        Ok(err) => AdminError::AuthFailed(
            err.message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AUTH_ERROR.to_string()),
        ),
        Err(_) => AdminError::Api {
            status,
            message: body.to_string(),
        },
    }
}

/// ユーザー名とパスワードをトークンに交換する
pub async fn login(http: &Client, api: &ApiConfig, credentials: &Credentials) -> Result<AuthResponse> {
    let url = auth_check_url(api, credentials.subdomain());
    tracing::debug!(%url, username = credentials.username(), "exchanging credentials");

    let response = http
        .post(&url)
        .header("Accept", "application/json")
        .form(&credentials.form())
        .send()
        .await?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(auth_error(status, &body));
    }

    Ok(response.json::<AuthResponse>().await?)
}
