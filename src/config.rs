//! HTTP設定とAPI接続設定

use crate::env::EnvVar;
use reqwest::Client;
use std::time::Duration;

/// APIドメインのデフォルト値
pub const DEFAULT_API_DOMAIN: &str = "ox-sys.com";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: concat!("oxadm/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    /// 環境変数から構築
    ///
    /// `OXADM_TIMEOUT`（秒）。`0` はタイムアウトなし。
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(secs) = EnvVar::parse::<u64>("OXADM_TIMEOUT") {
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        config
    }

    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// API接続設定
///
/// テナントごとのベースURLは `https://{subdomain}.{api_domain}` になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_domain: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_domain: DEFAULT_API_DOMAIN.to_string(),
        }
    }
}

impl ApiConfig {
    /// 環境変数 `OXADM_API_DOMAIN` から構築（未設定ならデフォルト）
    pub fn from_env() -> Self {
        EnvVar::get("OXADM_API_DOMAIN")
            .map(Self::with_domain)
            .unwrap_or_default()
    }

    pub fn with_domain(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            api_domain: domain.trim().trim_end_matches('/').to_string(),
        }
    }

    /// テナントのベースURL
    pub fn base_url(&self, subdomain: &str) -> String {
        format!("https://{}.{}", subdomain, self.api_domain)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
