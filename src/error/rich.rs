//! 表示用エラー
//!
//! `AdminError` にエラーコードと付帯情報（URL・ステータス・テナント・セッションファイル）を
//! 添えたもの。CLI の最終出力は `ErrorFormatter` がこれを整形する。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use super::code::ErrorCode;

type Source = Box<dyn Error + Send + Sync>;

/// エラーの付帯情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// 失敗したリクエストのURL
    pub url: Option<String>,
    /// HTTPステータス
    pub status: Option<u16>,
    /// 対象テナント（サブドメイン）
    pub tenant: Option<String>,
    /// 読み書きに失敗したセッションファイル
    pub session_file: Option<PathBuf>,
}

/// コード付きのCLIエラー
#[derive(Debug)]
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: ErrorContext,
    source: Option<Source>,
}

impl RichError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    pub fn caused_by(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.context.url = Some(url.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.context.status = Some(status);
        self
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.context.tenant = Some(tenant.into());
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.context.session_file = Some(path.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

impl fmt::Display for RichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl Error for RichError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
