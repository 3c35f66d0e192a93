pub mod code;
pub mod formatter;
pub mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::RichError;

use thiserror::Error;

/// oxadm 統一エラー型
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Not logged in. Run `oxadm login` first")]
    NotLoggedIn,

    #[error("Session expired. Run `oxadm login` again")]
    SessionExpired,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// 認証切れ（401）かどうか
    ///
    /// 401 を受け取った場合、呼び出し側は保存済みセッションを破棄する。
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AdminError::Api { status: 401, .. })
    }

    /// 表示用のエラーコードを返す
    pub fn code(&self) -> ErrorCode {
        match self {
            AdminError::Network(e) if e.is_timeout() => ErrorCode::Net002,
            AdminError::Network(e) if e.is_decode() => ErrorCode::Api005,
            AdminError::Network(_) => ErrorCode::Net001,
            AdminError::Api { status: 401, .. } => ErrorCode::Api001,
            AdminError::Api { status: 403, .. } => ErrorCode::Api002,
            AdminError::Api { status: 404, .. } => ErrorCode::Api003,
            AdminError::Api { status, .. } if *status >= 500 => ErrorCode::Api004,
            AdminError::Api { .. } => ErrorCode::Api006,
            AdminError::AuthFailed(_) => ErrorCode::Aut001,
            AdminError::NotLoggedIn => ErrorCode::Ses001,
            AdminError::SessionExpired => ErrorCode::Ses002,
            AdminError::InvalidArgument(_) => ErrorCode::Val001,
            AdminError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorCode::Io002
            }
            AdminError::Io(_) => ErrorCode::Io001,
            AdminError::Json(_) => ErrorCode::Cfg001,
        }
    }
}

impl From<AdminError> for RichError {
    fn from(err: AdminError) -> Self {
        let rich = RichError::new(err.code(), err.to_string());
        match err {
            AdminError::Network(source) => {
                let url = source.url().map(|u| u.to_string());
                let rich = match url {
                    Some(url) => rich.with_url(url),
                    None => rich,
                };
                rich.caused_by(source)
            }
            AdminError::Api { status, .. } => rich.with_status(status),
            AdminError::Io(source) => rich.caused_by(source),
            AdminError::Json(source) => rich.caused_by(source),
            _ => rich,
        }
    }
}
