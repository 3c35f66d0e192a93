use std::str::FromStr;

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// 環境変数を取得してパースする
    ///
    /// パースに失敗した場合は警告を出してNoneを返す。
    pub fn parse<T>(key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = Self::get(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Invalid {key} value {raw:?}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
