//! ログ出力の初期化

use tracing_subscriber::{fmt, EnvFilter};

/// stderr へのログ出力を初期化する
///
/// `RUST_LOG` が設定されていればそれを優先する。
/// 未設定時は `warn`、`--verbose` 指定時は `oxadm=debug`。
pub fn init(verbose: bool) {
    let default = if verbose { "warn,oxadm=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
