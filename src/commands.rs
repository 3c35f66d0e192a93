use crate::cli::Command;
use crate::error::{AdminError, RichError};
use crate::session::SessionStore;

pub mod login;
pub mod logout;
pub mod products;
pub mod search;
pub mod status;

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), RichError> {
    let store = SessionStore::default_location().map_err(RichError::from)?;

    let result = match cli.command {
        Command::Login(args) => login::run(args, &store).await,
        Command::Logout => logout::run(&store),
        Command::Status => status::run(&store),
        Command::Products(args) => products::run(args, &store).await,
        Command::Search(args) => search::run(args, &store).await,
    };

    result.map_err(|err| enrich(err, &store))
}

/// エラーにセッション情報を付与する
///
/// 401 の場合は保存済みセッションを破棄する。
fn enrich(err: AdminError, store: &SessionStore) -> RichError {
    let tenant = match &err {
        AdminError::Network(_) | AdminError::Api { .. } => {
            store.load().ok().flatten().map(|s| s.subdomain)
        }
        _ => None,
    };

    if err.is_unauthorized() {
        match store.clear() {
            Ok(_) => tracing::warn!("server rejected the session token; saved session removed"),
            Err(e) => tracing::warn!("failed to remove rejected session: {e}"),
        }
    }

    let touches_session_file = matches!(err, AdminError::Io(_) | AdminError::Json(_));
    let mut rich = RichError::from(err);

    if let Some(tenant) = tenant {
        rich = rich.with_tenant(tenant);
    }
    if touches_session_file {
        rich = rich.with_session_file(store.path());
    }
    rich
}
