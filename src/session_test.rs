use super::*;
use chrono::TimeZone;
use serial_test::serial;
use tempfile::TempDir;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

fn store_in(dir: &TempDir) -> SessionStore {
    SessionStore::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn test_load_missing_file_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let session = Session::new("acme", "tok-123").with_lifetime(fixed_now(), 3600);

    store.save(&session).unwrap();

    assert_eq!(store.load().unwrap(), Some(session));
}

#[cfg(unix)]
#[test]
fn test_saved_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&Session::new("acme", "tok")).unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_require_without_session() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(matches!(
        store.require(fixed_now()),
        Err(AdminError::NotLoggedIn)
    ));
}

#[test]
fn test_require_expired_session() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let issued = fixed_now() - Duration::hours(2);
    store
        .save(&Session::new("acme", "tok").with_lifetime(issued, 3600))
        .unwrap();

    assert!(matches!(
        store.require(fixed_now()),
        Err(AdminError::SessionExpired)
    ));
}

#[test]
fn test_require_valid_session() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .save(&Session::new("acme", "tok").with_lifetime(fixed_now(), 60))
        .unwrap();

    let session = store.require(fixed_now()).unwrap();
    assert_eq!(session.subdomain, "acme");
}

#[test]
fn test_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&Session::new("acme", "tok")).unwrap();

    assert!(store.clear().unwrap());
    assert!(!store.clear().unwrap());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_load_corrupted_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{not json").unwrap();

    let store = SessionStore::new(&path);
    assert!(matches!(store.load(), Err(AdminError::Json(_))));
}

#[test]
fn test_session_base_url_and_bearer() {
    let session = Session::new("acme", "tok-123");
    assert_eq!(
        session.base_url(&ApiConfig::default()),
        "https://acme.ox-sys.com"
    );
    assert_eq!(session.bearer(), "Bearer tok-123");
}

// === 境界値テスト ===

#[test]
fn test_zero_lifetime_never_expires() {
    let session = Session::new("acme", "tok").with_lifetime(fixed_now(), 0);
    assert_eq!(session.expires_at, None);
    assert!(!session.is_expired(fixed_now() + Duration::days(365)));
}

#[test]
fn test_expiry_boundary() {
    let session = Session::new("acme", "tok").with_lifetime(fixed_now(), 10);
    assert!(!session.is_expired(fixed_now() + Duration::seconds(9)));
    assert!(session.is_expired(fixed_now() + Duration::seconds(10)));
}

#[test]
#[serial]
fn test_default_location_from_env() {
    std::env::set_var("OXADM_SESSION_FILE", "/tmp/oxadm-test/session.json");
    let store = SessionStore::default_location().unwrap();
    std::env::remove_var("OXADM_SESSION_FILE");

    assert_eq!(store.path(), Path::new("/tmp/oxadm-test/session.json"));
}

#[test]
#[serial]
fn test_default_location_under_home() {
    std::env::remove_var("OXADM_SESSION_FILE");
    let original = std::env::var("HOME").ok();
    std::env::set_var("HOME", "/home/tester");

    let store = SessionStore::default_location().unwrap();

    match original {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
    assert_eq!(
        store.path(),
        Path::new("/home/tester/.config/oxadm/session.json")
    );
}
