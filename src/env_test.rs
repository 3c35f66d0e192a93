use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var("OXADM_TEST_ENV_VAR", "test_value");
    assert_eq!(
        EnvVar::get("OXADM_TEST_ENV_VAR"),
        Some("test_value".to_string())
    );
    std::env::remove_var("OXADM_TEST_ENV_VAR");
}

#[test]
#[serial]
fn test_get_blank_var() {
    std::env::set_var("OXADM_TEST_BLANK_VAR", "   ");
    assert_eq!(EnvVar::get("OXADM_TEST_BLANK_VAR"), None);
    std::env::remove_var("OXADM_TEST_BLANK_VAR");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("OXADM_NONEXISTENT_VAR_12345"), None);
}

#[test]
#[serial]
fn test_parse_number() {
    std::env::set_var("OXADM_TEST_NUM", " 42 ");
    assert_eq!(EnvVar::parse::<u64>("OXADM_TEST_NUM"), Some(42));
    std::env::remove_var("OXADM_TEST_NUM");
}

#[test]
#[serial]
fn test_parse_invalid_number() {
    std::env::set_var("OXADM_TEST_BAD_NUM", "forty-two");
    assert_eq!(EnvVar::parse::<u64>("OXADM_TEST_BAD_NUM"), None);
    std::env::remove_var("OXADM_TEST_BAD_NUM");
}
