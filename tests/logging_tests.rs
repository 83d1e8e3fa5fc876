//! Logging configuration tests

use country_explorer::infrastructure::config::{log_level_filter, Logging};

#[test]
fn test_log_level_parsing() {
    assert_eq!(log_level_filter("DEBUG"), "debug");
    assert_eq!(log_level_filter("INFO"), "info");
    assert_eq!(log_level_filter("WARN"), "warn");
    assert_eq!(log_level_filter("ERROR"), "error");
    assert_eq!(log_level_filter("debug"), "debug");
}

#[test]
fn test_unknown_level_falls_back_to_warn() {
    assert_eq!(log_level_filter("TRACE-ALL"), "warn");
    assert_eq!(log_level_filter(""), "warn");
}

#[test]
fn test_log_level_default() {
    let logging = Logging::default();

    assert!(logging.enable);
    assert!(logging.path.is_none());
    assert_eq!(logging.level, "WARN");
}
