//! Configuration tests

use country_explorer::infrastructure::config::{parse_config, Config};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "classic");
    assert!(config.enable_emoji);
    assert!(config.http_proxy.is_none());
    assert!(config.database_path.is_none());
    assert_eq!(config.directory.base_url, "https://restcountries.com/v3.1");
    assert_eq!(config.directory.timeout_secs, 30);
    assert!(config.directory.user_agent.starts_with("country-explorer/"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.theme, "classic");
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
theme = "ocean"
enable_emoji = false
http_proxy = "http://127.0.0.1:3128"
database_path = "/tmp/explorer.db"

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"

[directory]
base_url = "http://localhost:8080/v3.1"
timeout_secs = 5
"#;

    let config = parse_config(toml_content).unwrap();
    assert_eq!(config.theme, "ocean");
    assert!(!config.enable_emoji);
    assert_eq!(config.http_proxy.as_deref(), Some("http://127.0.0.1:3128"));
    assert_eq!(config.database_path.as_deref(), Some("/tmp/explorer.db"));
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.directory.base_url, "http://localhost:8080/v3.1");
    assert_eq!(config.directory.timeout_secs, 5);
    assert!(config.directory.user_agent.starts_with("country-explorer/"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(parse_config("theme = [").is_err());
    assert!(parse_config("enable_emoji = \"yes\"").is_err());
}
