use crate::domain::error::ExplorerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "country-explorer";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    pub http_proxy: Option<String>,
    pub database_path: Option<String>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Where and how the country directory is reached.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DirectoryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: true,
            http_proxy: None,
            database_path: None,
            logging: Logging::default(),
            directory: DirectoryConfig::default(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "classic".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_base_url() -> String {
    "https://restcountries.com/v3.1".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("country-explorer/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Map the configured level name onto a `tracing` filter directive.
///
/// Unknown names fall back to `warn`.
pub fn log_level_filter(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
}

/// Get database path (`database_path` if set, otherwise the config directory)
pub fn get_database_path(config: &Config) -> PathBuf {
    if let Some(path) = config.database_path.as_deref().filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("explorer.db")
}

pub fn parse_config(content: &str) -> Result<Config, ExplorerError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn load_config() -> Result<Config, ExplorerError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), ExplorerError> {
    let Some(path) = get_config_path() else {
        return Err(ExplorerError::Config(
            "Cannot determine config directory".to_string(),
        ));
    };

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| ExplorerError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(&path, toml_content)
        .map_err(|e| ExplorerError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses_back() {
        let sample = toml::to_string_pretty(&Config::default()).unwrap();
        let config = parse_config(&sample).unwrap();
        assert_eq!(config.directory.base_url, "https://restcountries.com/v3.1");
        assert_eq!(config.directory.timeout_secs, 30);
        assert!(config.logging.enable);
    }

    #[test]
    fn test_database_path_override() {
        let config = Config {
            database_path: Some("/tmp/explorer-test.db".to_string()),
            ..Config::default()
        };
        assert_eq!(
            get_database_path(&config),
            PathBuf::from("/tmp/explorer-test.db")
        );

        let blank = Config {
            database_path: Some(String::new()),
            ..Config::default()
        };
        assert!(get_database_path(&blank).ends_with("country-explorer/explorer.db"));
    }
}
