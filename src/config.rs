//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. The
//! backend base URL lives here instead of being baked into the client.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::UserId;

/// Default backend base URL (local development server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url", alias = "baseUrl")]
    pub base_url: String,

    #[serde(default = "default_timeout", alias = "timeoutSecs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at the given base URL with the default timeout
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Identity the pages act on behalf of
///
/// There is no login yet; the id comes from configuration and is handed to
/// the pages explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_id", alias = "userId")]
    pub user_id: UserId,
}

fn default_user_id() -> UserId {
    1
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive for this config.
    ///
    /// A bare level applies to this crate only; a value that already names
    /// targets (`rehabit=debug,reqwest=warn`) is passed through.
    pub fn filter_directive(&self) -> String {
        let level = self.level.trim();
        if level.is_empty() {
            format!("rehabit={}", default_log_level())
        } else if level.contains('=') || level.contains(',') {
            level.to_string()
        } else {
            format!("rehabit={}", level.to_lowercase())
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("rehabit").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("REHABIT_API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("REHABIT_API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(t) => self.api.timeout_secs = t,
                Err(_) => tracing::warn!("Ignoring invalid REHABIT_API_TIMEOUT_SECS: {}", timeout),
            }
        }
        if let Some(user_id) = var("REHABIT_USER_ID") {
            match user_id.parse() {
                Ok(id) => self.session.user_id = id,
                Err(_) => tracing::warn!("Ignoring invalid REHABIT_USER_ID: {}", user_id),
            }
        }
        if let Some(level) = var("REHABIT_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Rehabit Configuration
#
# Environment variables override these settings:
# - REHABIT_API_BASE_URL
# - REHABIT_API_TIMEOUT_SECS
# - REHABIT_USER_ID
# - REHABIT_LOG_LEVEL

[api]
# Backend base URL (including the /api prefix)
baseUrl = "http://127.0.0.1:8000/api"

# Request timeout in seconds
timeout_secs = 10

[session]
# Demo user until authentication exists
user_id = 1

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.session.user_id, 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_base_url_camel_case_option() {
        let config = Config::from_toml(
            r#"
            [api]
            baseUrl = "https://rehabit.example.com/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url(), "https://rehabit.example.com/api");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::from_toml(&generate_default_config()).unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("REHABIT_API_BASE_URL", "http://10.0.0.5:9000/api"),
            ("REHABIT_API_TIMEOUT_SECS", "not-a-number"),
            ("REHABIT_USER_ID", "42"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.session.user_id, 42);
    }

    #[test]
    fn test_log_level_filter_directive() {
        let mut config = Config::default();
        assert_eq!(config.logging.filter_directive(), "rehabit=info");

        config.apply_overrides(|k| (k == "REHABIT_LOG_LEVEL").then(|| "DEBUG".to_string()));
        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.logging.filter_directive(), "rehabit=debug");

        config.logging.level = "rehabit=trace,reqwest=warn".to_string();
        assert_eq!(config.logging.filter_directive(), "rehabit=trace,reqwest=warn");

        config.logging.level = "  ".to_string();
        assert_eq!(config.logging.filter_directive(), "rehabit=info");
    }
}
