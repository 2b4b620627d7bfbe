//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File receiving tracing output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Color names for the terminal UI.
    #[serde(default)]
    theme: ThemeConfig,
}

/// Color names for marks and accents, parsed by the UI theme.
///
/// Accepts ratatui color names (`"blue"`, `"lightred"`), indexed colors
/// (`"33"`) and hex (`"#ff8800"`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Color of X marks and X's score.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks and O's score.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Title and border color.
    #[serde(default = "default_accent")]
    accent: String,

    /// Background of the winning line.
    #[serde(default = "default_highlight")]
    highlight: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_accent() -> String {
    "cyan".to_string()
}

fn default_highlight() -> String {
    "green".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            accent: default_accent(),
            highlight: default_highlight(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read when present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.theme().x_color(), "blue");
    }

    #[test]
    fn test_partial_theme_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[theme]\no_color = \"magenta\"\n").unwrap();
        assert_eq!(config.theme().o_color(), "magenta");
        assert_eq!(config.theme().x_color(), "blue");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = AppConfig::from_toml_str("log_filter = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
