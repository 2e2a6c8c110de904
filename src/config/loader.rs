use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Longest toast duration accepted from config.
const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/primeorder/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("primeorder").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Toast duration is between 1 ms and one minute
    /// - The log level is a valid filter directive
    /// - The override locale directory, if set, exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        let duration = self.toast.duration_ms;
        if duration == 0 || duration > MAX_TOAST_DURATION_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "toast.duration_ms must be between 1 and {MAX_TOAST_DURATION_MS}, got {duration}"
                ),
            });
        }

        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid logging.level '{}'", self.logging.level),
            });
        }

        if let Some(dir) = &self.i18n.locale_path {
            if !dir.is_dir() {
                return Err(ConfigError::ValidationError {
                    message: format!("i18n.locale_path '{}' is not a directory", dir.display()),
                });
            }
        }

        Ok(())
    }
}
