use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::notice::{OverlapPolicy, DEFAULT_TOAST_DURATION};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Localization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Locale served without a route prefix and used as lookup fallback.
    #[serde(default)]
    pub default_locale: Locale,
    /// Locale shown at startup. Defaults to `default_locale`.
    #[serde(default)]
    pub initial_locale: Option<Locale>,
    /// Directory laid out as `{locale}/{namespace}.json` whose files replace
    /// the built-in bundles.
    #[serde(default)]
    pub locale_path: Option<PathBuf>,
}

/// Toast notification behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays visible (default: 3000).
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u64,
    /// "replace" (default) or "suppress".
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

/// Diagnostic log output. The terminal belongs to the UI, so logs only go
/// to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. No file means no logging.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION.as_millis() as u64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            initial_locale: None,
            locale_path: None,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl I18nConfig {
    pub fn startup_locale(&self) -> Locale {
        self.initial_locale.unwrap_or(self.default_locale)
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
