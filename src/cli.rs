use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::i18n::{Locale, Route};

#[derive(Debug, Parser)]
#[command(name = "primeorder", version, about = "Check primes and sort numbers in your terminal")]
pub struct Cli {
    /// Locale to start in (overrides the config file)
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Path to an alternative config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Initial route, e.g. `/en?ref=home`
    #[arg(long)]
    pub url: Option<String>,
}

impl Cli {
    /// Load the config file named on the command line, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Flags win over file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(locale) = self.locale {
            config.i18n.initial_locale = Some(locale);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    /// The route the page opens on.
    ///
    /// `--url` supplies path and query. An explicit `--locale` overrides any
    /// locale prefix in the URL.
    pub fn initial_route(&self, config: &Config) -> Route {
        let default_locale = config.i18n.default_locale;
        let route = match &self.url {
            Some(url) => Route::parse(url, default_locale),
            None => Route::root(config.i18n.startup_locale(), default_locale),
        };
        match self.locale.and_then(|locale| route.switch_locale(locale)) {
            Some(switched) => switched,
            None => route,
        }
    }
}
