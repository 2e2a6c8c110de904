//! Translation bundles and lookup.
//!
//! Bundles are flat JSON objects stored as `{locale}/{namespace}.json`. The
//! copies under `locales/` are compiled into the binary; a directory with the
//! same layout can override them file by file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use thiserror::Error;

use super::Locale;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Bundles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Common,
    Toasts,
    Footer,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Namespace::Common, Namespace::Toasts, Namespace::Footer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Common => "common",
            Namespace::Toasts => "toasts",
            Namespace::Footer => "footer",
        }
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read translation bundle '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation bundle {locale}/{namespace}: {source}")]
    ParseError {
        locale: Locale,
        namespace: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing translation bundle {locale}/{namespace}")]
    MissingBundle {
        locale: Locale,
        namespace: &'static str,
    },
}

/// Key → string lookup, namespaced.
pub trait Translate {
    fn t(&self, namespace: Namespace, key: &str, params: &[(&str, &str)]) -> String;
}

type Bundle = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct Catalog {
    default_locale: Locale,
    bundles: HashMap<(Locale, Namespace), Bundle>,
}

impl Catalog {
    /// Load the compiled-in bundles.
    pub fn embedded(default_locale: Locale) -> Result<Self, I18nError> {
        Self::load(None, default_locale)
    }

    /// Load every bundle, preferring files under `override_dir` when present.
    pub fn load(override_dir: Option<&Path>, default_locale: Locale) -> Result<Self, I18nError> {
        let mut bundles = HashMap::new();
        for locale in Locale::ALL {
            for namespace in Namespace::ALL {
                let raw = read_bundle(override_dir, locale, namespace)?;
                let bundle: Bundle =
                    serde_json::from_slice(&raw).map_err(|e| I18nError::ParseError {
                        locale,
                        namespace: namespace.as_str(),
                        source: e,
                    })?;
                bundles.insert((locale, namespace), bundle);
            }
        }
        Ok(Self {
            default_locale,
            bundles,
        })
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Raw lookup without fallback.
    pub fn lookup(&self, locale: Locale, namespace: Namespace, key: &str) -> Option<&str> {
        self.bundles
            .get(&(locale, namespace))
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }

    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            catalog: self,
            locale,
        }
    }
}

fn read_bundle(
    override_dir: Option<&Path>,
    locale: Locale,
    namespace: Namespace,
) -> Result<Vec<u8>, I18nError> {
    let relative = format!("{}/{}.json", locale.code(), namespace.as_str());

    if let Some(dir) = override_dir {
        let path = dir.join(&relative);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading translation override");
            return fs::read(&path).map_err(|e| I18nError::ReadError { path, source: e });
        }
    }

    Bundles::get(&relative)
        .map(|file| file.data.into_owned())
        .ok_or(I18nError::MissingBundle {
            locale,
            namespace: namespace.as_str(),
        })
}

/// Catalog view bound to one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl Translator<'_> {
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Translate for Translator<'_> {
    /// Falls back to the default locale, then to the key itself.
    fn t(&self, namespace: Namespace, key: &str, params: &[(&str, &str)]) -> String {
        let template = self
            .catalog
            .lookup(self.locale, namespace, key)
            .or_else(|| {
                tracing::warn!(
                    locale = %self.locale,
                    namespace = namespace.as_str(),
                    key,
                    "missing translation, using default locale"
                );
                self.catalog
                    .lookup(self.catalog.default_locale, namespace, key)
            })
            .unwrap_or(key);
        interpolate(template, params)
    }
}

/// Replace `{{name}}` placeholders. Unknown names are left as written.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let name = rest[start + 2..start + 2 + len].trim();
        out.push_str(&rest[..start]);
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + len + 4]),
        }
        rest = &rest[start + len + 4..];
    }
    out.push_str(rest);
    out
}
