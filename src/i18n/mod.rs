//! Localization: supported locales, translation bundles and locale routes.

mod catalog;
mod locale;
mod route;

pub use catalog::{interpolate, Catalog, I18nError, Namespace, Translate, Translator};
pub use locale::{Locale, UnknownLocale};
pub use route::Route;
