//! Locale-aware page routes.
//!
//! The default locale is served without a prefix (`/`, `/about?x=1`); every
//! other locale prefixes the path with its code (`/en`, `/es/about?x=1`).

use super::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    locale: Locale,
    default_locale: Locale,
    path: String,
    query: Option<String>,
}

impl Default for Route {
    fn default() -> Self {
        Self::root(Locale::default(), Locale::default())
    }
}

impl Route {
    pub fn new(locale: Locale, default_locale: Locale, path: &str, query: Option<&str>) -> Self {
        Self {
            locale,
            default_locale,
            path: normalize_path(path),
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    pub fn root(locale: Locale, default_locale: Locale) -> Self {
        Self::new(locale, default_locale, "/", None)
    }

    /// Parse a browser-style path such as `/en/about?x=1`.
    ///
    /// A leading segment naming a supported locale selects it; anything else
    /// is taken as a path under the default locale.
    pub fn parse(url: &str, default_locale: Locale) -> Self {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));

        match Locale::from_code(first) {
            Some(locale) => Self::new(locale, default_locale, rest, query),
            _ => Self::new(default_locale, default_locale, path, query),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The same page under `target`, or `None` when `target` is already
    /// active.
    pub fn switch_locale(&self, target: Locale) -> Option<Route> {
        if target == self.locale {
            return None;
        }
        Some(Route {
            locale: target,
            ..self.clone()
        })
    }

    /// Path as shown in the address bar, locale prefix and query included.
    pub fn as_path(&self) -> String {
        let mut out = String::new();
        if self.locale != self.default_locale {
            out.push('/');
            out.push_str(self.locale.code());
            if self.path != "/" {
                out.push_str(&self.path);
            }
        } else {
            out.push_str(&self.path);
        }
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        out
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_has_no_prefix() {
        let route = Route::root(Locale::Pt, Locale::Pt);
        assert_eq!(route.as_path(), "/");
    }

    #[test]
    fn switch_from_pt_to_en_keeps_path_and_query() {
        let route = Route::new(Locale::Pt, Locale::Pt, "/", Some("ref=home"));
        let switched = route.switch_locale(Locale::En).expect("locale changes");
        assert_eq!(switched.locale(), Locale::En);
        assert_eq!(switched.path(), "/");
        assert_eq!(switched.query(), Some("ref=home"));
        assert_eq!(switched.as_path(), "/en?ref=home");
    }

    #[test]
    fn switch_to_current_locale_is_a_noop() {
        let route = Route::root(Locale::Es, Locale::Pt);
        assert!(route.switch_locale(Locale::Es).is_none());
    }

    #[test]
    fn nested_path_is_prefixed() {
        let route = Route::new(Locale::Es, Locale::Pt, "about/team/", None);
        assert_eq!(route.path(), "/about/team");
        assert_eq!(route.as_path(), "/es/about/team");
    }

    #[test]
    fn parse_reads_locale_prefix() {
        let route = Route::parse("/en/about?x=1", Locale::Pt);
        assert_eq!(route.locale(), Locale::En);
        assert_eq!(route.path(), "/about");
        assert_eq!(route.query(), Some("x=1"));
    }

    #[test]
    fn parse_without_prefix_uses_default() {
        let route = Route::parse("/about", Locale::Pt);
        assert_eq!(route.locale(), Locale::Pt);
        assert_eq!(route.path(), "/about");

        let root = Route::parse("", Locale::Pt);
        assert_eq!(root.as_path(), "/");
    }

    #[test]
    fn parse_round_trips_as_path() {
        for url in ["/", "/en", "/es/about?x=1", "/about?y=2"] {
            assert_eq!(Route::parse(url, Locale::Pt).as_path(), url);
        }
    }
}
