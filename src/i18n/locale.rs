use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported display locales.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Pt,
    Es,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}' (expected en, pt or es)")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Button order in the header.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Pt, Locale::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
            Locale::Es => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pt => "PT",
            Locale::Es => "ES",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    /// The next locale in button order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_portuguese() {
        assert_eq!(Locale::default(), Locale::Pt);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ES".parse::<Locale>(), Ok(Locale::Es));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn next_cycles_through_all() {
        let mut locale = Locale::En;
        for expected in [Locale::Pt, Locale::Es, Locale::En] {
            locale = locale.next();
            assert_eq!(locale, expected);
        }
    }
}
