// SPDX-License-Identifier: MPL-2.0
//! Supported interface languages and the text direction each one implies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language the console ships a catalog for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fa,
    En,
}

/// Horizontal flow of text and of row-based layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    /// Every locale in declaration order.
    pub const ALL: [Locale; 2] = [Locale::Fa, Locale::En];

    /// Locale used when a localized value has no entry for the active one.
    pub const FALLBACK: Locale = Locale::En;

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fa => "fa",
            Locale::En => "en",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Locale::Fa => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// Language identifier handed to Fluent for plural rules.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl Direction {
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Value of the `dir` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLocale {}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts a bare language code or a full tag (`en-US`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .parse::<LanguageIdentifier>()
            .map(|id| id.language.as_str().to_ascii_lowercase())
            .map_err(|_| UnsupportedLocale(s.to_string()))?;

        match language.as_str() {
            "fa" => Ok(Locale::Fa),
            "en" => Ok(Locale::En),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_codes() {
        assert_eq!("fa".parse::<Locale>(), Ok(Locale::Fa));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn parses_tags_with_region_and_case() {
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("FA-IR".parse::<Locale>(), Ok(Locale::Fa));
    }

    #[test]
    fn rejects_unknown_languages() {
        assert!("de".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
        assert!("not a tag!".parse::<Locale>().is_err());
    }

    #[test]
    fn direction_follows_locale() {
        assert_eq!(Locale::Fa.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Direction::Rtl.as_str(), "rtl");
    }
}
