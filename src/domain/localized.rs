// SPDX-License-Identifier: MPL-2.0
//! Display strings carried per locale.

use crate::routing::Locale;
use serde::{Deserialize, Serialize};

/// A value with one display string per supported locale.
///
/// English is mandatory and acts as the fallback; the Farsi entry may be
/// absent or empty, in which case [`LocalizedText::select`] returns English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa: Option<String>,
    pub en: String,
}

impl LocalizedText {
    #[must_use]
    pub fn new(fa: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fa: Some(fa.into()),
            en: en.into(),
        }
    }

    /// Text that only has the fallback entry.
    #[must_use]
    pub fn english_only(en: impl Into<String>) -> Self {
        Self {
            fa: None,
            en: en.into(),
        }
    }

    /// Raw entry for `locale`, if present and non-empty.
    #[must_use]
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let entry = match locale {
            Locale::Fa => self.fa.as_deref(),
            Locale::En => Some(self.en.as_str()),
        };
        entry.filter(|text| !text.trim().is_empty())
    }

    /// Display string for `locale`, falling back to English.
    #[must_use]
    pub fn select(&self, locale: Locale) -> &str {
        self.get(locale).unwrap_or(&self.en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_active_locale_entry() {
        let text = LocalizedText::new("علی رضایی", "Ali Rezaei");
        assert_eq!(text.select(Locale::Fa), "علی رضایی");
        assert_eq!(text.select(Locale::En), "Ali Rezaei");
    }

    #[test]
    fn missing_entry_falls_back_to_english() {
        let text = LocalizedText::english_only("Warehouse Camera");
        assert_eq!(text.select(Locale::Fa), "Warehouse Camera");
    }

    #[test]
    fn blank_entry_falls_back_to_english() {
        let text = LocalizedText::new("  ", "South Exit");
        assert_eq!(text.select(Locale::Fa), "South Exit");
        assert_eq!(text.get(Locale::Fa), None);
    }
}
