// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed catalogs, one bundle per supported locale.

use super::keys::MessageKey;
use crate::error::{Error, Result};
use crate::routing::Locale;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Missing keys found while checking catalogs against [`MessageKey::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// `locale:key.path` entries.
    pub missing: Vec<String>,
}

impl CatalogReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(Error::MissingTranslations {
                missing: self.missing,
            })
        }
    }
}

pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    current_locale: Locale,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locales", &self.available_locales())
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::Fa).unwrap_or_else(|_| Self::empty(Locale::Fa))
    }
}

impl I18n {
    /// Loads the catalogs embedded in the binary and activates `locale`.
    pub fn new(locale: Locale) -> Result<Self> {
        let sources = Locale::ALL.iter().filter_map(|&catalog| {
            let filename = format!("{}.ftl", catalog.code());
            Asset::get(&filename).map(|file| {
                (
                    catalog,
                    String::from_utf8_lossy(file.data.as_ref()).into_owned(),
                )
            })
        });
        Self::from_sources(sources, locale)
    }

    /// Builds catalogs from raw Fluent sources.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (Locale, String)>,
        locale: Locale,
    ) -> Result<Self> {
        let mut bundles = HashMap::new();

        for (catalog, source) in sources {
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::I18n(format!("{catalog}.ftl: {} parse error(s)", errors.len()))
            })?;
            let mut bundle = FluentBundle::new(vec![catalog.langid()]);
            // Direction is applied by the layout, not by bidi marks in the text.
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| Error::I18n(format!("{catalog}.ftl: {errors:?}")))?;
            bundles.insert(catalog, bundle);
        }

        tracing::debug!(catalogs = bundles.len(), %locale, "translation catalogs loaded");

        Ok(Self {
            bundles,
            current_locale: locale,
        })
    }

    fn empty(locale: Locale) -> Self {
        Self {
            bundles: HashMap::new(),
            current_locale: locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    /// Locales with a loaded catalog, in declaration order.
    #[must_use]
    pub fn available_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.bundles.contains_key(locale))
            .collect()
    }

    /// Switches the active catalog. Locales without a catalog are ignored.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        } else {
            tracing::warn!(%locale, "no catalog for locale; keeping {}", self.current_locale);
        }
    }

    /// Checks every declared key against every loaded catalog.
    #[must_use]
    pub fn validate(&self) -> CatalogReport {
        let missing = self
            .available_locales()
            .into_iter()
            .flat_map(|locale| {
                MessageKey::ALL
                    .iter()
                    .filter(move |key| !self.has_key(locale, **key))
                    .map(move |key| format!("{locale}:{}", key.path()))
            })
            .collect();
        CatalogReport { missing }
    }

    #[must_use]
    pub fn has_key(&self, locale: Locale, key: MessageKey) -> bool {
        self.bundles
            .get(&locale)
            .and_then(|bundle| bundle.get_message(&key.fluent_id()))
            .is_some_and(|message| message.value().is_some())
    }

    pub fn tr(&self, key: MessageKey) -> String {
        self.format(key, None)
    }

    /// Formats a plural-aware message with `$count`.
    pub fn tr_count(&self, key: MessageKey, count: u32) -> String {
        let mut args = FluentArgs::new();
        args.set("count", count);
        self.format(key, Some(&args))
    }

    fn format(&self, key: MessageKey, args: Option<&FluentArgs<'_>>) -> String {
        let id = key.fluent_id();
        let pattern = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| bundle.get_message(&id).map(|message| (bundle, message)))
            .and_then(|(bundle, message)| message.value().map(|pattern| (bundle, pattern)));

        if let Some((bundle, pattern)) = pattern {
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
            tracing::warn!(key = key.path(), ?errors, "failed to format message");
        } else {
            tracing::warn!(key = key.path(), locale = %self.current_locale, "missing translation");
        }

        missing_marker(key)
    }
}

/// Visible stand-in for a message the active catalog cannot produce.
#[must_use]
pub fn missing_marker(key: MessageKey) -> String {
    format!("⟦{}⟧", key.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogs_cover_every_key() {
        let i18n = I18n::new(Locale::En).expect("embedded catalogs parse");
        assert_eq!(i18n.available_locales(), vec![Locale::Fa, Locale::En]);
        assert_eq!(i18n.validate(), CatalogReport::default());
    }

    #[test]
    fn translates_in_active_locale() {
        let mut i18n = I18n::new(Locale::En).unwrap();
        assert_eq!(i18n.tr(MessageKey::NavUsers), "Users");
        i18n.set_locale(Locale::Fa);
        assert_eq!(i18n.tr(MessageKey::NavUsers), "کاربران");
    }

    #[test]
    fn english_plural_branches() {
        let i18n = I18n::new(Locale::En).unwrap();
        assert_eq!(
            i18n.tr_count(MessageKey::RelativeMinutes, 1),
            "1 minute ago"
        );
        assert_eq!(
            i18n.tr_count(MessageKey::RelativeMinutes, 18),
            "18 minutes ago"
        );
        assert_eq!(i18n.tr_count(MessageKey::RelativeHours, 1), "1 hour ago");
        assert_eq!(i18n.tr_count(MessageKey::RelativeHours, 4), "4 hours ago");
    }

    #[test]
    fn farsi_plural_branches() {
        let i18n = I18n::new(Locale::Fa).unwrap();
        assert_eq!(
            i18n.tr_count(MessageKey::RelativeMinutes, 1),
            "یک دقیقه پیش"
        );
        assert_eq!(
            i18n.tr_count(MessageKey::RelativeMinutes, 18),
            "18 دقیقه پیش"
        );
    }

    #[test]
    fn zero_minutes_reads_as_just_now() {
        let i18n = I18n::new(Locale::En).unwrap();
        assert_eq!(i18n.tr_count(MessageKey::RelativeMinutes, 0), "just now");
    }

    #[test]
    fn missing_key_renders_visible_marker() {
        let i18n = I18n::from_sources(
            [(Locale::En, "home-page-title = Home\n".to_string())],
            Locale::En,
        )
        .unwrap();
        assert_eq!(i18n.tr(MessageKey::HomeTitle), "Home");
        assert_eq!(i18n.tr(MessageKey::NavUsers), "⟦Navbar.pages.users⟧");
    }

    #[test]
    fn validation_reports_locale_and_path() {
        let i18n = I18n::from_sources(
            [(Locale::Fa, "home-page-title = خانه\n".to_string())],
            Locale::Fa,
        )
        .unwrap();
        let report = i18n.validate();
        assert!(report.missing.contains(&"fa:Navbar.pages.users".to_string()));
        assert!(!report.missing.contains(&"fa:HomePage.title".to_string()));
        assert!(report.into_result().is_err());
    }

    #[test]
    fn set_locale_ignores_locales_without_catalog() {
        let mut i18n =
            I18n::from_sources([(Locale::En, "home-page-title = Home\n".into())], Locale::En)
                .unwrap();
        i18n.set_locale(Locale::Fa);
        assert_eq!(i18n.current_locale(), Locale::En);
    }

    #[test]
    fn parse_errors_are_reported() {
        let result = I18n::from_sources([(Locale::En, "= broken".to_string())], Locale::En);
        assert!(matches!(result, Err(Error::I18n(_))));
    }
}
