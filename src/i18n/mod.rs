// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles locale resolution, catalog loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from the route, CLI, config, or system settings
//! - Embedded `.ftl` catalogs checked against the typed [`MessageKey`] set
//! - Plural-aware relative-time phrases
//! - Runtime language switching

pub mod fluent;
pub mod keys;

pub use fluent::{CatalogReport, I18n};
pub use keys::MessageKey;

use crate::config::Config;
use crate::routing::{Locale, RoutingConfig};

/// Resolves the locale for a page request and makes it the active one.
///
/// Supported hints pass through unchanged; anything else resolves to the
/// routing default. Localized lookups made after this call use the result.
pub fn resolve_request(routing: &RoutingConfig, i18n: &mut I18n, hint: Option<&str>) -> Locale {
    let locale = routing.resolve_locale(hint);
    i18n.set_locale(locale);
    locale
}

/// Picks the locale to start in.
///
/// Priority: CLI `--lang`, then `[general] language` from the config file,
/// then the OS locale, then the routing default.
#[must_use]
pub fn startup_locale(cli_lang: Option<&str>, config: &Config, routing: &RoutingConfig) -> Locale {
    let os_locale = sys_locale::get_locale();
    pick_locale(
        [
            cli_lang,
            config.general.language.as_deref(),
            os_locale.as_deref(),
        ],
        routing,
    )
}

/// Negotiates a declared locale from free-form tags such as `en-US` or
/// `FA_ir`. Route segments never go through here.
fn pick_locale(candidates: [Option<&str>; 3], routing: &RoutingConfig) -> Locale {
    candidates
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.replace('_', "-").parse::<Locale>().ok())
        .find(|locale| routing.has_locale(locale.code()))
        .unwrap_or_else(|| routing.default_locale())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_request_sets_active_locale() {
        let routing = RoutingConfig::standard();
        let mut i18n = I18n::new(Locale::Fa).unwrap();
        let locale = resolve_request(&routing, &mut i18n, Some("en"));
        assert_eq!(locale, Locale::En);
        assert_eq!(i18n.current_locale(), Locale::En);
        assert_eq!(i18n.tr(MessageKey::HomeTitle), "Camera Configuration");
    }

    #[test]
    fn resolve_request_falls_back_to_default() {
        let routing = RoutingConfig::standard();
        let mut i18n = I18n::new(Locale::En).unwrap();
        assert_eq!(resolve_request(&routing, &mut i18n, Some("xx")), Locale::Fa);
        assert_eq!(i18n.current_locale(), Locale::Fa);
    }

    #[test]
    fn cli_wins_over_config() {
        let routing = RoutingConfig::standard();
        let locale = pick_locale([Some("en"), Some("fa"), None], &routing);
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn unsupported_cli_falls_through_to_config() {
        let routing = RoutingConfig::standard();
        let locale = pick_locale([Some("de"), Some("en"), Some("fa-IR")], &routing);
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn os_locale_is_used_last() {
        let routing = RoutingConfig::standard();
        let locale = pick_locale([None, None, Some("en-GB")], &routing);
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn tags_are_negotiated_at_startup_only() {
        let routing = RoutingConfig::standard();
        assert_eq!(pick_locale([Some("EN-us"), None, None], &routing), Locale::En);
        assert_eq!(pick_locale([None, None, Some("fa_IR")], &routing), Locale::Fa);
        assert_eq!(routing.resolve_locale(Some("EN-us")), Locale::Fa);
    }

    #[test]
    fn resolve_request_rejects_tagged_hint() {
        let routing = RoutingConfig::standard();
        let mut i18n = I18n::new(Locale::En).unwrap();
        assert_eq!(resolve_request(&routing, &mut i18n, Some("en-US")), Locale::Fa);
    }

    #[test]
    fn nothing_supported_uses_default() {
        let routing = RoutingConfig::standard();
        assert_eq!(pick_locale([None, Some("ja"), None], &routing), Locale::Fa);
    }

    #[test]
    fn startup_locale_prefers_config_over_system() {
        let mut config = Config::default();
        config.general.language = Some("en".into());
        let routing = RoutingConfig::standard();
        assert_eq!(startup_locale(None, &config, &routing), Locale::En);
    }
}
