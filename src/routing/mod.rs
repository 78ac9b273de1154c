// SPDX-License-Identifier: MPL-2.0
//! Locale-prefixed routing.
//!
//! Every page lives under `/{locale}{pathname}`. The table below is the only
//! place that knows which locales exist, which one is the default, and how a
//! canonical pathname is spelled in each locale.
//!
//! # Examples
//!
//! ```
//! use farda_console::routing::{Locale, Pathname, RoutingConfig};
//!
//! let routing = RoutingConfig::standard();
//! let route = routing.parse("/en/users").unwrap();
//! assert_eq!(route.page, Pathname::Users);
//! assert_eq!(routing.href(route.page, Locale::Fa), "/fa/users");
//! ```

mod locale;

pub use locale::{Direction, Locale, UnsupportedLocale};

use crate::error::RouteError;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical pages reachable through the path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pathname {
    Home,
    Users,
}

impl Pathname {
    pub const ALL: [Pathname; 2] = [Pathname::Home, Pathname::Users];

    /// Locale-independent path used as the key of the path table.
    #[must_use]
    pub fn canonical(self) -> &'static str {
        match self {
            Pathname::Home => "/",
            Pathname::Users => "/users",
        }
    }
}

/// A resolved location: which page, in which language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub locale: Locale,
    pub page: Pathname,
}

impl Route {
    #[must_use]
    pub fn new(locale: Locale, page: Pathname) -> Self {
        Self { locale, page }
    }

    /// The same page in another locale.
    #[must_use]
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }
}

/// Declared locales, default locale and per-locale pathnames.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    locales: Vec<Locale>,
    default_locale: Locale,
    pathnames: BTreeMap<Pathname, BTreeMap<Locale, &'static str>>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoutingConfig {
    /// The console's routing table: `fa` and `en`, defaulting to `fa`.
    #[must_use]
    pub fn standard() -> Self {
        let locales = Locale::ALL.to_vec();
        let pathnames = Pathname::ALL
            .iter()
            .map(|&page| {
                let spelled = locales
                    .iter()
                    .map(|&locale| (locale, page.canonical()))
                    .collect();
                (page, spelled)
            })
            .collect();

        Self {
            locales,
            default_locale: Locale::Fa,
            pathnames,
        }
    }

    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Whether `code` is exactly one of the declared locale codes.
    #[must_use]
    pub fn has_locale(&self, code: &str) -> bool {
        self.supported(code).is_some()
    }

    /// Exact membership: `en-US` or `EN` are not `en`.
    fn supported(&self, code: &str) -> Option<Locale> {
        self.locales
            .iter()
            .copied()
            .find(|locale| locale.code() == code)
    }

    /// The requested locale if it is supported, otherwise the default.
    #[must_use]
    pub fn resolve_locale(&self, requested: Option<&str>) -> Locale {
        requested
            .and_then(|code| self.supported(code))
            .unwrap_or(self.default_locale)
    }

    /// Strict variant used when the locale segment is part of a path.
    pub fn require_locale(&self, code: &str) -> Result<Locale, RouteError> {
        self.supported(code)
            .ok_or_else(|| RouteError::NotFound(format!("/{code}")))
    }

    /// Localized spelling of `page` for `locale`.
    #[must_use]
    pub fn localized_pathname(&self, page: Pathname, locale: Locale) -> &'static str {
        self.pathnames
            .get(&page)
            .and_then(|spelled| spelled.get(&locale))
            .copied()
            .unwrap_or_else(|| page.canonical())
    }

    /// Link target for `page` in `locale`.
    #[must_use]
    pub fn href(&self, page: Pathname, locale: Locale) -> String {
        match self.localized_pathname(page, locale) {
            "/" => format!("/{}", locale.code()),
            path => format!("/{}{}", locale.code(), path),
        }
    }

    /// Link target for a route.
    #[must_use]
    pub fn route_href(&self, route: Route) -> String {
        self.href(route.page, route.locale)
    }

    /// Parses a locale-prefixed path.
    ///
    /// A bare `/` redirects to the default locale's home page. An unsupported
    /// locale segment or an undeclared page yields [`RouteError::NotFound`].
    pub fn parse(&self, path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim().trim_end_matches('/');
        let rest = trimmed.strip_prefix('/').unwrap_or(trimmed);

        if rest.is_empty() {
            return Ok(Route::new(self.default_locale, Pathname::Home));
        }

        let (segment, tail) = match rest.split_once('/') {
            Some((segment, tail)) => (segment, format!("/{tail}")),
            None => (rest, "/".to_string()),
        };

        let locale = self
            .require_locale(segment)
            .map_err(|_| RouteError::NotFound(path.to_string()))?;

        Pathname::ALL
            .into_iter()
            .find(|&page| self.localized_pathname(page, locale) == tail)
            .map(|page| Route::new(locale, page))
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page.canonical() {
            "/" => write!(f, "/{}", self.locale),
            path => write!(f, "/{}{}", self.locale, path),
        }
    }
}
