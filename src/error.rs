// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("State Error: {0}")]
    State(String),

    #[error("I18n Error: {0}")]
    I18n(String),

    /// One or more catalogs lack keys the interface renders.
    #[error("Missing translations: {}", .missing.join(", "))]
    MissingTranslations { missing: Vec<String> },

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Failures of the locale-prefixed path table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The first segment names a locale that is not supported, or the
    /// remaining path is not a declared page.
    #[error("no page at `{0}`")]
    NotFound(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_translations_lists_every_entry() {
        let err = Error::MissingTranslations {
            missing: vec!["fa:HomePage.title".into(), "en:Header.title".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing translations: fa:HomePage.title, en:Header.title"
        );
    }

    #[test]
    fn route_error_is_transparent() {
        let err: Error = RouteError::NotFound("/de/users".into()).into();
        assert_eq!(err.to_string(), "no page at `/de/users`");
    }
}
