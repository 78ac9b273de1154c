// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language and the route to open at startup
//! - `[logging]` - Default `tracing` filter (`RUST_LOG` still wins)
//!
//! # Path Resolution
//!
//! 1. `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` / `FARDA_CONSOLE_CONFIG_DIR`
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use farda_console::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! println!("log filter: {}", config.log_filter());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Interface language code (`fa`, `en`, `en-US`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Route opened at startup, e.g. `/en/users`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// The configured log filter, or [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.logging
            .filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

// =============================================================================
// Path Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads configuration from the default path.
///
/// Returns `(config, warning)`. A missing file is not an error; an unreadable
/// one yields the default config plus a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), "failed to load config: {err}");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en".to_string()),
                start_path: Some("/en/users".to_string()),
            },
            logging: LoggingConfig {
                filter: Some("farda_console=debug".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fa\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fa"));
        assert_eq!(loaded.general.start_path, None);
        assert_eq!(loaded.logging, LoggingConfig::default());
    }

    #[test]
    fn default_config_serializes_to_empty_sections() {
        let content = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(!content.contains("language"));
        assert!(!content.contains("filter"));
    }

    #[test]
    fn log_filter_defaults_to_info() {
        let mut config = Config::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        config.logging.filter = Some("  ".to_string());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        config.logging.filter = Some("debug".to_string());
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn saved_file_is_found_through_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("en".to_string());

        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en"));
    }

    #[test]
    fn corrupt_file_yields_default_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
