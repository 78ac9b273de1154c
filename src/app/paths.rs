// SPDX-License-Identifier: MPL-2.0
//! Where the console keeps its files.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FARDA_CONSOLE_DATA_DIR`, `FARDA_CONSOLE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs`
//!
//! `settings.toml` lives in the config directory; `state.cbor` (the last
//! chosen color mode) lives in the data directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform defaults.
pub const APP_NAME: &str = "FardaConsole";

pub const ENV_DATA_DIR: &str = "FARDA_CONSOLE_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "FARDA_CONSOLE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("data dir override already initialized");
    }
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

fn cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the data directory, e.g. `~/.local/share/FardaConsole/` on Linux.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the config directory, e.g. `~/.config/FardaConsole/` on Linux.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below touch process-wide env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn default_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");

        let override_path = PathBuf::from("/override/config");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(
            get_app_data_dir_with_override(None),
            Some(PathBuf::from("/test/data/dir"))
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
