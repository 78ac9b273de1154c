// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state that survives restarts but is not a user-edited preference
//! (those live in `settings.toml`). Today that is the last chosen colour mode.
//!
//! # Path Resolution
//!
//! 1. `load_from()`/`save_to()` with an explicit directory
//! 2. `--data-dir` / `FARDA_CONSOLE_DATA_DIR`
//! 3. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use crate::ui::theming::{ColorMode, ColorModeStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Absent means "use the default mode".
    #[serde(default)]
    pub color_mode: Option<ColorMode>,
}

impl AppState {
    /// Loads state from `base_dir`, or the data directory when `None`.
    ///
    /// Returns `(state, warning)`; on failure the state is the default and the
    /// warning is an i18n-style key describing what went wrong.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                ),
            },
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves state to `base_dir` (or the data directory), creating the
    /// directory if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// Colour-mode store backed by `state.cbor`.
#[derive(Debug, Clone, Default)]
pub struct StateFileStore {
    base_dir: Option<PathBuf>,
}

impl StateFileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }
}

impl ColorModeStore for StateFileStore {
    fn load(&self) -> Option<ColorMode> {
        let (state, warning) = AppState::load_from(self.base_dir.clone());
        if let Some(key) = warning {
            tracing::warn!(warning = %key, "ignoring unreadable state file");
        }
        state.color_mode
    }

    fn save(&mut self, mode: ColorMode) -> Result<()> {
        let (mut state, _) = AppState::load_from(self.base_dir.clone());
        state.color_mode = Some(mode);
        match state.save_to(self.base_dir.clone()) {
            None => Ok(()),
            Some(key) => Err(Error::State(key)),
        }
    }
}
