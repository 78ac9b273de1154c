// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration entries.

// ==========================================================================
// Logging
// ==========================================================================

/// Filter used when neither `RUST_LOG` nor `[logging] filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Navigation
// ==========================================================================

/// Route opened when no `--path` or `[general] start_path` is given, before
/// the locale prefix is applied.
pub const DEFAULT_START_PAGE: &str = "/";
