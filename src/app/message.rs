// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::routing::Route;
use crate::ui::navbar;
use crate::ui::pages;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    /// A route transition settled. Ignored unless `generation` is the most
    /// recent request.
    NavigationFinished { generation: u64, route: Route },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fa`, `en-US`).
    pub lang: Option<String>,
    /// Optional route to open (e.g. `/en/users`). Falls back to
    /// `[general] start_path`, then `/`.
    pub path: Option<String>,
    /// Configuration loaded by the launcher.
    pub config: Config,
}
