// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`pages`] - Page composers and views (home, users, not found)
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Stateless record cards, status chips and action bars
//! - [`navbar`] - Navigation bar with locale picker and color-mode toggle
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color-mode provider and root style variables
//! - [`direction`] - Right-to-left layout helpers

pub mod components;
pub mod design_tokens;
pub mod direction;
pub mod navbar;
pub mod pages;
pub mod styles;
pub mod theming;
