// SPDX-License-Identifier: MPL-2.0
//! Stateless display components for records.
//!
//! Components render localized strings prepared by the page composers and
//! never hold or fetch data. Actions are surfaced upward as [`actions::Action`]
//! values.
//!
//! # Components
//!
//! - [`actions`] - Record actions, the handler seam and action bars
//! - [`status_chip`] - Colour-coded status dots and chips
//! - [`user_card`] - Operator card with avatar, role and presence
//! - [`camera_card`] - Camera card with status and detail grid
//! - [`camera_preview`] - Preview tile for a camera feed

pub mod actions;
pub mod camera_card;
pub mod camera_preview;
pub mod status_chip;
pub mod user_card;
