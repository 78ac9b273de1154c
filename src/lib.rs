// SPDX-License-Identifier: MPL-2.0
//! `farda_console` is a localized camera-management console built with the
//! Iced GUI framework.
//!
//! It shows operators and cameras in Farsi (right to left) or English (left
//! to right), keeps the light/dark preference between sessions, and routes
//! between locale-prefixed pages.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod routing;
pub mod ui;
