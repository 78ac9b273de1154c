// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every UI component.
//!
//! Styles never read the root variables directly: the view resolves a
//! [`Skin`] once per frame from [`RootStyles`] and hands copies of the
//! colours it needs to each style closure.

pub mod button;
pub mod container;
pub mod tooltip;

use crate::domain::{CameraStatus, PresenceStatus};
use crate::routing::Locale;
use crate::ui::design_tokens::{palette, root};
use crate::ui::theming::{self, parse_css_color, parse_css_shadow, RootStyles};
use iced::{Color, Font, Shadow};

/// One tonal button family (`--btn-{name}-*`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub background: Color,
    pub background_hover: Color,
    pub border: Color,
    pub border_hover: Color,
    pub text: Color,
}

/// One status chip family (`--chip-status-{name}-*`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub dot: Color,
}

/// Colours resolved from the root variables for one frame, plus the face
/// every label is set in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skin {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_strong: Color,
    pub card_from: Color,
    pub card_to: Color,
    pub chip_background: Color,
    pub chip_text: Color,
    pub shadow: Shadow,
    pub shadow_strong: Shadow,
    pub success: Tone,
    pub primary: Tone,
    pub info: Tone,
    pub danger: Tone,
    pub active: ChipColors,
    pub inactive: ChipColors,
    pub maintenance: ChipColors,
    pub font: Font,
}

impl Skin {
    /// Reads every colour variable, using the dark table for anything unset.
    #[must_use]
    pub fn from_root(styles: &RootStyles) -> Self {
        let color = |name: &str| {
            styles
                .color(name)
                .or_else(|| fallback(name))
                .unwrap_or(palette::BLACK)
        };
        let shadow = |name: &str| {
            styles
                .property(name)
                .and_then(parse_css_shadow)
                .or_else(|| fallback_value(name).and_then(parse_css_shadow))
                .unwrap_or_default()
        };
        let tone = |name: &str| Tone {
            background: color(&format!("--btn-{name}-bg")),
            background_hover: color(&format!("--btn-{name}-bg-hover")),
            border: color(&format!("--btn-{name}-border")),
            border_hover: color(&format!("--btn-{name}-border-hover")),
            text: color(&format!("--btn-{name}-color")),
        };
        let chip = |name: &str| ChipColors {
            background: color(&format!("--chip-status-{name}-bg")),
            border: color(&format!("--chip-status-{name}-border")),
            text: color(&format!("--chip-status-{name}-text")),
            dot: color(&format!("--chip-status-{name}-dot")),
        };

        Self {
            background: color("--app-background"),
            surface: color("--app-surface"),
            surface_muted: color("--app-surface-muted"),
            text_primary: color("--app-text-primary"),
            text_secondary: color("--app-text-secondary"),
            text_muted: color("--app-text-muted"),
            border: color("--app-border"),
            border_strong: color("--app-border-strong"),
            card_from: color("--app-card-gradient-from"),
            card_to: color("--app-card-gradient-to"),
            chip_background: color("--app-chip-bg"),
            chip_text: color("--app-chip-text"),
            shadow: shadow("--app-shadow"),
            shadow_strong: shadow("--app-shadow-strong"),
            success: tone("success"),
            primary: tone("primary"),
            info: tone("info"),
            danger: tone("danger"),
            active: chip("active"),
            inactive: chip("inactive"),
            maintenance: chip("maintenance"),
            font: Font::DEFAULT,
        }
    }

    /// Sets labels in the preferred face of `locale`.
    #[must_use]
    pub fn with_locale(self, locale: Locale) -> Self {
        Self {
            font: theming::font_for(locale),
            ..self
        }
    }

    #[must_use]
    pub fn camera_status(&self, status: CameraStatus) -> ChipColors {
        match status {
            CameraStatus::Active => self.active,
            CameraStatus::Inactive => self.inactive,
            CameraStatus::Maintenance => self.maintenance,
        }
    }

    /// Presence dots use fixed colours in both modes.
    #[must_use]
    pub fn presence(&self, status: PresenceStatus) -> Color {
        match status {
            PresenceStatus::Online => palette::EMERALD_400,
            PresenceStatus::Idle => palette::AMBER_400,
            PresenceStatus::Offline => palette::SLATE_500,
        }
    }
}

impl Default for Skin {
    fn default() -> Self {
        Self::from_root(&RootStyles::default())
    }
}

fn fallback_value(name: &str) -> Option<&'static str> {
    root::DARK
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

fn fallback(name: &str) -> Option<Color> {
    fallback_value(name).and_then(parse_css_color)
}
