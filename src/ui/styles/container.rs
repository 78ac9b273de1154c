// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::{ChipColors, Skin};
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::FRAC_PI_4;

/// Whole-window background.
pub fn page(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.background)),
        text_color: Some(skin.text_primary),
        ..Default::default()
    }
}

/// Page section (`bg-surface` panel with a soft border).
pub fn section(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.surface)),
        text_color: Some(skin.text_primary),
        border: Border {
            color: skin.border,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: skin.shadow,
        ..Default::default()
    }
}

/// Record card with the diagonal card gradient.
pub fn card(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let gradient = Linear::new(Radians(FRAC_PI_4))
            .add_stop(0.0, skin.card_from)
            .add_stop(1.0, skin.card_to);

        container::Style {
            background: Some(Background::Gradient(gradient.into())),
            text_color: Some(skin.text_primary),
            border: Border {
                color: skin.border,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: skin.shadow,
            ..Default::default()
        }
    }
}

/// Status chip with its own border and text colour.
pub fn status_chip(colors: ChipColors) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.text),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Neutral chip used for role labels.
pub fn soft_chip(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.chip_background)),
        text_color: Some(skin.chip_text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled circle for status and presence dots.
pub fn dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round avatar with an indigo ring.
pub fn avatar(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..palette::INDIGO_500
        })),
        text_color: Some(skin.text_primary),
        border: Border {
            color: Color {
                a: opacity::RING,
                ..palette::INDIGO_500
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Placeholder frame of a camera preview.
pub fn preview_frame(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.surface_muted)),
        text_color: Some(skin.text_secondary),
        border: Border {
            color: skin.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.surface)),
        text_color: Some(skin.text_primary),
        border: Border {
            color: skin.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dropdown of the compact navigation menu.
pub fn dropdown(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.surface)),
        text_color: Some(skin.text_primary),
        border: Border {
            color: skin.border_strong,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: skin.shadow_strong,
        ..Default::default()
    }
}
