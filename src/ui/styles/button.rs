// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::{Skin, Tone};
use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Tinted action button (`btn-tonal-*`): translucent fill, stronger on hover.
pub fn tonal(tone: Tone) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, border, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (tone.background_hover, tone.border_hover, tone.text)
            }
            button::Status::Disabled => (
                Color {
                    a: tone.background.a * 0.5,
                    ..tone.background
                },
                tone.border,
                Color {
                    a: 0.5,
                    ..tone.text
                },
            ),
            button::Status::Active => (tone.background, tone.border, tone.text),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button for navbar entries and menu items.
pub fn nav_item(skin: Skin, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(skin.surface_muted),
            _ if selected => Some(skin.chip_background),
            _ => None,
        };
        let text_color = match status {
            button::Status::Disabled => skin.text_muted,
            _ if selected => skin.text_primary,
            _ => skin.text_secondary,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// One segment of the locale picker. Disabled segments stay readable but
/// faded.
pub fn segment(skin: Skin, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if selected {
            skin.primary.background_hover
        } else {
            Color {
                a: opacity::TRANSPARENT,
                ..skin.surface
            }
        };
        let background = match status {
            button::Status::Hovered if !selected => skin.primary.background,
            _ => fill,
        };
        let text_color = match status {
            button::Status::Disabled => Color {
                a: 0.6,
                ..skin.text_secondary
            },
            _ if selected => skin.primary.text,
            _ => skin.text_secondary,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: skin.border,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonal_button_darkens_on_hover() {
        let skin = Skin::default();
        let style_fn = tonal(skin.danger);

        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_eq!(normal.background, Some(Background::Color(skin.danger.background)));
        assert_ne!(normal.background, hover.background);
        assert_eq!(hover.border.color, skin.danger.border_hover);
    }

    #[test]
    fn disabled_segment_fades_text() {
        let skin = Skin::default();
        let style = segment(skin, false)(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
    }

    #[test]
    fn selected_nav_item_has_background() {
        let skin = Skin::default();
        let selected = nav_item(skin, true)(&Theme::Dark, button::Status::Active);
        let plain = nav_item(skin, false)(&Theme::Dark, button::Status::Active);
        assert!(selected.background.is_some());
        assert!(plain.background.is_none());
    }
}
