// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the surface: a light bubble in dark mode, a dark bubble in
//! light mode, so they stand out from the navbar they annotate.

use super::Skin;
use crate::ui::design_tokens::{border, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

pub use iced::widget::tooltip::Position;

/// Bubble style derived from the current skin.
pub fn bubble(skin: Skin) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(skin.text_primary)),
        text_color: Some(skin.background),
        border: Border {
            color: skin.border_strong,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: skin.shadow,
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
    skin: Skin,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION).font(skin.font))
        .padding(spacing::XS)
        .style(bubble(skin));

    tooltip(content, tip_container, position).gap(spacing::XS)
}
