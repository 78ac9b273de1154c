// SPDX-License-Identifier: MPL-2.0
//! Colour-coded status indicators: a dot followed by a label.

use crate::routing::Direction;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{container as container_styles, ChipColors};
use iced::alignment::Vertical;
use iced::widget::{container, text, Space};
use iced::{Color, Element, Font, Length};

fn dot<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(sizing::STATUS_DOT))
        .height(Length::Fixed(sizing::STATUS_DOT))
        .style(container_styles::dot(color))
        .into()
}

/// Bare dot and label, used for presence.
pub fn indicator<'a, Message: 'a>(
    label: impl Into<String>,
    color: Color,
    font: Font,
    direction: Direction,
) -> Element<'a, Message> {
    direction::row(
        direction,
        [
            dot(color),
            text(label.into()).size(typography::CAPTION).font(font).into(),
        ],
    )
    .spacing(spacing::XS)
    .align_y(Vertical::Center)
    .into()
}

/// Bordered chip, used for camera status.
pub fn chip<'a, Message: 'a>(
    label: impl Into<String>,
    colors: ChipColors,
    font: Font,
    direction: Direction,
) -> Element<'a, Message> {
    let content = direction::row(
        direction,
        [
            dot(colors.dot),
            text(label.into())
                .size(typography::CAPTION)
                .font(font)
                .color(colors.text)
                .into(),
        ],
    )
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    container(content)
        .padding([spacing::XXS, spacing::SM])
        .style(container_styles::status_chip(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CameraStatus;
    use crate::ui::styles::Skin;

    #[test]
    fn indicators_build_in_both_directions() {
        let skin = Skin::default();
        let colors = skin.camera_status(CameraStatus::Active);
        let _: Element<'_, ()> = chip("Active", colors, skin.font, Direction::Ltr);
        let _: Element<'_, ()> = indicator("آنلاین", colors.dot, skin.font, Direction::Rtl);
    }
}
