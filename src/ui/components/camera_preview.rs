// SPDX-License-Identifier: MPL-2.0
//! Compact preview tile for a camera feed.
//!
//! Streams are not decoded; the frame is a placeholder showing the stream
//! address.

use super::status_chip;
use crate::domain::CameraStatus;
use crate::routing::Direction;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{container as container_styles, Skin};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraPreviewModel {
    pub id: String,
    pub name: String,
    pub number: String,
    pub stream_url: String,
    pub status: CameraStatus,
    pub status_label: String,
}

pub fn view<'a, Message: 'a>(
    model: &'a CameraPreviewModel,
    skin: Skin,
    direction: Direction,
) -> Element<'a, Message> {
    let frame = container(
        text(model.stream_url.as_str())
            .font(skin.font)
            .size(typography::CAPTION)
            .color(skin.text_muted),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PREVIEW_FRAME_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(container_styles::preview_frame(skin));

    let caption = Column::new()
        .push(text(model.name.as_str()).size(typography::BODY).font(skin.font))
        .push(
            text(model.number.as_str())
                .font(skin.font)
                .size(typography::CAPTION)
                .color(skin.text_muted),
        )
        .align_x(direction::start(direction))
        .width(Length::Fill);

    let chip = status_chip::chip(
        model.status_label.as_str(),
        skin.camera_status(model.status),
        skin.font,
        direction,
    );
    let footer = direction::row(direction, [caption.into(), chip]).align_y(Vertical::Center);

    container(Column::new().push(frame).push(footer).spacing(spacing::SM))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::card(skin))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_builds() {
        let model = CameraPreviewModel {
            id: "cam-02".into(),
            name: "پارکینگ".into(),
            number: "CAM-002".into(),
            stream_url: "rtsp://192.168.1.11/stream".into(),
            status: CameraStatus::Active,
            status_label: "فعال".into(),
        };
        let _: Element<'_, ()> = view(&model, Skin::default(), Direction::Rtl);
    }
}
