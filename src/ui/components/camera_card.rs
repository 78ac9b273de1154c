// SPDX-License-Identifier: MPL-2.0
//! Card showing one camera with its details.

use super::status_chip;
use crate::domain::CameraStatus;
use crate::routing::Direction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{container as container_styles, Skin};
use iced::alignment::Vertical;
use iced::widget::{container, text, Column, Space};
use iced::{Element, Length};

/// One labelled field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

impl DetailItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Display strings for one camera, already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraCardModel {
    pub id: String,
    pub name: String,
    pub status: CameraStatus,
    pub status_label: String,
    pub details: Vec<DetailItem>,
}

pub struct CameraCard<'a, Message> {
    model: &'a CameraCardModel,
    skin: Skin,
    direction: Direction,
    actions: Option<Element<'a, Message>>,
}

impl<'a, Message: 'a> CameraCard<'a, Message> {
    pub fn new(model: &'a CameraCardModel, skin: Skin, direction: Direction) -> Self {
        Self {
            model,
            skin,
            direction,
            actions: None,
        }
    }

    /// Trailing slot for action controls.
    pub fn actions(mut self, actions: impl Into<Element<'a, Message>>) -> Self {
        self.actions = Some(actions.into());
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let Self {
            model,
            skin,
            direction,
            actions,
        } = self;
        let align = direction::start(direction);

        let chip = status_chip::chip(
            model.status_label.as_str(),
            skin.camera_status(model.status),
            skin.font,
            direction,
        );
        let title = text(model.name.as_str())
            .size(typography::TITLE_SM)
            .font(skin.font);
        let header = direction::row(
            direction,
            [
                title.into(),
                Space::new().width(Length::Fill).into(),
                chip,
            ],
        )
        .align_y(Vertical::Center);

        let details = model.details.chunks(2).fold(
            Column::new().spacing(spacing::XS),
            |column, pair| {
                let cells = pair.iter().map(|item| detail(item, skin, direction));
                column.push(direction::row(direction, cells).spacing(spacing::MD))
            },
        );

        let mut body = Column::new()
            .push(header)
            .push(details)
            .spacing(spacing::SM)
            .align_x(align)
            .width(Length::Fill);
        if let Some(actions) = actions {
            body = body.push(container(actions).width(Length::Fill).align_x(align));
        }

        container(body)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(container_styles::card(skin))
            .into()
    }
}

fn detail<'a, Message: 'a>(
    item: &'a DetailItem,
    skin: Skin,
    direction: Direction,
) -> Element<'a, Message> {
    Column::new()
        .push(
            text(item.label.as_str())
                .font(skin.font)
                .size(typography::CAPTION)
                .color(skin.text_muted),
        )
        .push(text(item.value.as_str()).size(typography::BODY).font(skin.font))
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .align_x(direction::start(direction))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_builds_with_odd_detail_count() {
        let model = CameraCardModel {
            id: "cam-01".into(),
            name: "North Gate".into(),
            status: CameraStatus::Maintenance,
            status_label: "Maintenance".into(),
            details: vec![
                DetailItem::new("Number", "CAM-001"),
                DetailItem::new("Location", "Main entrance"),
                DetailItem::new("Resolution", "1920x1080"),
            ],
        };
        let _: Element<'_, ()> = CameraCard::new(&model, Skin::default(), Direction::Rtl)
            .actions(text("actions"))
            .view();
    }
}
