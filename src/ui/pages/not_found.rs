// SPDX-License-Identifier: MPL-2.0
//! Shown when a path names an unsupported locale or an unknown page.

use super::Message;
use crate::i18n::{I18n, MessageKey};
use crate::routing::Direction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{button as button_styles, container as container_styles, Skin};
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundModel {
    pub title: String,
    pub body: String,
    pub back: String,
}

#[must_use]
pub fn compose(i18n: &I18n) -> NotFoundModel {
    NotFoundModel {
        title: i18n.tr(MessageKey::NotFoundTitle),
        body: i18n.tr(MessageKey::NotFoundBody),
        back: i18n.tr(MessageKey::NotFoundBack),
    }
}

pub fn view(model: &NotFoundModel, skin: Skin, direction: Direction) -> Element<'_, Message> {
    let back = button(text(model.back.as_str()).size(typography::BODY).font(skin.font))
        .on_press(Message::GoHome)
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::tonal(skin.primary));

    let content = Column::new()
        .push(text(model.title.as_str()).size(typography::TITLE_MD).font(skin.font))
        .push(
            text(model.body.as_str())
                .font(skin.font)
                .size(typography::BODY)
                .color(skin.text_secondary),
        )
        .push(back)
        .spacing(spacing::MD)
        .align_x(direction::start(direction));

    container(
        container(content)
            .padding(spacing::XL)
            .width(Length::Fill)
            .style(container_styles::section(skin)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .into()
}
