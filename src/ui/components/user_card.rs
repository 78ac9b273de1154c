// SPDX-License-Identifier: MPL-2.0
//! Card showing one operator.
//!
//! # Usage
//!
//! ```ignore
//! UserCard::new(&model, skin, direction)
//!     .actions(actions::user_actions(&model.id, &labels, skin, direction))
//!     .view()
//! ```

use super::status_chip;
use crate::domain::PresenceStatus;
use crate::routing::Direction;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{container as container_styles, Skin};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// Display strings for one user, already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCardModel {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub username: String,
    pub role: String,
    pub status: PresenceStatus,
    pub status_label: String,
    pub last_active: String,
}

pub struct UserCard<'a, Message> {
    model: &'a UserCardModel,
    skin: Skin,
    direction: Direction,
    actions: Option<Element<'a, Message>>,
}

impl<'a, Message: 'a> UserCard<'a, Message> {
    pub fn new(model: &'a UserCardModel, skin: Skin, direction: Direction) -> Self {
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

        let initials = text(model.avatar.as_str())
            .size(typography::TITLE_SM)
            .font(skin.font);
        let avatar = container(initials)
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(container_styles::avatar(skin));

        let identity = Column::new()
            .push(text(model.name.as_str()).size(typography::TITLE_SM).font(skin.font))
            .push(
                text(model.username.as_str())
                    .font(skin.font)
                    .size(typography::CAPTION)
                    .color(skin.text_muted),
            )
            .spacing(spacing::XXS)
            .align_x(align);

        let role_label = text(model.role.as_str())
            .size(typography::CAPTION)
            .font(skin.font);
        let role = container(role_label)
            .padding([spacing::XXS, spacing::SM])
            .style(container_styles::soft_chip(skin));

        let header = direction::row(direction, [avatar.into(), identity.into(), role.into()])
            .spacing(spacing::SM)
            .align_y(Vertical::Center);

        let presence = status_chip::indicator(
            model.status_label.as_str(),
            skin.presence(model.status),
            skin.font,
            direction,
        );
        let last_active = text(model.last_active.as_str())
            .font(skin.font)
            .size(typography::CAPTION)
            .color(skin.text_secondary);
        let footer = direction::row(direction, [presence, last_active.into()])
            .spacing(spacing::MD)
            .align_y(Vertical::Center);

        let mut body = Column::new()
            .push(header)
            .push(footer)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserCardModel {
        UserCardModel {
            id: "1".into(),
            name: "Ali Rezaei".into(),
            avatar: "AR".into(),
            username: "ali.rezaei".into(),
            role: "Administrator".into(),
            status: PresenceStatus::Online,
            status_label: "Online".into(),
            last_active: "3 minutes ago".into(),
        }
    }

    #[test]
    fn card_builds_with_and_without_actions() {
        let model = sample();
        let _: Element<'_, ()> = UserCard::new(&model, Skin::default(), Direction::Ltr).view();
        let _: Element<'_, ()> = UserCard::new(&model, Skin::default(), Direction::Rtl)
            .actions(text("actions"))
            .view();
    }
}
