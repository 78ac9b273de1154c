// SPDX-License-Identifier: MPL-2.0
//! Landing page.

use super::Message;
use crate::i18n::{I18n, MessageKey};
use crate::routing::Direction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{container as container_styles, Skin};
use iced::widget::{container, text, Column};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePageModel {
    pub title: String,
    pub description: String,
}

#[must_use]
pub fn compose(i18n: &I18n) -> HomePageModel {
    HomePageModel {
        title: i18n.tr(MessageKey::HomeTitle),
        description: i18n.tr(MessageKey::MetadataDescription),
    }
}

pub fn view(model: &HomePageModel, skin: Skin, direction: Direction) -> Element<'_, Message> {
    let content = Column::new()
        .push(text(model.title.as_str()).size(typography::TITLE_LG).font(skin.font))
        .push(
            text(model.description.as_str())
                .font(skin.font)
                .size(typography::BODY)
                .color(skin.text_secondary),
        )
        .spacing(spacing::SM)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Locale;

    #[test]
    fn title_comes_from_active_catalog() {
        let mut i18n = I18n::new(Locale::En).expect("catalogs");
        assert_eq!(compose(&i18n).title, "Camera Configuration");

        i18n.set_locale(Locale::Fa);
        let farsi = compose(&i18n);
        assert_ne!(farsi.title, "Camera Configuration");
        assert!(!farsi.title.starts_with('⟦'));
    }
}
