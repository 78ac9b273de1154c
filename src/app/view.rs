// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top of the current page. Both are drawn with one
//! [`Skin`] resolved from the root style variables for this frame.

use super::Message;
use crate::i18n::I18n;
use crate::routing::{Locale, Route, RoutingConfig};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages::Page;
use crate::ui::styles::{container as container_styles, Skin};
use crate::ui::theming::ColorMode;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub routing: &'a RoutingConfig,
    pub route: Option<Route>,
    pub page: &'a Page,
    pub skin: Skin,
    pub color_mode: ColorMode,
    pub menu_open: bool,
    pub locale_pending: bool,
}

/// Renders the navbar and the current page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let skin = ctx.skin;
    let locale: Locale = ctx
        .route
        .map_or_else(|| ctx.i18n.current_locale(), |route| route.locale);

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        routing: ctx.routing,
        locale,
        page: ctx.route.map(|route| route.page),
        menu_open: ctx.menu_open,
        color_mode: ctx.color_mode,
        locale_pending: ctx.locale_pending,
        skin,
    })
    .map(Message::Navbar);

    let page_view = ctx.page.view(skin, locale.direction()).map(Message::Page);

    let column = Column::new().push(navbar_view).push(
        Container::new(page_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::page(skin))
        .into()
}
