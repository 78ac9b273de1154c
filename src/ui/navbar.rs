// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar carries the brand link, the page items, the locale picker, the
//! color-mode toggle and a hamburger button opening a compact menu with the
//! same page items. It holds no state of its own besides `menu_open`; route
//! changes are reported to the application as [`Event`]s.

use crate::i18n::{I18n, MessageKey};
use crate::routing::{Locale, Pathname, RoutingConfig};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{self, Skin};
use crate::ui::theming::ColorMode;
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Brand shown at the reading start of the bar.
pub const BRAND: &str = "FARDA ALPR";

/// One page entry. Entries without a target render but do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: MessageKey,
    pub target: Option<Pathname>,
}

/// Page entries in display order.
pub const ITEMS: [NavItem; 5] = [
    NavItem {
        label: MessageKey::NavSettings,
        target: None,
    },
    NavItem {
        label: MessageKey::NavSearch,
        target: None,
    },
    NavItem {
        label: MessageKey::NavUsers,
        target: Some(Pathname::Users),
    },
    NavItem {
        label: MessageKey::NavCamera,
        target: None,
    },
    NavItem {
        label: MessageKey::NavAdvanced,
        target: None,
    },
];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub routing: &'a RoutingConfig,
    pub locale: Locale,
    /// Page of the current route; `None` on the not-found page.
    pub page: Option<Pathname>,
    pub menu_open: bool,
    pub color_mode: ColorMode,
    /// A locale switch is in flight; the picker is disabled until it lands.
    pub locale_pending: bool,
    pub skin: Skin,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    GoHome,
    Open(Pathname),
    ToggleColorMode,
    SelectLocale(Locale),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Go to `page` in the current locale.
    Navigate(Pathname),
    ToggleColorMode,
    /// Re-open the current page in another locale.
    SwitchLocale(Locale),
}

/// Process a navbar message and return the corresponding event.
///
/// Picking the active locale, or any locale while a switch is pending, is
/// ignored.
pub fn update(
    message: Message,
    menu_open: &mut bool,
    current: Locale,
    locale_pending: bool,
) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::GoHome => {
            *menu_open = false;
            Event::Navigate(Pathname::Home)
        }
        Message::Open(page) => {
            *menu_open = false;
            Event::Navigate(page)
        }
        Message::ToggleColorMode => Event::ToggleColorMode,
        Message::SelectLocale(locale) => {
            if locale == current || locale_pending {
                Event::None
            } else {
                *menu_open = false;
                Event::SwitchLocale(locale)
            }
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let skin = ctx.skin;
    let text_direction = ctx.locale.direction();

    let brand = button(Text::new(BRAND).size(typography::TITLE_SM).font(skin.font))
        .on_press(Message::GoHome)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_item(skin, false));

    let items = ITEMS
        .iter()
        .map(|item| build_nav_button(ctx, item, Length::Shrink));
    let pages = direction::row(text_direction, items).spacing(spacing::XXS);

    let mode_label = match ctx.color_mode {
        ColorMode::Dark => ctx.i18n.tr(MessageKey::NavThemeToLight),
        ColorMode::Light => ctx.i18n.tr(MessageKey::NavThemeToDark),
    };
    let theme_toggle = styles::tooltip::styled(
        button(Text::new(mode_label).size(typography::CAPTION).font(skin.font))
            .on_press(Message::ToggleColorMode)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::nav_item(skin, false)),
        ctx.i18n.tr(MessageKey::NavThemeToggle),
        styles::tooltip::Position::Bottom,
        skin,
    );

    let menu_button = styles::tooltip::styled(
        button(Text::new("☰").size(typography::TITLE_SM).font(skin.font))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::nav_item(skin, ctx.menu_open)),
        ctx.i18n.tr(MessageKey::NavMenuOpen),
        styles::tooltip::Position::Bottom,
        skin,
    );

    let bar = direction::row(
        text_direction,
        [
            brand.into(),
            pages.into(),
            Space::new().width(Length::Fill).into(),
            build_locale_picker(ctx),
            theme_toggle.into(),
            menu_button.into(),
        ],
    )
    .spacing(spacing::SM)
    .padding([spacing::XS, spacing::MD])
    .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
    .align_y(Vertical::Center);

    Container::new(bar)
        .width(Length::Fill)
        .style(styles::container::navbar(skin))
        .into()
}

/// Segmented picker with one button per supported locale.
fn build_locale_picker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let skin = ctx.skin;
    let segments = ctx.routing.locales().iter().map(|&locale| -> Element<'a, Message> {
        let selected = locale == ctx.locale;
        let on_press = (!ctx.locale_pending).then_some(Message::SelectLocale(locale));

        button(
            Text::new(ctx.i18n.tr(MessageKey::language_option(locale)))
                .size(typography::CAPTION)
                .font(skin.font),
        )
        .on_press_maybe(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::segment(skin, selected))
        .into()
    });

    let picker = Row::with_children(segments).spacing(spacing::XXS);

    styles::tooltip::styled(
        container(picker).width(Length::Fixed(sizing::LOCALE_PICKER_WIDTH)),
        ctx.i18n.tr(MessageKey::NavLanguageLabel),
        styles::tooltip::Position::Bottom,
        skin,
    )
    .into()
}

fn build_nav_button<'a>(ctx: &ViewContext<'a>, item: &NavItem, width: Length) -> Element<'a, Message> {
    let selected = item.target.is_some() && item.target == ctx.page;

    button(Text::new(ctx.i18n.tr(item.label)).size(typography::BODY).font(ctx.skin.font))
        .on_press_maybe(item.target.map(Message::Open))
        .padding([spacing::XS, spacing::SM])
        .width(width)
        .style(styles::button::nav_item(ctx.skin, selected))
        .into()
}

/// Compact menu listing the page items.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ITEMS
        .iter()
        .map(|item| build_nav_button(ctx, item, Length::Fill));
    let menu_column = Column::with_children(items)
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::MENU_WIDTH));

    let menu = Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::dropdown(ctx.skin));

    Container::new(menu)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::MD])
        .align_x(direction::end(ctx.locale.direction()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(i18n: &I18n, menu_open: bool, locale_pending: bool) {
        let routing = RoutingConfig::standard();
        let ctx = ViewContext {
            i18n,
            routing: &routing,
            locale: i18n.current_locale(),
            page: Some(Pathname::Users),
            menu_open,
            color_mode: ColorMode::Dark,
            locale_pending,
            skin: Skin::default(),
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        render(&i18n, false, false);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::new(Locale::En).expect("catalogs");
        render(&i18n, true, false);
    }

    #[test]
    fn navbar_view_renders_while_switch_pending() {
        let i18n = I18n::default();
        render(&i18n, false, true);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open, Locale::Fa, false);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open, Locale::Fa, false);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;
        let event = update(
            Message::Open(Pathname::Users),
            &mut menu_open,
            Locale::Fa,
            false,
        );
        assert!(!menu_open);
        assert_eq!(event, Event::Navigate(Pathname::Users));

        menu_open = true;
        let event = update(Message::GoHome, &mut menu_open, Locale::Fa, false);
        assert!(!menu_open);
        assert_eq!(event, Event::Navigate(Pathname::Home));
    }

    #[test]
    fn selecting_active_locale_is_a_no_op() {
        let mut menu_open = false;
        let event = update(Message::SelectLocale(Locale::Fa), &mut menu_open, Locale::Fa, false);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn selecting_other_locale_requests_switch() {
        let mut menu_open = true;
        let event = update(Message::SelectLocale(Locale::En), &mut menu_open, Locale::Fa, false);
        assert_eq!(event, Event::SwitchLocale(Locale::En));
        assert!(!menu_open);
    }

    #[test]
    fn pending_switch_blocks_another() {
        let mut menu_open = false;
        let event = update(Message::SelectLocale(Locale::En), &mut menu_open, Locale::Fa, true);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn only_users_item_has_a_target() {
        let targets: Vec<_> = ITEMS.iter().filter_map(|item| item.target).collect();
        assert_eq!(targets, vec![Pathname::Users]);
    }
}
