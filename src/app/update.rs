// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers behind
//! `App::update`. Handlers borrow the pieces of state they need through
//! [`UpdateContext`] and return follow-up tasks.

use super::navigation::Navigator;
use super::persisted_state::StateFileStore;
use super::Message;
use crate::i18n::{self, I18n};
use crate::routing::{Locale, Pathname, Route, RoutingConfig};
use crate::ui::components::actions::{self, ActionHandler};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages::{self, Page};
use crate::ui::theming::{ColorModeProvider, RootStyles};
use iced::Task;

/// Mutable borrows of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub routing: &'a RoutingConfig,
    pub i18n: &'a mut I18n,
    /// `None` while the not-found page is shown.
    pub route: &'a mut Option<Route>,
    pub page: &'a mut Page,
    pub menu_open: &'a mut bool,
    pub navigator: &'a mut Navigator,
    pub color_mode: &'a mut ColorModeProvider<StateFileStore>,
    pub root_styles: &'a mut RootStyles,
    pub actions: &'a mut dyn ActionHandler,
}

impl UpdateContext<'_> {
    fn current_locale(&self) -> Locale {
        match *self.route {
            Some(route) => route.locale,
            None => self.i18n.current_locale(),
        }
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    let current = ctx.current_locale();
    match navbar::update(message, ctx.menu_open, current, ctx.navigator.is_pending()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(page) => navigate(ctx, Route::new(current, page)),
        NavbarEvent::ToggleColorMode => {
            ctx.color_mode.toggle(&mut *ctx.root_styles);
            Task::none()
        }
        NavbarEvent::SwitchLocale(locale) => {
            // The not-found page has no equivalent path; land on home.
            let target = match *ctx.route {
                Some(route) => route.with_locale(locale),
                None => Route::new(locale, Pathname::Home),
            };
            navigate(ctx, target)
        }
    }
}

/// Handles messages raised by the page content.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::Action(action) => {
            actions::dispatch(&mut *ctx.actions, &action);
            Task::none()
        }
        pages::Message::GoHome => {
            let home = Route::new(ctx.current_locale(), Pathname::Home);
            navigate(ctx, home)
        }
    }
}

/// Applies a settled transition unless a newer one superseded it.
pub fn handle_navigation_finished(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    route: Route,
) -> Task<Message> {
    if ctx.navigator.finish(generation) {
        apply_route(ctx, Some(route));
    }
    Task::none()
}

/// Starts an asynchronous transition to `target`.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: Route) -> Task<Message> {
    tracing::debug!(target = %ctx.routing.route_href(target), "navigating");
    let navigation = ctx.navigator.begin(target);
    Task::perform(navigation.settle(), |(generation, route)| {
        Message::NavigationFinished { generation, route }
    })
}

/// Makes `route` current: resolves its locale, then recomposes the page.
pub fn apply_route(ctx: &mut UpdateContext<'_>, route: Option<Route>) {
    if let Some(route) = route {
        i18n::resolve_request(ctx.routing, ctx.i18n, Some(route.locale.code()));
    }
    *ctx.route = route;
    *ctx.page = Page::compose(route, ctx.i18n);
}
