// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar and pages.
//!
//! The `App` struct wires together routing, localization, the color-mode
//! provider and the record action handler, and translates messages into side
//! effects such as route transitions or preference persistence.

mod message;
pub mod navigation;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::{self, I18n, MessageKey};
use crate::routing::{Pathname, Route, RoutingConfig};
use crate::ui::components::actions::LoggingActionHandler;
use crate::ui::pages::Page;
use crate::ui::styles::Skin;
use crate::ui::theming::{self, ColorMode, ColorModeProvider, RootStyles};
use iced::{window, Element, Subscription, Task, Theme};
use navigation::Navigator;
use persisted_state::StateFileStore;
use std::fmt;

/// Root Iced application state.
pub struct App {
    routing: RoutingConfig,
    pub i18n: I18n,
    /// `None` while the not-found page is shown.
    route: Option<Route>,
    page: Page,
    menu_open: bool,
    navigator: Navigator,
    color_mode: ColorModeProvider<StateFileStore>,
    root_styles: RootStyles,
    actions: LoggingActionHandler,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("color_mode", &self.color_mode.mode())
            .field("navigation_pending", &self.navigator.is_pending())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let routing = RoutingConfig::standard();
    let font = theming::font_for(start_route(&flags, &routing).map_or_else(
        || routing.default_locale(),
        |route| route.locale,
    ));

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("application booted twice; using default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .default_font(font)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Route to open at startup.
///
/// An explicit locale segment in `--path` (or `[general] start_path`) wins.
/// A bare `/` opens home in the locale picked from `--lang`, the config and
/// the OS. `None` means the path does not resolve.
pub fn start_route(flags: &Flags, routing: &RoutingConfig) -> Option<Route> {
    let path = flags
        .path
        .as_deref()
        .or(flags.config.general.start_path.as_deref())
        .unwrap_or(config::DEFAULT_START_PAGE);

    if path.trim_matches('/').is_empty() {
        let locale = i18n::startup_locale(flags.lang.as_deref(), &flags.config, routing);
        return Some(Route::new(locale, Pathname::Home));
    }

    match routing.parse(path) {
        Ok(route) => Some(route),
        Err(err) => {
            tracing::warn!(path, "{err}");
            None
        }
    }
}

impl App {
    /// Initializes application state from `Flags`, reading the color-mode
    /// preference from the default state file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::with_store(flags, StateFileStore::new()), Task::none())
    }

    /// Builds the application around an explicit preference store.
    pub fn with_store(flags: Flags, store: StateFileStore) -> Self {
        let routing = RoutingConfig::standard();
        let route = start_route(&flags, &routing);
        let fallback_locale = i18n::startup_locale(flags.lang.as_deref(), &flags.config, &routing);

        let mut i18n = I18n::new(fallback_locale).unwrap_or_else(|err| {
            tracing::error!("failed to load translation catalogs: {err}");
            I18n::default()
        });
        if let Some(route) = route {
            i18n::resolve_request(&routing, &mut i18n, Some(route.locale.code()));
        }

        let mut root_styles = RootStyles::default();
        let mut color_mode = ColorModeProvider::new(store);
        color_mode.subscribe(|mode: ColorMode| {
            tracing::info!(%mode, "color mode changed");
        });
        color_mode.hydrate(&mut root_styles);

        let page = Page::compose(route, &i18n);

        Self {
            routing,
            i18n,
            route,
            page,
            menu_open: false,
            navigator: Navigator::new(),
            color_mode,
            root_styles,
            actions: LoggingActionHandler,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr(MessageKey::MetadataTitle)
    }

    fn theme(&self) -> Theme {
        self.root_styles.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.menu_open)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            routing: &self.routing,
            i18n: &mut self.i18n,
            route: &mut self.route,
            page: &mut self.page,
            menu_open: &mut self.menu_open,
            navigator: &mut self.navigator,
            color_mode: &mut self.color_mode,
            root_styles: &mut self.root_styles,
            actions: &mut self.actions,
        };

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Page(message) => update::handle_page_message(&mut ctx, message),
            Message::NavigationFinished { generation, route } => {
                update::handle_navigation_finished(&mut ctx, generation, route)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            routing: &self.routing,
            route: self.route,
            page: &self.page,
            skin: self.skin(),
            color_mode: self.color_mode.mode(),
            menu_open: self.menu_open,
            locale_pending: self.navigator.is_pending(),
        })
    }

    /// Route currently shown, `None` on the not-found page.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        self.route
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode.mode()
    }

    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.navigator.is_pending()
    }

    #[must_use]
    pub fn root_styles(&self) -> &RootStyles {
        &self.root_styles
    }

    /// Colours of the current mode, set in the face of the shown locale.
    #[must_use]
    pub fn skin(&self) -> Skin {
        let locale = self
            .route
            .map_or_else(|| self.i18n.current_locale(), |route| route.locale);
        Skin::from_root(&self.root_styles).with_locale(locale)
    }

    /// `href` of the current route, if any.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.route.map(|route| self.routing.route_href(route))
    }
}
