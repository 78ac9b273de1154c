// SPDX-License-Identifier: MPL-2.0
use farda_console::app::navigation::Navigator;
use farda_console::app::persisted_state::{AppState, StateFileStore};
use farda_console::app::{self, App, Flags, Message};
use farda_console::config::{self, Config};
use farda_console::domain::samples;
use farda_console::i18n::{self, I18n, MessageKey};
use farda_console::routing::{Locale, Pathname, Route, RoutingConfig};
use farda_console::ui::navbar;
use farda_console::ui::pages::{self, Page};
use farda_console::ui::theming::{ColorMode, ColorModeProvider, ColorModeStore, RootStyles};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");
    let routing = RoutingConfig::standard();

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(i18n::startup_locale(None, &loaded, &routing), Locale::En);

    let mut farsi = Config::default();
    farsi.general.language = Some("fa".to_string());
    config::save_to_path(&farsi, &temp_config_file_path)
        .expect("Failed to write farsi config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load farsi config from path");
    assert_eq!(i18n::startup_locale(None, &loaded, &routing), Locale::Fa);
    // CLI still wins over the file.
    assert_eq!(
        i18n::startup_locale(Some("en"), &loaded, &routing),
        Locale::En
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_embedded_catalogs_are_complete() {
    let i18n = I18n::new(Locale::Fa).expect("catalogs load");
    let report = i18n.validate();
    assert!(report.is_complete(), "missing: {:?}", report.missing);
    assert_eq!(i18n.available_locales(), vec![Locale::Fa, Locale::En]);
}

#[test]
fn test_incomplete_catalog_is_reported() {
    let i18n = I18n::from_sources(
        [
            (Locale::En, "home-page-title = Home\n".to_string()),
            (Locale::Fa, "home-page-title = خانه\n".to_string()),
        ],
        Locale::En,
    )
    .expect("sources parse");

    let report = i18n.validate();
    assert!(!report.is_complete());
    assert!(report.missing.contains(&"fa:UsersPage.management.title".to_string()));
    assert!(report.into_result().is_err());

    // Runtime lookups of a missing key stay visible instead of failing.
    assert_eq!(
        i18n.tr(MessageKey::UsersTitle),
        "⟦UsersPage.management.title⟧"
    );
    assert_eq!(i18n.tr(MessageKey::HomeTitle), "Home");
}

#[test]
fn test_color_mode_parity_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut root = RootStyles::default();

    let mut provider = ColorModeProvider::new(StateFileStore::in_dir(dir.path().to_path_buf()));
    let initial = provider.hydrate(&mut root);
    assert_eq!(initial, ColorMode::Dark);

    for _ in 0..3 {
        provider.toggle(&mut root);
    }
    let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(state.color_mode, Some(ColorMode::Light));

    provider.toggle(&mut root);
    let reloaded = StateFileStore::in_dir(dir.path().to_path_buf());
    assert_eq!(reloaded.load(), Some(initial));
}

#[test]
fn test_locale_switch_on_users_page_keeps_the_page() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let flags = Flags {
        path: Some("/fa/users".to_string()),
        ..Flags::default()
    };
    let mut app = App::with_store(flags, StateFileStore::in_dir(dir.path().to_path_buf()));
    assert_eq!(app.location().as_deref(), Some("/fa/users"));

    let _task = app.update(Message::Navbar(navbar::Message::SelectLocale(Locale::En)));
    assert!(app.is_navigating());

    // The task would deliver this once the runtime polls it.
    let _ = app.update(Message::NavigationFinished {
        generation: 1,
        route: Route::new(Locale::En, Pathname::Users),
    });
    assert_eq!(app.location().as_deref(), Some("/en/users"));
    assert!(matches!(app.page(), Page::Users(_)));
}

#[tokio::test]
async fn test_second_switch_supersedes_the_first() {
    let mut navigator = Navigator::new();
    let users = Route::new(Locale::Fa, Pathname::Users);

    let first = navigator.begin(users.with_locale(Locale::En));
    let second = navigator.begin(users.with_locale(Locale::Fa));

    let (first_generation, _) = first.settle().await;
    let (second_generation, route) = second.settle().await;

    assert!(!navigator.finish(first_generation));
    assert!(navigator.finish(second_generation));
    assert_eq!(route, users);
}

#[test]
fn test_start_route_resolution() {
    let routing = RoutingConfig::standard();

    let explicit = Flags {
        lang: Some("fa".to_string()),
        path: Some("/en/users".to_string()),
        ..Flags::default()
    };
    assert_eq!(
        app::start_route(&explicit, &routing),
        Some(Route::new(Locale::En, Pathname::Users))
    );

    let bare = Flags {
        lang: Some("en".to_string()),
        path: Some("/".to_string()),
        ..Flags::default()
    };
    assert_eq!(
        app::start_route(&bare, &routing),
        Some(Route::new(Locale::En, Pathname::Home))
    );

    let unsupported = Flags {
        path: Some("/de".to_string()),
        ..Flags::default()
    };
    assert_eq!(app::start_route(&unsupported, &routing), None);
}

#[test]
fn test_users_page_in_both_locales() {
    let mut i18n = I18n::new(Locale::Fa).expect("catalogs load");
    let users = samples::sample_users();
    let cameras = samples::sample_cameras();

    for locale in [Locale::Fa, Locale::En] {
        i18n.set_locale(locale);
        let model = pages::users::compose_users_page(&i18n, &users, &cameras);
        assert_eq!(model.direction, locale.direction());
        assert_eq!(model.users.len(), users.len());
        let total: usize = model.summary.iter().map(|entry| entry.count).sum();
        assert_eq!(total, cameras.len());
        assert!(model
            .users
            .iter()
            .all(|user| !user.last_active.starts_with('⟦')));
    }
}
