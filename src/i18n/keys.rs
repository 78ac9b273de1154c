// SPDX-License-Identifier: MPL-2.0
//! Typed message keys.
//!
//! Every string the interface renders is named here, so the full key set is
//! known up front and each catalog can be checked against it at startup.
//! Keys are written as hierarchical paths (`UsersPage.management.title`) and
//! stored in the catalogs under their Fluent spelling
//! (`users-page-management-title`).

use crate::domain::{CameraStatus, PresenceStatus, TimeUnit, UserRole};
use crate::routing::Locale;

macro_rules! message_keys {
    ($($variant:ident => $path:literal,)*) => {
        /// A translatable string used by the interface.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)*
        }

        impl MessageKey {
            /// Every declared key.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)*];

            /// Hierarchical key path.
            #[must_use]
            pub fn path(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $path,)*
                }
            }
        }
    };
}

message_keys! {
    MetadataTitle => "Metadata.title",
    MetadataDescription => "Metadata.description",
    HeaderTitle => "Header.title",
    HomeTitle => "HomePage.title",

    NavSettings => "Navbar.pages.settings",
    NavSearch => "Navbar.pages.search",
    NavUsers => "Navbar.pages.users",
    NavCamera => "Navbar.pages.camera",
    NavAdvanced => "Navbar.pages.advanced",
    NavMenuOpen => "Navbar.menu.openLabel",
    NavThemeToggle => "Navbar.theme.toggle",
    NavThemeToLight => "Navbar.theme.toLight",
    NavThemeToDark => "Navbar.theme.toDark",
    NavLanguageLabel => "Navbar.language.label",
    NavLanguageFa => "Navbar.language.options.fa",
    NavLanguageEn => "Navbar.language.options.en",

    UsersTitle => "UsersPage.management.title",
    UsersSubtitle => "UsersPage.management.subtitle",
    StatusOnline => "UsersPage.status.online",
    StatusOffline => "UsersPage.status.offline",
    StatusIdle => "UsersPage.status.idle",
    RoleAdmin => "UsersPage.roles.admin",
    RoleOperator => "UsersPage.roles.operator",
    RoleViewer => "UsersPage.roles.viewer",
    UserCreate => "UsersPage.actions.create",
    UserEdit => "UsersPage.actions.edit",
    UserRemove => "UsersPage.actions.remove",
    RelativeMinutes => "UsersPage.relative.minutes",
    RelativeHours => "UsersPage.relative.hours",

    CamerasTitle => "UsersPage.cameras.title",
    CamerasSubtitle => "UsersPage.cameras.subtitle",
    CameraActive => "UsersPage.cameras.status.active",
    CameraInactive => "UsersPage.cameras.status.inactive",
    CameraMaintenance => "UsersPage.cameras.status.maintenance",
    CameraFieldNumber => "UsersPage.cameras.fields.number",
    CameraFieldLocation => "UsersPage.cameras.fields.location",
    CameraFieldResolution => "UsersPage.cameras.fields.resolution",
    CameraFieldLastActive => "UsersPage.cameras.fields.lastActive",
    CameraCreate => "UsersPage.cameras.actions.create",
    CameraEdit => "UsersPage.cameras.actions.edit",
    CameraRemove => "UsersPage.cameras.actions.remove",
    CameraView => "UsersPage.cameras.actions.view",
    PreviewTitle => "UsersPage.cameraPreview.title",
    PreviewSubtitle => "UsersPage.cameraPreview.subtitle",

    NotFoundTitle => "NotFound.title",
    NotFoundBody => "NotFound.body",
    NotFoundBack => "NotFound.back",
}

impl MessageKey {
    /// Identifier of this key inside a Fluent catalog.
    #[must_use]
    pub fn fluent_id(self) -> String {
        fluent_id(self.path())
    }

    #[must_use]
    pub fn role(role: UserRole) -> Self {
        match role {
            UserRole::Admin => MessageKey::RoleAdmin,
            UserRole::Operator => MessageKey::RoleOperator,
            UserRole::Viewer => MessageKey::RoleViewer,
        }
    }

    #[must_use]
    pub fn presence(status: PresenceStatus) -> Self {
        match status {
            PresenceStatus::Online => MessageKey::StatusOnline,
            PresenceStatus::Offline => MessageKey::StatusOffline,
            PresenceStatus::Idle => MessageKey::StatusIdle,
        }
    }

    #[must_use]
    pub fn camera_status(status: CameraStatus) -> Self {
        match status {
            CameraStatus::Active => MessageKey::CameraActive,
            CameraStatus::Inactive => MessageKey::CameraInactive,
            CameraStatus::Maintenance => MessageKey::CameraMaintenance,
        }
    }

    #[must_use]
    pub fn relative(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Minutes => MessageKey::RelativeMinutes,
            TimeUnit::Hours => MessageKey::RelativeHours,
        }
    }

    #[must_use]
    pub fn language_option(locale: Locale) -> Self {
        match locale {
            Locale::Fa => MessageKey::NavLanguageFa,
            Locale::En => MessageKey::NavLanguageEn,
        }
    }
}

/// Converts `UsersPage.cameras.fields.lastActive` into
/// `users-page-cameras-fields-last-active`.
#[must_use]
pub fn fluent_id(path: &str) -> String {
    let mut id = String::with_capacity(path.len() + 8);
    let mut previous_lower = false;

    for ch in path.chars() {
        if ch == '.' {
            id.push('-');
            previous_lower = false;
        } else if ch.is_ascii_uppercase() {
            if previous_lower {
                id.push('-');
            }
            id.push(ch.to_ascii_lowercase());
            previous_lower = false;
        } else {
            id.push(ch);
            previous_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fluent_id_splits_segments_and_camel_case() {
        assert_eq!(
            fluent_id("UsersPage.management.title"),
            "users-page-management-title"
        );
        assert_eq!(
            fluent_id("UsersPage.cameras.fields.lastActive"),
            "users-page-cameras-fields-last-active"
        );
        assert_eq!(fluent_id("Navbar.menu.openLabel"), "navbar-menu-open-label");
        assert_eq!(fluent_id("NotFound.title"), "not-found-title");
    }

    #[test]
    fn paths_and_ids_are_unique() {
        let paths: HashSet<_> = MessageKey::ALL.iter().map(|k| k.path()).collect();
        let ids: HashSet<_> = MessageKey::ALL.iter().map(|k| k.fluent_id()).collect();
        assert_eq!(paths.len(), MessageKey::ALL.len());
        assert_eq!(ids.len(), MessageKey::ALL.len());
    }

    #[test]
    fn enum_helpers_map_to_status_keys() {
        assert_eq!(
            MessageKey::camera_status(CameraStatus::Maintenance).path(),
            "UsersPage.cameras.status.maintenance"
        );
        assert_eq!(
            MessageKey::presence(PresenceStatus::Idle).path(),
            "UsersPage.status.idle"
        );
        assert_eq!(
            MessageKey::relative(TimeUnit::Hours).path(),
            "UsersPage.relative.hours"
        );
    }
}
