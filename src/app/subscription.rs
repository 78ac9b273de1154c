// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only one native event is routed: `Escape` closes the navigation menu
//! when no widget captured the key.

use super::Message;
use crate::ui::navbar;
use iced::keyboard::{key::Named, Event as KeyboardEvent, Key};
use iced::{event, Subscription};

/// Listens for the menu-closing key while the menu is open.
pub fn create_event_subscription(menu_open: bool) -> Subscription<Message> {
    if !menu_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(KeyboardEvent::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Navbar(navbar::Message::CloseMenu)),
        _ => None,
    })
}
