// SPDX-License-Identifier: MPL-2.0
//! Record actions and the handler seam behind them.
//!
//! Cards only surface intents (edit, remove, view, create). What happens next
//! is decided by an [`ActionHandler`]. No backend exists yet, so the default
//! behaviour of every handler method is to log a diagnostic line;
//! [`LoggingActionHandler`] is exactly that default.

use crate::ui::direction;
use crate::routing::Direction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, Skin, Tone};
use iced::alignment::Vertical;
use iced::widget::{button, text};
use iced::{Element, Font};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Edit(String),
    Remove(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraAction {
    Edit(String),
    Remove(String),
    View(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTarget {
    User,
    Camera,
}

/// Any intent a page can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    User(UserAction),
    Camera(CameraAction),
    Create(CreateTarget),
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::Edit(id) => write!(f, "Edit user {id}"),
            UserAction::Remove(id) => write!(f, "Remove user {id}"),
        }
    }
}

impl fmt::Display for CameraAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraAction::Edit(id) => write!(f, "Edit camera {id}"),
            CameraAction::Remove(id) => write!(f, "Remove camera {id}"),
            CameraAction::View(id) => write!(f, "View stream for camera {id}"),
        }
    }
}

impl fmt::Display for CreateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateTarget::User => f.write_str("Create user"),
            CreateTarget::Camera => f.write_str("Create camera"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::User(action) => action.fmt(f),
            Action::Camera(action) => action.fmt(f),
            Action::Create(target) => target.fmt(f),
        }
    }
}

/// Receives record actions.
///
/// Every method defaults to a diagnostic log line and no other effect.
/// Implementors override the intents they can actually carry out.
pub trait ActionHandler {
    fn on_user_action(&mut self, action: &UserAction) {
        tracing::info!(target: "farda_console::actions", "{action}");
    }

    fn on_camera_action(&mut self, action: &CameraAction) {
        tracing::info!(target: "farda_console::actions", "{action}");
    }

    fn on_create(&mut self, target: CreateTarget) {
        tracing::info!(target: "farda_console::actions", "{target}");
    }
}

/// Placeholder handler: logs and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingActionHandler;

impl ActionHandler for LoggingActionHandler {}

/// Routes `action` to the matching handler method.
pub fn dispatch(handler: &mut dyn ActionHandler, action: &Action) {
    match action {
        Action::User(user) => handler.on_user_action(user),
        Action::Camera(camera) => handler.on_camera_action(camera),
        Action::Create(target) => handler.on_create(*target),
    }
}

// ============================================================================
// Action bars
// ============================================================================

/// Localized labels for a card's action bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    pub edit: String,
    pub remove: String,
    /// Only camera cards have a "view stream" action.
    pub view: Option<String>,
}

fn action_button<'a>(label: &str, tone: Tone, font: Font, action: Action) -> Element<'a, Action> {
    button(text(label.to_string()).size(typography::CAPTION).font(font))
        .on_press(action)
        .padding([spacing::XXS, spacing::SM])
        .style(button_styles::tonal(tone))
        .into()
}

/// Edit and remove buttons for a user card.
pub fn user_actions<'a>(
    user_id: &str,
    labels: &ActionLabels,
    skin: Skin,
    direction: Direction,
) -> Element<'a, Action> {
    direction::row(
        direction,
        [
            action_button(
                &labels.edit,
                skin.primary,
                skin.font,
                Action::User(UserAction::Edit(user_id.to_string())),
            ),
            action_button(
                &labels.remove,
                skin.danger,
                skin.font,
                Action::User(UserAction::Remove(user_id.to_string())),
            ),
        ],
    )
    .spacing(spacing::XS)
    .align_y(Vertical::Center)
    .into()
}

/// Edit, remove and view buttons for a camera card.
pub fn camera_actions<'a>(
    camera_id: &str,
    labels: &ActionLabels,
    skin: Skin,
    direction: Direction,
) -> Element<'a, Action> {
    let mut buttons = vec![
        action_button(
            &labels.edit,
            skin.primary,
            skin.font,
            Action::Camera(CameraAction::Edit(camera_id.to_string())),
        ),
        action_button(
            &labels.remove,
            skin.danger,
            skin.font,
            Action::Camera(CameraAction::Remove(camera_id.to_string())),
        ),
    ];
    if let Some(view) = &labels.view {
        buttons.push(action_button(
            view,
            skin.info,
            skin.font,
            Action::Camera(CameraAction::View(camera_id.to_string())),
        ));
    }

    direction::row(direction, buttons)
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
}

/// Section-level "new ..." button.
pub fn create_button<'a>(
    label: &str,
    tone: Tone,
    font: Font,
    target: CreateTarget,
) -> Element<'a, Action> {
    button(text(label.to_string()).size(typography::CAPTION).font(font))
        .on_press(Action::Create(target))
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::tonal(tone))
        .into()
}
