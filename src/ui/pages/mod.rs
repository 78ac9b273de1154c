// SPDX-License-Identifier: MPL-2.0
//! Page composers.
//!
//! A composer turns the active locale, its catalog and the in-memory records
//! into a model of plain display strings. Views render those models with the
//! display components and never touch the catalogs themselves.

pub mod home;
pub mod not_found;
pub mod users;

use crate::domain::samples;
use crate::i18n::I18n;
use crate::routing::{Direction, Pathname, Route};
use crate::ui::components::actions::Action;
use crate::ui::design_tokens::spacing;
use crate::ui::direction;
use crate::ui::styles::Skin;
use iced::widget::{Column, Space};
use iced::{Element, Length};

pub use home::HomePageModel;
pub use not_found::NotFoundModel;
pub use users::UsersPageModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Action(Action),
    GoHome,
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Message::Action(action)
    }
}

/// The composed content of the current route.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home(HomePageModel),
    Users(Box<UsersPageModel>),
    NotFound(NotFoundModel),
}

impl Page {
    /// Composes the page for `route`, or the not-found page when the route
    /// failed to resolve. The active locale of `i18n` must already match.
    #[must_use]
    pub fn compose(route: Option<Route>, i18n: &I18n) -> Self {
        match route {
            Some(route) => match route.page {
                Pathname::Home => Page::Home(home::compose(i18n)),
                Pathname::Users => Page::Users(Box::new(users::compose_users_page(
                    i18n,
                    &samples::sample_users(),
                    &samples::sample_cameras(),
                ))),
            },
            None => Page::NotFound(not_found::compose(i18n)),
        }
    }

    pub fn view(&self, skin: Skin, direction: Direction) -> Element<'_, Message> {
        match self {
            Page::Home(model) => home::view(model, skin, direction),
            Page::Users(model) => users::view(model, skin).map(Message::Action),
            Page::NotFound(model) => not_found::view(model, skin, direction),
        }
    }
}

/// Row shape of a grid: `(filled cells, padding cells)` per row.
fn row_shape(count: usize, columns: usize) -> Vec<(usize, usize)> {
    let columns = columns.max(1);
    (0..count)
        .step_by(columns)
        .map(|start| {
            let filled = (count - start).min(columns);
            (filled, columns - filled)
        })
        .collect()
}

/// Lays `items` out in rows of `columns`, padding the last row so every
/// cell keeps the same width.
pub(crate) fn grid<'a, Message: 'a>(
    direction: Direction,
    items: Vec<Element<'a, Message>>,
    columns: usize,
) -> Column<'a, Message> {
    let shape = row_shape(items.len(), columns);
    let mut items = items.into_iter();

    shape
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |grid, (filled, padding)| {
            let cells = items
                .by_ref()
                .take(filled)
                .chain((0..padding).map(|_| Space::new().width(Length::Fill).into()));
            grid.push(direction::row(direction, cells).spacing(spacing::MD))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Locale;

    #[test]
    fn compose_follows_route_page() {
        let i18n = I18n::new(Locale::En).expect("catalogs");
        let home = Page::compose(Some(Route::new(Locale::En, Pathname::Home)), &i18n);
        assert!(matches!(home, Page::Home(_)));

        let users = Page::compose(Some(Route::new(Locale::En, Pathname::Users)), &i18n);
        assert!(matches!(users, Page::Users(_)));

        assert!(matches!(Page::compose(None, &i18n), Page::NotFound(_)));
    }

    #[test]
    fn last_row_is_padded_to_full_width() {
        assert_eq!(row_shape(5, 2), vec![(2, 0), (2, 0), (1, 1)]);
        assert_eq!(row_shape(4, 3), vec![(3, 0), (1, 2)]);
    }

    #[test]
    fn full_rows_need_no_padding() {
        assert_eq!(row_shape(4, 2), vec![(2, 0), (2, 0)]);
        assert!(row_shape(0, 2).is_empty());
    }

    #[test]
    fn zero_columns_is_one_column() {
        assert_eq!(row_shape(2, 0), vec![(1, 0), (1, 0)]);
    }
}
