// SPDX-License-Identifier: MPL-2.0
//! Right-to-left layout helpers.
//!
//! Iced lays rows out left to right. For RTL locales the children of a
//! horizontal run are pushed in reverse and blocks are aligned to the right
//! edge, which is enough for the console's card and toolbar layouts.

use crate::routing::Direction;
use iced::alignment::Horizontal;
use iced::widget::Row;
use iced::Element;

/// Builds a row whose first child sits at the reading start.
pub fn row<'a, Message: 'a>(
    direction: Direction,
    children: impl IntoIterator<Item = Element<'a, Message>>,
) -> Row<'a, Message> {
    Row::with_children(visual_order(direction, children.into_iter().collect()))
}

/// Horizontal alignment of the reading start.
#[must_use]
pub fn start(direction: Direction) -> Horizontal {
    if direction.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    }
}

/// Horizontal alignment of the reading end.
#[must_use]
pub fn end(direction: Direction) -> Horizontal {
    if direction.is_rtl() {
        Horizontal::Left
    } else {
        Horizontal::Right
    }
}

/// Reorders `items` so that iterating the result left to right follows the
/// reading order.
#[must_use]
pub fn visual_order<T>(direction: Direction, mut items: Vec<T>) -> Vec<T> {
    if direction.is_rtl() {
        items.reverse();
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_reverses_visual_order() {
        assert_eq!(visual_order(Direction::Rtl, vec![1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(visual_order(Direction::Ltr, vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn start_and_end_swap_for_rtl() {
        assert_eq!(start(Direction::Rtl), Horizontal::Right);
        assert_eq!(end(Direction::Rtl), Horizontal::Left);
        assert_eq!(start(Direction::Ltr), Horizontal::Left);
    }
}
