//! Content and button behaviour of each screen.
//!
//! Render functions must keep each row within [`LCD_COLUMNS`] characters;
//! anything longer is cut off by [`put`].

pub mod about;
pub mod menu;
pub mod start;
pub mod uptime;
pub mod volume;

use super::{Direction, Line, ScreenAction, ScreenId};
use crate::config::LCD_COLUMNS;

/// Append `text` to `line`, dropping whatever does not fit.
pub(crate) fn put(line: &mut Line, text: &str) {
    for c in text.chars().take(LCD_COLUMNS.saturating_sub(line.len())) {
        let _ = line.push(c);
    }
}

/// Leaf screens opened from the menu: Left/Enter return to `entry`.
///
/// The entry is named explicitly rather than taken from the previous
/// screen, which a popup shown on top of the leaf would overwrite.
pub(crate) fn back_to(entry: ScreenId, direction: Direction) -> ScreenAction {
    match direction {
        Direction::Left | Direction::Enter => ScreenAction::GoToScreen(entry),
        _ => ScreenAction::NoOp,
    }
}
