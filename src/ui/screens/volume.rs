//! Volume popup: numeric level plus a bar across the second row.

use core::fmt::Write;

use crate::config::{LCD_COLUMNS, VOLUME_MAX};
use crate::ui::{Direction, Line, RenderInput, ScreenAction};

/// Number of filled bar cells for `level`.
pub fn bar_cells(level: u8) -> usize {
    usize::from(level.min(VOLUME_MAX)) * LCD_COLUMNS / usize::from(VOLUME_MAX)
}

pub fn render(input: &RenderInput, first: &mut Line, second: &mut Line) {
    let mut fraction: heapless::String<8> = heapless::String::new();
    let _ = write!(fraction, "{}/{}", input.volume, VOLUME_MAX);
    let _ = write!(first, "Volume{:>10}", fraction.as_str());

    let filled = bar_cells(input.volume);
    for cell in 0..LCD_COLUMNS {
        let _ = second.push(if cell < filled { '#' } else { '-' });
    }
}

/// The popup closes itself; Left or Enter dismiss it early.
pub fn on_button(direction: Direction) -> ScreenAction {
    match direction {
        Direction::Left | Direction::Enter => ScreenAction::GoToPreviousScreen,
        _ => ScreenAction::NoOp,
    }
}
