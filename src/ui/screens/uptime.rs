use core::fmt::Write;

use crate::config::TICK_PERIOD_MS;
use crate::ui::screens::{back_to, put};
use crate::ui::{Direction, Line, RenderInput, ScreenAction, ScreenId};

/// Whole seconds elapsed after `frame` ticks.
pub fn elapsed_secs(frame: u32) -> u64 {
    u64::from(frame) * TICK_PERIOD_MS / 1000
}

pub fn render(input: &RenderInput, first: &mut Line, second: &mut Line) {
    let secs = elapsed_secs(input.frame);
    put(first, "Uptime");
    let _ = write!(
        second,
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    );
}

pub fn on_button(direction: Direction) -> ScreenAction {
    back_to(ScreenId::UptimeMenu, direction)
}
