//! Main menu. Each entry is its own base screen; Up/Down move between
//! entries, Enter/Right opens the entry and Left goes back to the start
//! screen.

use core::fmt::Write;

use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::screens::put;
use crate::ui::{Direction, Line, RenderInput, ScreenAction, ScreenId};

fn position(entry: ScreenId) -> usize {
    ScreenId::MENU.iter().position(|&e| e == entry).unwrap_or(0)
}

/// Screen opened by Enter on a menu entry.
fn target(entry: ScreenId) -> ScreenId {
    match entry {
        ScreenId::VolumeMenu => ScreenId::Volume,
        ScreenId::UptimeMenu => ScreenId::Uptime,
        ScreenId::AboutMenu => ScreenId::About,
        other => other,
    }
}

fn label(entry: ScreenId) -> &'static str {
    match entry {
        ScreenId::VolumeMenu => "Volume",
        ScreenId::UptimeMenu => "Uptime",
        ScreenId::AboutMenu => "About",
        _ => "",
    }
}

fn render_entry(entry: ScreenId, first: &mut Line, second: &mut Line) {
    let mut counter: heapless::String<8> = heapless::String::new();
    let _ = write!(counter, "{}/{}", position(entry) + 1, ScreenId::MENU.len());
    let _ = write!(first, "Menu{:>12}", counter.as_str());

    put(second, "> ");
    put(second, label(entry));
}

fn navigate(entry: ScreenId, direction: Direction) -> ScreenAction {
    let count = ScreenId::MENU.len();
    let index = position(entry);
    match direction {
        Direction::Down => ScreenAction::GoToScreen(ScreenId::MENU[select_next(index, count)]),
        Direction::Up => ScreenAction::GoToScreen(ScreenId::MENU[select_prev(index, count)]),
        Direction::Enter | Direction::Right => ScreenAction::GoToScreen(target(entry)),
        Direction::Left => ScreenAction::GoToScreen(ScreenId::Start),
        Direction::None => ScreenAction::NoOp,
    }
}

pub fn render_volume(_input: &RenderInput, first: &mut Line, second: &mut Line) {
    render_entry(ScreenId::VolumeMenu, first, second);
}

pub fn render_uptime(_input: &RenderInput, first: &mut Line, second: &mut Line) {
    render_entry(ScreenId::UptimeMenu, first, second);
}

pub fn render_about(_input: &RenderInput, first: &mut Line, second: &mut Line) {
    render_entry(ScreenId::AboutMenu, first, second);
}

pub fn on_button_volume(direction: Direction) -> ScreenAction {
    navigate(ScreenId::VolumeMenu, direction)
}

pub fn on_button_uptime(direction: Direction) -> ScreenAction {
    navigate(ScreenId::UptimeMenu, direction)
}

pub fn on_button_about(direction: Direction) -> ScreenAction {
    navigate(ScreenId::AboutMenu, direction)
}
