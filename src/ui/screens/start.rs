use crate::ui::screens::put;
use crate::ui::{Direction, Line, RenderInput, ScreenAction, ScreenId};

pub fn render(_input: &RenderInput, first: &mut Line, second: &mut Line) {
    put(first, "  Audio  Panel");
    put(second, "Press for menu");
}

/// Any press opens the main menu.
pub fn on_button(direction: Direction) -> ScreenAction {
    match direction {
        Direction::None => ScreenAction::NoOp,
        _ => ScreenAction::GoToScreen(ScreenId::MENU[0]),
    }
}
