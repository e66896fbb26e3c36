use crate::ui::screens::{back_to, put};
use crate::ui::{Direction, Line, RenderInput, ScreenAction, ScreenId};

pub fn render(_input: &RenderInput, first: &mut Line, second: &mut Line) {
    put(first, "audio-panel");
    put(second, "fw v");
    put(second, env!("CARGO_PKG_VERSION"));
}

pub fn on_button(direction: Direction) -> ScreenAction {
    back_to(ScreenId::AboutMenu, direction)
}
