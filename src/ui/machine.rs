//! Screen navigation state machine.
//!
//! Tracks the screen on display, the base screen a popup returns to, and
//! the popup countdown. `previous` only ever records base screens, so a
//! popup opened on top of another popup still returns to the real base.

use super::{ScreenAction, ScreenId};

pub struct ScreenMachine {
    current: ScreenId,
    previous: ScreenId,
    popup_timer: u16,
    dirty: bool,
}

impl ScreenMachine {
    /// Start on `start` with a redraw pending.
    pub const fn new(start: ScreenId) -> Self {
        Self {
            current: start,
            previous: start,
            popup_timer: 0,
            dirty: true,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn previous(&self) -> ScreenId {
        self.previous
    }

    pub fn popup_timer(&self) -> u16 {
        self.popup_timer
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Popup bookkeeping at the start of a tick.
    ///
    /// A popup whose timer has reached zero reverts to the previous screen;
    /// otherwise the timer counts down. Returns `true` if it reverted.
    pub fn expire_popup(&mut self) -> bool {
        if self.current.is_popup() && self.popup_timer == 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("UI: popup {} expired -> {}", self.current, self.previous);
            self.current = self.previous;
            self.dirty = true;
            true
        } else {
            self.popup_timer = self.popup_timer.saturating_sub(1);
            false
        }
    }

    /// Apply a button-driven navigation request.
    pub fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::NoOp => {}
            ScreenAction::GoToPreviousScreen => {
                #[cfg(feature = "defmt")]
                defmt::debug!("UI: {} -> previous {}", self.current, self.previous);
                self.current = self.previous;
                self.dirty = true;
            }
            ScreenAction::GoToScreen(target) => self.show(target),
        }
    }

    /// Switch to `screen`, arming the popup timer if it is a popup.
    ///
    /// Showing a popup that is already up restarts its timer.
    pub fn show(&mut self, screen: ScreenId) {
        if !self.current.is_popup() {
            self.previous = self.current;
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("UI: {} -> {}", self.current, screen);
        self.popup_timer = screen.descriptor().popup_time;
        self.current = screen;
        self.dirty = true;
    }

    /// Whether this frame has to be drawn: on any change, and every
    /// `interval` frames regardless.
    pub fn needs_redraw(&self, frame: u32, interval: u32) -> bool {
        self.dirty || (interval != 0 && frame % interval == 0)
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }
}

impl Default for ScreenMachine {
    fn default() -> Self {
        Self::new(ScreenId::START)
    }
}
