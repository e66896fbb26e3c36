//! Front-panel input: the resistor-ladder button and the volume encoder.
//!
//! Event handlers run in interrupt (or interrupt-driven task) context and
//! only ever touch the [`InputLatch`]. The interface tick drains the latch
//! from thread mode. Every access goes through a critical section, so an
//! encoder edge landing in the middle of a tick can never be lost.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use crate::config::{BAND_DOWN_MAX, BAND_ENTER_MAX, BAND_NONE_MAX, BAND_RIGHT_MAX, BAND_UP_MAX};
use crate::ui::{Direction, ScreenAction, ScreenId};

/// Map a raw 12-bit ladder sample to the pressed direction.
///
/// Band upper limits are inclusive. Values past the Enter band read as
/// Left, so every sample yields exactly one direction.
pub fn classify(sample: u16) -> Direction {
    if sample <= BAND_NONE_MAX {
        Direction::None
    } else if sample <= BAND_RIGHT_MAX {
        Direction::Right
    } else if sample <= BAND_DOWN_MAX {
        Direction::Down
    } else if sample <= BAND_UP_MAX {
        Direction::Up
    } else if sample <= BAND_ENTER_MAX {
        Direction::Enter
    } else {
        Direction::Left
    }
}

/// One detent of the volume encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Decode a step from the level of channel B sampled on the edge of A.
    pub fn from_quadrature(b_high: bool) -> Self {
        if b_high {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }
}

/// State written by the event handlers and consumed by the tick.
struct Shared {
    delta: i16,
    pending: ScreenAction,
    current: ScreenId,
    last_direction: Direction,
}

/// Interrupt-shared input state.
///
/// `const`-constructible so the firmware can keep it in a `static`;
/// tests simply create one on the stack.
pub struct InputLatch {
    shared: Mutex<CriticalSectionRawMutex, RefCell<Shared>>,
    sample_request: Signal<CriticalSectionRawMutex, ()>,
}

impl InputLatch {
    pub const fn new() -> Self {
        Self {
            shared: Mutex::new(RefCell::new(Shared {
                delta: 0,
                pending: ScreenAction::NoOp,
                current: ScreenId::START,
                last_direction: Direction::None,
            })),
            sample_request: Signal::new(),
        }
    }

    /// Encoder edge: accumulate one step of volume change.
    pub fn on_rotary_edge(&self, rotation: Rotation) {
        self.shared.lock(|s| {
            let mut s = s.borrow_mut();
            s.delta = match rotation {
                Rotation::Clockwise => s.delta.saturating_add(1),
                Rotation::CounterClockwise => s.delta.saturating_sub(1),
            };
        });
    }

    /// Button edge: ask the sampler for a ladder conversion.
    pub fn on_button_trigger(&self) {
        self.sample_request.signal(());
    }

    /// Wait until a button edge requested a sample.
    pub async fn sample_requested(&self) {
        self.sample_request.wait().await
    }

    /// Returns `true` (and clears the request) if a sample is outstanding.
    pub fn take_sample_request(&self) -> bool {
        self.sample_request.try_take().is_some()
    }

    /// Conversion complete: classify the sample and let the screen on
    /// display decide what the press means.
    ///
    /// The resulting action replaces any action not yet consumed by a tick.
    pub fn on_sample_ready(&self, raw: u16) -> ScreenAction {
        let direction = classify(raw);
        self.shared.lock(|s| {
            let mut s = s.borrow_mut();
            let action = s.current.descriptor().handle_button(direction);
            s.last_direction = direction;
            s.pending = action;
            action
        })
    }

    /// Drain the volume accumulator.
    pub fn take_delta(&self) -> i16 {
        self.shared.lock(|s| core::mem::replace(&mut s.borrow_mut().delta, 0))
    }

    /// Consume the pending button action, leaving `NoOp` behind.
    pub fn take_action(&self) -> ScreenAction {
        self.shared
            .lock(|s| core::mem::replace(&mut s.borrow_mut().pending, ScreenAction::NoOp))
    }

    /// Tell the dispatcher which screen's handler to use from now on.
    pub fn set_current_screen(&self, screen: ScreenId) {
        self.shared.lock(|s| s.borrow_mut().current = screen);
    }

    pub fn current_screen(&self) -> ScreenId {
        self.shared.lock(|s| s.borrow().current)
    }

    /// Direction of the most recent classified sample.
    pub fn last_direction(&self) -> Direction {
        self.shared.lock(|s| s.borrow().last_direction)
    }
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_belong_to_lower_band() {
        assert_eq!(classify(0), Direction::None);
        assert_eq!(classify(2000), Direction::None);
        assert_eq!(classify(2001), Direction::Right);
        assert_eq!(classify(2730), Direction::Right);
        assert_eq!(classify(2731), Direction::Down);
        assert_eq!(classify(2900), Direction::Down);
        assert_eq!(classify(2901), Direction::Up);
        assert_eq!(classify(3300), Direction::Up);
        assert_eq!(classify(3301), Direction::Enter);
        assert_eq!(classify(3800), Direction::Enter);
        assert_eq!(classify(3801), Direction::Left);
        assert_eq!(classify(4095), Direction::Left);
        assert_eq!(classify(u16::MAX), Direction::Left);
    }

    #[test]
    fn bands_are_contiguous_and_ascending() {
        // Walking the ADC range must visit each direction once, in order.
        let mut order = Vec::new();
        for v in 0..=crate::config::ADC_MAX {
            let d = classify(v);
            if order.last() != Some(&d) {
                order.push(d);
            }
        }
        assert_eq!(
            order,
            [
                Direction::None,
                Direction::Right,
                Direction::Down,
                Direction::Up,
                Direction::Enter,
                Direction::Left,
            ]
        );
    }

    #[test]
    fn measured_averages_classify_as_expected() {
        assert_eq!(classify(2610), Direction::Right);
        assert_eq!(classify(2770), Direction::Down);
        assert_eq!(classify(3100), Direction::Up);
        assert_eq!(classify(3590), Direction::Enter);
    }

    #[test]
    fn quadrature_decoding() {
        assert_eq!(Rotation::from_quadrature(true), Rotation::Clockwise);
        assert_eq!(Rotation::from_quadrature(false), Rotation::CounterClockwise);
    }

    #[test]
    fn delta_accumulates_and_drains() {
        let latch = InputLatch::new();
        for _ in 0..5 {
            latch.on_rotary_edge(Rotation::Clockwise);
        }
        latch.on_rotary_edge(Rotation::CounterClockwise);
        assert_eq!(latch.take_delta(), 4);
        assert_eq!(latch.take_delta(), 0);
    }

    #[test]
    fn delta_saturates_instead_of_wrapping() {
        let latch = InputLatch::new();
        for _ in 0..(i16::MAX as u32 + 10) {
            latch.on_rotary_edge(Rotation::Clockwise);
        }
        assert_eq!(latch.take_delta(), i16::MAX);
    }

    #[test]
    fn sample_dispatches_to_current_screen() {
        let latch = InputLatch::new();
        latch.set_current_screen(ScreenId::VolumeMenu);
        let action = latch.on_sample_ready(2800);
        assert_eq!(latch.last_direction(), Direction::Down);
        assert_eq!(action, ScreenAction::GoToScreen(ScreenId::UptimeMenu));
        assert_eq!(latch.take_action(), action);
        assert_eq!(latch.take_action(), ScreenAction::NoOp);
    }

    #[test]
    fn button_trigger_raises_sample_request_once() {
        let latch = InputLatch::new();
        assert!(!latch.take_sample_request());
        latch.on_button_trigger();
        latch.on_button_trigger();
        assert!(latch.take_sample_request());
        assert!(!latch.take_sample_request());
    }
}
