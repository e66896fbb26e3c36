//! Interface scheduler - one call to [`Interface::tick`] per frame.
//!
//! Per tick, in this order:
//!
//! 1. Popup expiry (or countdown).
//! 2. The button action latched since the last tick.
//! 3. Volume regulation, which may raise the volume popup.
//! 4. Redraw, when something changed or every
//!    [`REDRAW_INTERVAL_FRAMES`] frames.
//!
//! The event handlers never touch the `Interface`; they write into the
//! shared [`InputLatch`], which the tick drains. The latch learns of every
//! screen change as soon as it happens, so a press sampled mid-tick is
//! handled by the screen that is actually current.

use crate::bus::{BusTransport, BusWriter, RetryPolicy};
use crate::config::REDRAW_INTERVAL_FRAMES;
use crate::input::InputLatch;
use crate::ui::display::CharDisplay;
use crate::ui::machine::ScreenMachine;
use crate::ui::{Line, RenderInput, ScreenId};
use crate::volume::VolumeRegulator;

/// Owns every piece of main-loop state plus the display and bus
/// collaborators.
pub struct Interface<'a, B, D> {
    latch: &'a InputLatch,
    machine: ScreenMachine,
    volume: VolumeRegulator,
    bus: BusWriter<B>,
    display: D,
    failed_syncs: u32,
}

impl<'a, B, D> Interface<'a, B, D>
where
    B: BusTransport,
    D: CharDisplay,
{
    /// Take over the collaborators and initialise the display.
    ///
    /// Must run once, before the first tick or input event.
    pub fn init(latch: &'a InputLatch, bus: B, mut display: D, policy: RetryPolicy) -> Self {
        display.init();
        latch.set_current_screen(ScreenId::START);

        #[cfg(feature = "defmt")]
        defmt::info!("Interface: ready (retry policy {})", policy);

        Self {
            latch,
            machine: ScreenMachine::new(ScreenId::START),
            volume: VolumeRegulator::new(),
            bus: BusWriter::new(bus, policy),
            display,
            failed_syncs: 0,
        }
    }

    pub fn tick(&mut self, frame: u32) {
        self.machine.expire_popup();
        self.publish_screen();

        let action = self.latch.take_action();
        self.machine.apply(action);
        self.publish_screen();

        self.regulate();

        if self.machine.needs_redraw(frame, REDRAW_INTERVAL_FRAMES) {
            self.redraw(frame);
        }
    }

    /// One volume step, then re-send the level to the pots.
    fn regulate(&mut self) {
        let delta = self.latch.take_delta();
        if self.volume.step(delta) {
            self.machine.show(ScreenId::Volume);
            self.publish_screen();
        }

        if let Err(_e) = self.volume.sync(&mut self.bus) {
            self.failed_syncs = self.failed_syncs.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("Volume: potentiometer sync failed: {}", _e);
        }
    }

    /// Route presses sampled from here on to the screen now current.
    fn publish_screen(&self) {
        self.latch.set_current_screen(self.machine.current());
    }

    fn redraw(&mut self, frame: u32) {
        let input = RenderInput {
            frame,
            volume: self.volume.level(),
        };
        let mut first = Line::new();
        let mut second = Line::new();
        self.machine
            .current()
            .descriptor()
            .render(&input, &mut first, &mut second);

        self.display.clear();
        self.display.write_str(&first);
        self.display.set_cursor(1, 0);
        self.display.write_str(&second);

        self.machine.mark_drawn();
    }

    pub fn current_screen(&self) -> ScreenId {
        self.machine.current()
    }

    pub fn previous_screen(&self) -> ScreenId {
        self.machine.previous()
    }

    pub fn popup_timer(&self) -> u16 {
        self.machine.popup_timer()
    }

    pub fn volume_level(&self) -> u8 {
        self.volume.level()
    }

    /// Potentiometer syncs abandoned by a bounded retry policy.
    pub fn failed_syncs(&self) -> u32 {
        self.failed_syncs
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn bus(&self) -> &B {
        self.bus.transport()
    }
}
