//! Volume level and the digital potentiometers that realise it.
//!
//! The encoder accumulates a signed delta between ticks; each tick the
//! regulator moves the level by at most one step toward the sign of that
//! delta. Both wipers of both channel pots are rewritten every tick, so
//! the hardware converges to the software level even after a glitch.

use crate::bus::{BusTransport, BusWriter};
use crate::config::{LEFT_POT_ADDR, RDAC1_COMMAND, RDAC2_COMMAND, RIGHT_POT_ADDR, VOLUME_MAX, WIPER_STEP};
use crate::error::Error;

/// Audio channel, one potentiometer each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Left,
    Right,
}

impl Channel {
    pub const fn address(self) -> u8 {
        match self {
            Channel::Left => LEFT_POT_ADDR,
            Channel::Right => RIGHT_POT_ADDR,
        }
    }
}

/// Wiper register inside a potentiometer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wiper {
    /// RDAC1, positive half of the signal path.
    Positive,
    /// RDAC2, negative half of the signal path.
    Negative,
}

impl Wiper {
    pub const fn command(self) -> u8 {
        match self {
            Wiper::Positive => RDAC1_COMMAND,
            Wiper::Negative => RDAC2_COMMAND,
        }
    }
}

/// Order in which the registers are written on every sync.
pub const WRITE_ORDER: [(Wiper, Channel); 4] = [
    (Wiper::Positive, Channel::Left),
    (Wiper::Positive, Channel::Right),
    (Wiper::Negative, Channel::Left),
    (Wiper::Negative, Channel::Right),
];

/// Wiper value for a volume step: `floor(255 / 20) * level`.
pub const fn wiper_value(level: u8) -> u8 {
    let level = if level > VOLUME_MAX { VOLUME_MAX } else { level };
    WIPER_STEP * level
}

/// Bounded volume level, `0..=VOLUME_MAX`.
pub struct VolumeRegulator {
    level: u8,
}

impl VolumeRegulator {
    pub const fn new() -> Self {
        Self { level: 0 }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Apply one tick's worth of encoder movement.
    ///
    /// Moves at most one step no matter how large `delta` is. Returns
    /// `true` when there was any movement (even against a limit), which
    /// is the cue to bring up the volume popup.
    pub fn step(&mut self, delta: i16) -> bool {
        if delta > 0 && self.level < VOLUME_MAX {
            self.level += 1;
        } else if delta < 0 && self.level > 0 {
            self.level -= 1;
        }

        if delta != 0 {
            #[cfg(feature = "defmt")]
            defmt::info!("Volume: {=u8}/{=u8} (delta {=i16})", self.level, VOLUME_MAX, delta);
        }

        delta != 0
    }

    /// Push the current level to both potentiometers.
    ///
    /// All four registers are attempted even if one of them fails; the
    /// first failure is returned.
    pub fn sync<T: BusTransport>(&self, bus: &mut BusWriter<T>) -> Result<(), Error> {
        let value = wiper_value(self.level);
        let mut result = Ok(());
        for (wiper, channel) in WRITE_ORDER {
            let written = bus.write(channel.address(), wiper.command(), value);
            if result.is_ok() {
                result = written;
            }
        }
        result
    }
}

impl Default for VolumeRegulator {
    fn default() -> Self {
        Self::new()
    }
}
