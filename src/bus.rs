//! Register writes to the digital potentiometers.
//!
//! Each write is a two-byte frame `[command, value]` sent to a 7-bit bus
//! address. The [`BusWriter`] repeats a frame until the transport reports
//! success, or until its [`RetryPolicy`] gives up.

use crate::error::{BusError, Error};

/// Low-level transmit primitive consumed by the bus writer.
///
/// Implemented for every blocking `embedded_hal` I²C bus, so a HAL
/// peripheral (or a mock) can be handed in directly.
pub trait BusTransport {
    /// Send `frame` to the device at 7-bit `address`.
    fn transmit(&mut self, address: u8, frame: &[u8]) -> Result<(), BusError>;
}

impl<I> BusTransport for I
where
    I: embedded_hal::i2c::I2c,
{
    fn transmit(&mut self, address: u8, frame: &[u8]) -> Result<(), BusError> {
        use embedded_hal::i2c::Error as _;

        self.write(address, frame).map_err(|e| BusError::from(e.kind()))
    }
}

/// How often a failed frame is re-sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RetryPolicy {
    /// Block until the device acknowledges. A dead bus hangs the caller.
    Forever,
    /// Give up after this many attempts (at least one is always made).
    Attempts(u32),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Forever
    }
}

/// A register write: which register of a device, and the value for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusFrame {
    pub command: u8,
    pub value: u8,
}

impl BusFrame {
    pub const SIZE: usize = 2;

    pub const fn new(command: u8, value: u8) -> Self {
        Self { command, value }
    }

    /// Wire layout: command byte first, then data.
    pub const fn to_bytes(self) -> [u8; Self::SIZE] {
        [self.command, self.value]
    }
}

/// Sends frames through a [`BusTransport`] according to a [`RetryPolicy`].
pub struct BusWriter<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: BusTransport> BusWriter<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Write `value` into register `command` of the device at `address`.
    ///
    /// With [`RetryPolicy::Forever`] this only returns once the frame was
    /// acknowledged.
    pub fn write(&mut self, address: u8, command: u8, value: u8) -> Result<(), Error> {
        let bytes = BusFrame::new(command, value).to_bytes();
        let mut attempts: u32 = 0;

        loop {
            attempts = attempts.saturating_add(1);
            match self.transport.transmit(address, &bytes) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if attempts == 1 {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("Bus: write to {=u8:#x} failed ({}), retrying", address, e);
                    }
                    if let RetryPolicy::Attempts(limit) = self.policy {
                        if attempts >= limit {
                            return Err(Error::RetriesExhausted {
                                address,
                                attempts,
                                last: e,
                            });
                        }
                    }
                }
            }
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the underlying transport.
    pub fn release(self) -> T {
        self.transport
    }
}
