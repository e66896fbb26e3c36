//! Unified error type for audio-panel.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A bounded retry policy gave up on a potentiometer write.
    RetriesExhausted {
        /// 7-bit address of the device that never acknowledged.
        address: u8,
        /// Number of transmit attempts made.
        attempts: u32,
        /// Failure reported by the final attempt.
        last: BusError,
    },
}

/// Subset of bus failures we distinguish (keeps the enum `Copy`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The addressed device did not acknowledge.
    Nack,
    /// Another controller won arbitration.
    ArbitrationLoss,
    /// Any other controller-level fault.
    Other,
}

// Convenience conversions

impl From<embedded_hal::i2c::ErrorKind> for BusError {
    fn from(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;

        // `ErrorKind` is non-exhaustive; kinds we do not act on
        // separately (bus error, overrun, HAL-specific) are all `Other`.
        match kind {
            ErrorKind::NoAcknowledge(_) => BusError::Nack,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLoss,
            _ => BusError::Other,
        }
    }
}
