//! Application-wide constants and compile-time configuration.
//!
//! All band limits, bus addresses, timing parameters, and pin assignments
//! live here so they can be tuned in one place.

use crate::bus::RetryPolicy;

// Scheduler

/// Period of the interface tick (ms). Popup durations are counted in ticks.
pub const TICK_PERIOD_MS: u64 = 100;

/// The display is refreshed every this many frames even without a state
/// change, so time-dependent screens (uptime) keep moving.
pub const REDRAW_INTERVAL_FRAMES: u32 = 15;

/// How long the volume popup stays up after the last change (ticks).
/// 20 ticks = 2 s at the default tick period.
pub const VOLUME_POPUP_TICKS: u16 = 20;

// Display

/// Character cells per LCD row.
pub const LCD_COLUMNS: usize = 16;

/// Number of LCD rows.
pub const LCD_ROWS: u8 = 2;

// Button ladder
//
// Upper bounds (inclusive) of the 12-bit ADC bands produced by the
// five-way resistor-ladder switch. Measured averages: Right 2610,
// Down 2770, Up 3100, Enter 3590; everything above the Enter band is Left.

/// Samples at or below this value mean no button is pressed.
pub const BAND_NONE_MAX: u16 = 2000;
pub const BAND_RIGHT_MAX: u16 = 2730;
pub const BAND_DOWN_MAX: u16 = 2900;
pub const BAND_UP_MAX: u16 = 3300;
pub const BAND_ENTER_MAX: u16 = 3800;

/// Largest value a 12-bit conversion can produce.
pub const ADC_MAX: u16 = 4095;

// Volume / digital potentiometers

/// Highest user-facing volume step. Steps run 0..=VOLUME_MAX.
pub const VOLUME_MAX: u8 = 20;

/// Wiper increment per volume step: floor(255 / 20) = 12.
pub const WIPER_STEP: u8 = 0xFF / VOLUME_MAX;

/// 7-bit I²C address of the left-channel potentiometer.
pub const LEFT_POT_ADDR: u8 = 0x2A;

/// 7-bit I²C address of the right-channel potentiometer.
pub const RIGHT_POT_ADDR: u8 = 0x2F;

/// Instruction byte selecting RDAC1 (positive-side wiper).
pub const RDAC1_COMMAND: u8 = 0b0001_0000;

/// Instruction byte selecting RDAC2 (negative-side wiper).
pub const RDAC2_COMMAND: u8 = 0b0001_0001;

/// Retry policy used by the firmware for potentiometer writes.
///
/// `Forever` blocks the tick until the pot acknowledges. Switch to
/// `RetryPolicy::Attempts(n)` to keep the panel responsive on a dead bus.
pub const BUS_RETRY_POLICY: RetryPolicy = RetryPolicy::Forever;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Adjust for your custom PCB; the concrete peripherals are selected in
// `main.rs`.
//
//   Rotary A (edge)    → P0.03
//   Rotary B (level)   → P0.04
//   Button trigger     → P0.28
//   Button ladder AIN  → P0.02 (AIN0)
//   I²C SDA            → P0.26
//   I²C SCL            → P0.27
//   LCD RS / EN        → P1.01 / P1.02
//   LCD D4..D7         → P1.03 / P1.04 / P1.05 / P1.06
