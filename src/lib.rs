//! Front-panel interface logic for audio-panel.
//!
//! Everything here is plain `no_std` logic that runs on the host as well
//! as on the nRF52840: button classification, the screen state machine,
//! volume regulation and the tick scheduler. Hardware glue (GPIO/SAADC
//! tasks) is only compiled with the `embedded` feature.
//!
//! Usage: `cargo test --lib` (host), `cargo build --release --features
//! embedded --target thumbv7em-none-eabihf` (firmware).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod error;
pub mod input;
pub mod interface;
pub mod ui;
pub mod volume;

#[cfg(test)]
mod testing;

pub use bus::{BusTransport, BusWriter, RetryPolicy};
pub use error::{BusError, Error};
pub use input::{classify, InputLatch, Rotation};
pub use interface::Interface;
pub use ui::display::CharDisplay;
pub use ui::{Direction, ScreenAction, ScreenId};

// ═══════════════════════════════════════════════════════════════════════════
// Scheduler Tests
// ═══════════════════════════════════════════════════════════════════════════
