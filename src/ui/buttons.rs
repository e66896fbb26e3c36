//! GPIO/SAADC event sources for the front panel.
//!
//! - Rotary encoder: edge on channel A, direction from the level of B
//! - Ladder button: a falling edge on the trigger line starts one ADC
//!   conversion of the ladder voltage
//! - Sample: the finished conversion is classified and dispatched
//!
//! No task touches the interface directly; everything lands in the
//! [`InputLatch`]. Presses are not debounced; a bouncing contact simply
//! resamples the ladder.

use crate::config::ADC_MAX;
use crate::input::{InputLatch, Rotation};
use defmt::{debug, info};
use embassy_nrf::gpio::Input;
use embassy_nrf::saadc::Saadc;

/// Count encoder detents.
///
/// Only rising edges of A are counted; B is read on each one.
pub async fn rotary_task(latch: &'static InputLatch, mut a: Input<'static>, b: Input<'static>) -> ! {
    info!("Rotary: listening");
    loop {
        a.wait_for_rising_edge().await;
        let rotation = Rotation::from_quadrature(b.is_high());
        debug!("Rotary: {}", rotation);
        latch.on_rotary_edge(rotation);
    }
}

/// Request a ladder conversion on every press (trigger line active-low).
pub async fn trigger_task(latch: &'static InputLatch, mut trigger: Input<'static>) -> ! {
    loop {
        trigger.wait_for_falling_edge().await;
        latch.on_button_trigger();
    }
}

/// Convert the ladder voltage whenever a press requested it.
pub async fn sample_task(latch: &'static InputLatch, mut adc: Saadc<'static, 1>) -> ! {
    adc.calibrate().await;
    let mut buf = [0i16; 1];
    loop {
        latch.sample_requested().await;
        adc.sample(&mut buf).await;

        // Single-ended conversions can read a few counts below zero.
        let raw = buf[0].clamp(0, ADC_MAX as i16) as u16;
        let action = latch.on_sample_ready(raw);
        debug!("Button: sample {=u16} ({}) -> {}", raw, latch.last_direction(), action);
    }
}
