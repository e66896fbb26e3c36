//! audio-panel firmware entry point.
//!
//! Brings up the LCD, the potentiometer bus and the input tasks, then
//! drives the interface tick from a fixed-period ticker.
//!
//! The tick blocks (bus writes, LCD timing), so the input tasks run on an
//! interrupt-mode executor that preempts it. Edges and samples arriving
//! mid-tick are handled right away and land in the latch.

#![no_std]
#![no_main]

use audio_panel::config::{self, TICK_PERIOD_MS};
use audio_panel::ui::buttons;
use audio_panel::ui::display::Lcd1602;
use audio_panel::{InputLatch, Interface};
use defmt::{info, unwrap};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::interrupt::{self, InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static LATCH: InputLatch = InputLatch::new();

static INPUT_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    INPUT_EXECUTOR.on_interrupt()
}

#[embassy_executor::task]
async fn rotary(a: Input<'static>, b: Input<'static>) {
    buttons::rotary_task(&LATCH, a, b).await
}

#[embassy_executor::task]
async fn trigger(pin: Input<'static>) {
    buttons::trigger_task(&LATCH, pin).await
}

#[embassy_executor::task]
async fn sample(adc: Saadc<'static, 1>) {
    buttons::sample_task(&LATCH, adc).await
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("audio-panel v{}", env!("CARGO_PKG_VERSION"));

    // LCD, 4-bit mode
    let out = |pin: AnyPin| Output::new(pin, Level::Low, OutputDrive::Standard);
    let lcd = Lcd1602::new(
        out(AnyPin::from(p.P1_01)),
        out(AnyPin::from(p.P1_02)),
        [
            out(AnyPin::from(p.P1_03)),
            out(AnyPin::from(p.P1_04)),
            out(AnyPin::from(p.P1_05)),
            out(AnyPin::from(p.P1_06)),
        ],
        Delay,
    );

    // Potentiometer bus
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K100;
    let twim = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);

    let mut iface = Interface::init(&LATCH, twim, lcd, config::BUS_RETRY_POLICY);

    // Ladder ADC
    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_12BIT;
    let adc = Saadc::new(p.SAADC, Irqs, adc_config, [ChannelConfig::single_ended(p.P0_02)]);

    let enc_a = Input::new(p.P0_03, Pull::Up);
    let enc_b = Input::new(p.P0_04, Pull::Up);
    let button = Input::new(p.P0_28, Pull::Up);

    // Above thread mode, below the GPIOTE/SAADC handlers.
    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let input = INPUT_EXECUTOR.start(interrupt::EGU1_SWI1);
    unwrap!(input.spawn(rotary(enc_a, enc_b)));
    unwrap!(input.spawn(trigger(button)));
    unwrap!(input.spawn(sample(adc)));

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    let mut frame: u32 = 0;
    loop {
        iface.tick(frame);
        frame = frame.wrapping_add(1);
        ticker.next().await;
    }
}
