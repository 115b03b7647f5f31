//! Tilt Timer - Orientation-Triggered Countdown Firmware
//!
//! Main firmware binary for RP2040 boards with a LIS3DH accelerometer, an
//! SSD1306 OLED, an indicator LED and a piezo.
//!
//! Rest the box on one of its four side faces to start that face's
//! countdown. When it runs out the LED blinks and the piezo plays until the
//! box is turned again.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use tilt_drivers::accel::{Lis3dh, SlaveAddr};
use tilt_drivers::display::ssd1306::{self, Ssd1306};
use tilt_drivers::tone::Piezo;
use tilt_drivers::Presenter;

use crate::config::{POLL_INTERVAL_MS, TIMER_CONFIG};
use crate::piezo::PiezoPwm;

mod clock;
mod config;
mod piezo;
mod tasks;

/// I2C bus speed for both sensor and display
const I2C_FREQUENCY_HZ: u32 = 400_000;

fn i2c_config() -> i2c::Config {
    let mut config = i2c::Config::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tilt Timer starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Accelerometer on I2C0 (SDA=GPIO4, SCL=GPIO5)
    let accel_bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config());
    let accel = unwrap!(Lis3dh::new_i2c(accel_bus, SlaveAddr::Default));
    info!("LIS3DH initialized");

    // OLED on I2C1 (SDA=GPIO6, SCL=GPIO7)
    let display_bus = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c_config());
    let mut display = Ssd1306::new(display_bus, ssd1306::DEFAULT_ADDRESS);
    unwrap!(display.init());
    info!("SSD1306 initialized");

    // Indicator LED (GPIO27) and piezo (GPIO12, PWM slice 6 channel A)
    let led = Output::new(p.PIN_27, Level::Low);
    let pwm = Pwm::new_output_a(p.PWM_SLICE6, p.PIN_12, PwmConfig::default());
    let piezo = Piezo::new(PiezoPwm::new(pwm), embassy_rp::clocks::clk_sys_freq());

    let presenter = Presenter::new(display, led, piezo, &TIMER_CONFIG);

    info!(
        "Config: debounce={} ms, blink={} ms, poll={} ms",
        TIMER_CONFIG.debounce_ms, TIMER_CONFIG.blink_period_ms, POLL_INTERVAL_MS
    );

    unwrap!(spawner.spawn(tasks::tick_task(POLL_INTERVAL_MS)));
    unwrap!(spawner.spawn(tasks::timer_task(accel, presenter)));

    info!("All tasks spawned");
}
