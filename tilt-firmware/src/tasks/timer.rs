//! Timer task
//!
//! Owns the controller and its collaborators. Each tick reads the
//! accelerometer and advances the timer. State transitions, face changes and
//! presentation faults are logged.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};

use tilt_core::TimerController;
use tilt_drivers::accel::Lis3dh;
use tilt_drivers::display::Ssd1306;
use tilt_drivers::tone::Piezo;
use tilt_drivers::Presenter;

use crate::clock::TickClock;
use crate::config::TIMER_CONFIG;
use crate::piezo::PiezoPwm;
use crate::tasks::tick::TICK_SIGNAL;

/// Accelerometer on I2C0
pub type Accelerometer = Lis3dh<I2c<'static, I2C0, Blocking>>;

/// OLED, LED and piezo
pub type TimerPresenter =
    Presenter<Ssd1306<I2c<'static, I2C1, Blocking>>, Output<'static>, Piezo<PiezoPwm<'static>>>;

#[embassy_executor::task]
pub async fn timer_task(mut motion: Accelerometer, mut presenter: TimerPresenter) {
    info!("Timer task started");

    let mut controller = TimerController::new(TIMER_CONFIG);
    controller.start(&mut presenter);
    let mut reported_faults = (presenter.display_faults(), presenter.indicator_faults());
    let mut reported_face = controller.last_face();

    loop {
        let now = TICK_SIGNAL.wait().await;

        match controller.poll(&mut motion, &TickClock(now), &mut presenter) {
            Ok(Some(event)) => {
                info!("{} -> {}", event, controller.state());
                if let Some(binding) = controller.active_binding() {
                    debug!("Active: {} ({} s)", binding.face, binding.duration_s);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Motion read failed: {}", e),
        }

        if controller.last_face() != reported_face {
            reported_face = controller.last_face();
            trace!("Face: {}", reported_face);
        }

        let faults = (presenter.display_faults(), presenter.indicator_faults());
        if faults != reported_faults {
            warn!(
                "Presentation fault (display {} total, indicator {} total)",
                faults.0, faults.1
            );
            reported_faults = faults;
        }
    }
}
