//! Piezo on an RP2040 PWM slice

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use tilt_drivers::tone::{PwmSettings, PwmSlice};

/// PWM slice with the piezo on channel A
pub struct PiezoPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> PiezoPwm<'d> {
    /// Wrap a slice already bound to the piezo pin; it starts silent
    pub fn new(pwm: Pwm<'d>) -> Self {
        Self {
            pwm,
            config: PwmConfig::default(),
        }
    }
}

impl PwmSlice for PiezoPwm<'_> {
    fn configure(&mut self, settings: Option<PwmSettings>) {
        match settings {
            Some(s) => {
                self.config.divider = s.divider.into();
                self.config.top = s.top;
                self.config.compare_a = s.compare;
            }
            // Keep the period, hold the output low
            None => self.config.compare_a = 0,
        }
        self.pwm.set_config(&self.config);
    }
}
