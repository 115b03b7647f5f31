//! LIS3DH accelerometer
//!
//! Thin [`MotionSource`] over the `lis3dh` crate. The sensor is set to
//! ±2 g at 50 Hz in high-resolution mode; samples come back from the crate
//! in g and are scaled to m/s².

use core::fmt::Debug;

use embedded_hal_02::blocking::i2c::{Write, WriteRead};
use lis3dh::accelerometer::Accelerometer;
use lis3dh::{DataRate, Lis3dhI2C, Mode, Range, SlaveAddr};
use tilt_core::orientation::AccelerationSample;
use tilt_core::traits::{MotionError, MotionSource};

/// Standard gravity (m/s²)
const STANDARD_GRAVITY: f32 = 9.806_65;

/// LIS3DH on a blocking I2C bus
pub struct Lis3dh<I2C> {
    sensor: lis3dh::Lis3dh<Lis3dhI2C<I2C>>,
}

impl<I2C, E> Lis3dh<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    /// Check WHO_AM_I at `address`, then configure the sensor
    ///
    /// Fails with [`MotionError::NotDetected`] when another device answers.
    pub fn new_i2c(i2c: I2C, address: SlaveAddr) -> Result<Self, MotionError> {
        let mut sensor = lis3dh::Lis3dh::new_i2c(i2c, address).map_err(motion_error)?;

        sensor.set_mode(Mode::HighResolution).map_err(motion_error)?;
        sensor.set_range(Range::G2).map_err(motion_error)?;
        sensor.set_datarate(DataRate::Hz_50).map_err(motion_error)?;

        Ok(Self { sensor })
    }
}

impl<I2C, E> MotionSource for Lis3dh<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    fn sample(&mut self) -> Result<AccelerationSample, MotionError> {
        let g = self.sensor.accel_norm().map_err(|_| MotionError::Bus)?;
        Ok(AccelerationSample::new(
            g.x * STANDARD_GRAVITY,
            g.y * STANDARD_GRAVITY,
            g.z * STANDARD_GRAVITY,
        ))
    }
}

fn motion_error<B, P>(error: lis3dh::Error<B, P>) -> MotionError {
    match error {
        lis3dh::Error::WrongAddress => MotionError::NotDetected,
        _ => MotionError::Bus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RegisterBus;

    const ADDRESS: u8 = 0x18;
    const WHO_AM_I: u8 = 0x0F;
    const CTRL_REG1: u8 = 0x20;
    const CTRL_REG4: u8 = 0x23;
    const OUT_X_L: u8 = 0x28;

    fn sensor_bus() -> RegisterBus {
        let bus = RegisterBus::new(ADDRESS);
        bus.set(WHO_AM_I, 0x33);
        bus
    }

    fn store_raw(bus: &RegisterBus, raw: [i16; 3]) {
        for (i, word) in raw.iter().enumerate() {
            let [lo, hi] = word.to_le_bytes();
            bus.set(OUT_X_L + 2 * i as u8, lo);
            bus.set(OUT_X_L + 2 * i as u8 + 1, hi);
        }
    }

    #[test]
    fn test_new_configures_rate_range_and_mode() {
        let bus = sensor_bus();
        assert!(Lis3dh::new_i2c(bus.clone(), SlaveAddr::Default).is_ok());

        // ODR 50 Hz, high resolution, ±2 g
        assert_eq!(bus.get(CTRL_REG1) >> 4, 0x4);
        assert_ne!(bus.get(CTRL_REG4) & 0x08, 0);
        assert_eq!(bus.get(CTRL_REG4) & 0x30, 0);
    }

    #[test]
    fn test_new_rejects_wrong_device() {
        let bus = sensor_bus();
        bus.set(WHO_AM_I, 0x6A);
        assert!(matches!(
            Lis3dh::new_i2c(bus, SlaveAddr::Default),
            Err(MotionError::NotDetected)
        ));
    }

    #[test]
    fn test_new_reports_bus_failure() {
        let bus = sensor_bus();
        bus.set_fail(true);
        assert!(matches!(
            Lis3dh::new_i2c(bus, SlaveAddr::Default),
            Err(MotionError::Bus)
        ));
    }

    #[test]
    fn test_new_at_wrong_address_reports_bus_failure() {
        assert!(matches!(
            Lis3dh::new_i2c(sensor_bus(), SlaveAddr::Alternate),
            Err(MotionError::Bus)
        ));
    }

    #[test]
    fn test_sample_converts_to_ms2() {
        let bus = sensor_bus();
        let mut lis = Lis3dh::new_i2c(bus.clone(), SlaveAddr::Default).unwrap();

        // 1000 mg on Y, -1000 mg on X, nothing on Z
        store_raw(&bus, [-1000 << 4, 1000 << 4, 0]);
        let s = lis.sample().unwrap();
        assert!((s.y - STANDARD_GRAVITY).abs() < 0.05);
        assert!((s.x + STANDARD_GRAVITY).abs() < 0.05);
        assert!(s.z.abs() < 0.05);
    }

    #[test]
    fn test_sample_reports_bus_failure() {
        let bus = sensor_bus();
        let mut lis = Lis3dh::new_i2c(bus.clone(), SlaveAddr::Default).unwrap();

        bus.set_fail(true);
        assert_eq!(lis.sample(), Err(MotionError::Bus));

        bus.set_fail(false);
        assert!(lis.sample().is_ok());
    }
}
