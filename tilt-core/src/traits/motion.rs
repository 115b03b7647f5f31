//! Motion source trait

use crate::orientation::AccelerationSample;

/// Errors that can occur while reading motion samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Bus transaction failed
    Bus,
    /// Sensor did not identify as the expected device
    NotDetected,
}

/// Trait for accelerometers feeding the timer
///
/// Implementations return a best-effort instantaneous reading in m/s².
/// No filtering is assumed.
pub trait MotionSource {
    /// Read one sample
    ///
    /// Takes `&mut self` because bus reads require mutable access.
    fn sample(&mut self) -> Result<AccelerationSample, MotionError>;
}
