//! Monotonic clock trait

use crate::time::Millis;

/// Source of wrapping millisecond timestamps
///
/// Injected so the controller can be driven with synthetic time.
pub trait Clock {
    /// Current time in milliseconds; wraps at `u32::MAX`
    fn now_ms(&self) -> Millis;
}
