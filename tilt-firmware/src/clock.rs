//! Tick timestamp as a controller clock

use tilt_core::time::Millis;
use tilt_core::traits::Clock;

/// The timestamp carried by one tick signal
///
/// Every read during a tick sees the same instant.
#[derive(Debug, Clone, Copy)]
pub struct TickClock(pub Millis);

impl Clock for TickClock {
    fn now_ms(&self) -> Millis {
        self.0
    }
}
