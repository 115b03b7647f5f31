//! Tick task pacing motion sampling

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

use tilt_core::time::Millis;

/// Signal carrying the tick timestamp to the timer task
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, Millis> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
///
/// The timestamp is milliseconds since boot truncated to 32 bits, so it
/// wraps after about 49.7 days; the core compares times wrap-safely.
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(Instant::now().as_millis() as Millis);
    }
}
