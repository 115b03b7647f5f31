//! Embassy async tasks
//!
//! The tick task paces the timer task through a signal.

pub mod tick;
pub mod timer;

pub use tick::tick_task;
pub use timer::timer_task;
