//! Timer state machine
//!
//! Defines the authoritative top-level behavior of the timer.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::TimerState;
