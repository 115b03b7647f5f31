//! Alarm output sequencing
//!
//! Two free-running clocks drive the alarm: an indicator blink and a
//! looping melody. They share nothing, so the blink period never depends
//! on note lengths.

pub mod melody;
pub mod sequencer;

pub use melody::{Note, MELODY};
pub use sequencer::{AlarmOutput, AlarmSequencer};
