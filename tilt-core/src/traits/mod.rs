//! Collaborator traits
//!
//! These traits define the interface between the timer logic and the
//! hardware-specific implementations.

pub mod clock;
pub mod motion;
pub mod presentation;

pub use clock::Clock;
pub use motion::{MotionError, MotionSource};
pub use presentation::{PresentationSink, ToneOutput};
