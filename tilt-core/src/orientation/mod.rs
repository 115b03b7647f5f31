//! Orientation classification
//!
//! Maps a raw acceleration reading to the face the device is resting on.

pub mod classifier;
pub mod face;

pub use classifier::{classify, GravityBand};
pub use face::{AccelerationSample, Face};
