//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in tilt-core:
//!
//! - Accelerometer (LIS3DH over I2C) as the motion source
//! - OLED panel (SSD1306 over I2C) as a display backend
//! - Piezo tone generation on a PWM slice
//! - `Presenter`, the presentation sink tying display, LED and piezo together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod accel;
pub mod display;
pub mod presenter;
pub mod tone;

#[cfg(test)]
mod testing;

pub use presenter::Presenter;
