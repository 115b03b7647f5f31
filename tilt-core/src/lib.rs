//! Board-agnostic core logic for the tilt timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Orientation classification from accelerometer samples
//! - Debouncing of face changes while a timer is running
//! - Countdown engine and alarm sequencer (blink + melody)
//! - Timer state machine and the controller that owns all timing state
//! - Collaborator traits (motion source, presentation sink, clock)
//! - Build-time configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod debounce;
pub mod orientation;
pub mod state;
pub mod time;
pub mod traits;

pub use controller::TimerController;
