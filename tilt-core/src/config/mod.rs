//! Configuration types
//!
//! Board-agnostic configuration fixed at build time. The firmware generates
//! its `TimerConfig` from `timer.toml`; [`TimerConfig::DEFAULT`] holds the
//! stock values.

pub mod types;

pub use types::*;
