//! Screen model and display abstraction for the tilt timer
//!
//! This crate provides:
//! - `DisplayBackend` trait for the panel that shows the screens
//! - `Screen`, a list of placed text items in one orientation
//! - Builders for the three screens the timer shows (menu, countdown, alarm)
//!
//! # Architecture
//!
//! Screens are described by *where* text goes (center, an edge, toward an
//! edge) rather than by pixel coordinates. The backend resolves placements
//! against its own dimensions after applying the screen's rotation, so the
//! same screen works upright and sideways.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod layout;
pub mod screen;
pub mod screens;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use layout::{Placement, Side, TextSize};
pub use screen::{Screen, TextItem, LINE_LEN, MAX_ITEMS};
pub use screens::{alarm_screen, countdown_screen, menu_screen, side_for};
