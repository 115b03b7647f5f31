//! Display backend trait
//!
//! Defines the interface for the panel driver.

use tilt_core::config::DisplayOrientation;

use crate::layout::{Placement, TextSize};

/// Errors reported by a panel driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Panel has not been initialized
    NotInitialized,
}

/// Panel driver seen by the screens
///
/// Provides a hardware-agnostic interface for rendering screens.
/// Implementations handle panel specifics and buffering.
pub trait DisplayBackend {
    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Rotate subsequent drawing by a number of quarter turns
    fn set_orientation(&mut self, orientation: DisplayOrientation) -> Result<(), DisplayError>;

    /// Draw text at a placement resolved against the rotated dimensions
    fn draw_text(
        &mut self,
        placement: Placement,
        size: TextSize,
        text: &str,
    ) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
