//! Presentation sink and tone output traits

use crate::config::DisplayOrientation;

/// Trait for everything the user sees and hears
///
/// Calls are fire-and-forget; implementations deal with their own faults.
pub trait PresentationSink {
    /// Show the face-selection menu (always upright)
    fn render_menu(&mut self);

    /// Show the remaining seconds
    fn render_countdown(&mut self, remaining_s: u16, orientation: DisplayOrientation);

    /// Show the time-up screen
    fn render_alarm(&mut self, orientation: DisplayOrientation);

    /// Drive the indicator LED
    fn set_indicator(&mut self, on: bool);

    /// Drive the tone output (0 = silence)
    fn set_tone(&mut self, frequency_hz: u16);
}

/// Trait for tone generators (piezo, speaker)
pub trait ToneOutput {
    /// Start sounding `frequency_hz`, or silence the output for 0
    fn set_frequency(&mut self, frequency_hz: u16);

    /// Silence the output
    fn silence(&mut self) {
        self.set_frequency(0);
    }
}
