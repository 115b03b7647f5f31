//! Presentation sink implementation
//!
//! Turns the controller's presentation calls into screens on a display
//! backend, levels on the indicator LED and tones on the piezo.

use embedded_hal::digital::{OutputPin, PinState};
use tilt_core::config::{DisplayOrientation, FaceBinding, TimerConfig};
use tilt_core::traits::{PresentationSink, ToneOutput};
use tilt_display::{alarm_screen, countdown_screen, menu_screen, DisplayBackend, Screen};

/// Display, LED and piezo behind one presentation sink
pub struct Presenter<D, L, T> {
    display: D,
    indicator: L,
    tone: T,
    /// Menu layout source
    bindings: [FaceBinding; 4],
    /// Failed screen renders
    display_faults: u32,
    /// Failed LED level changes
    indicator_faults: u32,
}

impl<D, L, T> Presenter<D, L, T>
where
    D: DisplayBackend,
    L: OutputPin,
    T: ToneOutput,
{
    /// Create a presenter; the menu is laid out from `config`
    pub fn new(display: D, indicator: L, tone: T, config: &TimerConfig) -> Self {
        Self {
            display,
            indicator,
            tone,
            bindings: config.bindings,
            display_faults: 0,
            indicator_faults: 0,
        }
    }

    /// Number of screens that failed to render
    pub fn display_faults(&self) -> u32 {
        self.display_faults
    }

    /// Number of indicator level changes the LED pin rejected
    pub fn indicator_faults(&self) -> u32 {
        self.indicator_faults
    }

    /// The display backend, for inspecting what was drawn
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The tone output, for inspecting what is playing
    pub fn tone(&self) -> &T {
        &self.tone
    }

    fn show(&mut self, screen: Screen) {
        if screen.render(&mut self.display).is_err() {
            self.display_faults = self.display_faults.saturating_add(1);
        }
    }
}

impl<D, L, T> PresentationSink for Presenter<D, L, T>
where
    D: DisplayBackend,
    L: OutputPin,
    T: ToneOutput,
{
    fn render_menu(&mut self) {
        let screen = menu_screen(&self.bindings);
        self.show(screen);
    }

    fn render_countdown(&mut self, remaining_s: u16, orientation: DisplayOrientation) {
        self.show(countdown_screen(remaining_s, orientation));
    }

    fn render_alarm(&mut self, orientation: DisplayOrientation) {
        self.show(alarm_screen(orientation));
    }

    fn set_indicator(&mut self, on: bool) {
        if self.indicator.set_state(PinState::from(on)).is_err() {
            self.indicator_faults = self.indicator_faults.saturating_add(1);
        }
    }

    fn set_tone(&mut self, frequency_hz: u16) {
        self.tone.set_frequency(frequency_hz);
    }
}
