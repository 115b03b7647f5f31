//! State machine definition
//!
//! Display, indicator and tone behavior is a function of the current state
//! and an event.

use super::events::Event;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Idle, menu visible, waiting for a trigger face
    #[default]
    Menu,
    /// Counting down the selected face's duration
    Countdown,
    /// Time is up; blinking and playing until reoriented
    Alarm,
}

impl TimerState {
    /// Check if this state tracks an active face (debounce runs)
    pub fn is_timing(&self) -> bool {
        matches!(self, TimerState::Countdown | TimerState::Alarm)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use TimerState::*;

        match (self, event) {
            // Menu transitions
            (Menu, FaceDetected(face)) if face.is_trigger() => Countdown,

            // Countdown transitions
            (Countdown, ReorientationConfirmed) => Menu,
            (Countdown, CountdownExpired) => Alarm,

            // Alarm transitions (never self-terminates)
            (Alarm, ReorientationConfirmed) => Menu,

            // Default: stay in current state
            _ => self,
        }
    }
}
