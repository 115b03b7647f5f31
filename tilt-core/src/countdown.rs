//! Countdown engine
//!
//! Decrements once per second. Each step re-anchors on the tick that
//! observed it rather than advancing by exactly 1000 ms, so scheduler
//! jitter never accumulates into a burst of catch-up steps.
//!
//! The session counts down to and shows `0`, then expires on the next
//! cadence tick.

use crate::config::{DisplayOrientation, FaceBinding, COUNTDOWN_CADENCE_MS};
use crate::orientation::Face;
use crate::time::{has_elapsed, Millis};

/// Outcome of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownTick {
    /// Less than a cadence since the last step
    Unchanged,
    /// One second elapsed; carries the new remaining value
    Decremented(u16),
    /// Cadence elapsed with nothing left; the session is finished
    Expired,
}

/// An active countdown tied to one trigger face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownSession {
    total_s: u16,
    remaining_s: u16,
    label: char,
    orientation: DisplayOrientation,
    face: Face,
    last_step_ms: Millis,
    expired: bool,
}

impl CountdownSession {
    /// Start a session for a binding at `now`
    pub fn start(binding: &FaceBinding, now: Millis) -> Self {
        Self {
            total_s: binding.duration_s,
            remaining_s: binding.duration_s,
            label: binding.label,
            orientation: binding.orientation,
            face: binding.face,
            last_step_ms: now,
            expired: false,
        }
    }

    /// Advance the countdown
    ///
    /// After `Expired` has been returned once, further calls return
    /// `Unchanged` and the session is left as is.
    pub fn tick(&mut self, now: Millis) -> CountdownTick {
        if self.expired || !has_elapsed(now, self.last_step_ms, COUNTDOWN_CADENCE_MS) {
            return CountdownTick::Unchanged;
        }

        self.last_step_ms = now;

        if self.remaining_s > 0 {
            self.remaining_s -= 1;
            CountdownTick::Decremented(self.remaining_s)
        } else {
            self.expired = true;
            CountdownTick::Expired
        }
    }

    /// Configured length in seconds
    pub fn total_s(&self) -> u16 {
        self.total_s
    }

    /// Seconds left
    pub fn remaining_s(&self) -> u16 {
        self.remaining_s
    }

    /// Axis label
    pub fn label(&self) -> char {
        self.label
    }

    /// Screen rotation for this session
    pub fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    /// Face that started the session
    pub fn face(&self) -> Face {
        self.face
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
