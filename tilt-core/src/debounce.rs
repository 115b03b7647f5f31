//! Face-change debouncing
//!
//! While a timer is running, a brief wobble (sensor noise, the box being
//! lifted for a moment) must not cancel it. A different face, including
//! [`Face::None`], only counts once it has been observed continuously for
//! the whole debounce window.
//!
//! ```text
//!            differs               differs, elapsed >= window
//!  Stable ───────────► Pending ─────────────────────────────► Confirmed
//!    ▲                    │                                      │
//!    │  back on active    │                                      │
//!    └────────────────────┘◄──────────── window cleared ─────────┘
//! ```

use crate::orientation::Face;
use crate::time::{has_elapsed, Millis};

/// Result of one debounce observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceChange {
    /// Still resting on the active face
    NoChange,
    /// A different face is being observed but the window has not elapsed
    Pending,
    /// A different face held for the full window
    Confirmed,
}

/// Tracks how long the observed face has differed from the active one
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTracker {
    /// Window length (ms)
    window_ms: u32,
    /// Start of the current deviation, if one is open
    since: Option<Millis>,
}

impl DebounceTracker {
    /// Create a tracker with the given window length
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            since: None,
        }
    }

    /// Feed one observation
    ///
    /// Call once per tick while a countdown or alarm is active.
    pub fn observe(&mut self, current: Face, active: Face, now: Millis) -> FaceChange {
        if current == active && current != Face::None {
            self.since = None;
            return FaceChange::NoChange;
        }

        match self.since {
            None => {
                self.since = Some(now);
                FaceChange::Pending
            }
            Some(since) if has_elapsed(now, since, self.window_ms) => {
                self.since = None;
                FaceChange::Confirmed
            }
            Some(_) => FaceChange::Pending,
        }
    }

    /// Drop any open window
    pub fn reset(&mut self) {
        self.since = None;
    }

    /// Check if a deviation is currently being timed
    pub fn is_pending(&self) -> bool {
        self.since.is_some()
    }
}
