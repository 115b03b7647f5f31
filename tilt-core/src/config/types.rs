//! Configuration type definitions

use crate::alarm::{Note, MELODY};
use crate::orientation::{Face, GravityBand};

/// Default debounce window for face changes (ms)
pub const DEBOUNCE_MS: u32 = 500;

/// Default alarm indicator toggle period (ms)
pub const ALARM_TOGGLE_MS: u32 = 1000;

/// Countdown cadence (ms)
pub const COUNTDOWN_CADENCE_MS: u32 = 1000;

/// Screen rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayOrientation {
    /// Upright
    #[default]
    Rot0,
    /// Quarter turn clockwise
    Rot90,
    /// Upside down
    Rot180,
    /// Quarter turn counter-clockwise
    Rot270,
}

impl DisplayOrientation {
    /// Build from a rotation index (0..=3)
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Rot0),
            1 => Some(Self::Rot90),
            2 => Some(Self::Rot180),
            3 => Some(Self::Rot270),
            _ => None,
        }
    }

    /// Rotation index (0..=3)
    pub const fn index(&self) -> u8 {
        match self {
            Self::Rot0 => 0,
            Self::Rot90 => 1,
            Self::Rot180 => 2,
            Self::Rot270 => 3,
        }
    }

    /// Check if the logical screen is portrait (width and height swapped)
    pub const fn is_sideways(&self) -> bool {
        matches!(self, Self::Rot90 | Self::Rot270)
    }
}

/// Timer bound to one trigger face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceBinding {
    /// Face that starts this timer
    pub face: Face,
    /// Countdown length in seconds
    pub duration_s: u16,
    /// Axis label shown with the session
    pub label: char,
    /// Screen rotation used while this face is down
    pub orientation: DisplayOrientation,
}

/// Complete timer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// One binding per trigger face
    pub bindings: [FaceBinding; 4],
    /// Accepted gravity magnitude for the dominant axis
    pub gravity: GravityBand,
    /// How long a new orientation must hold before it counts (ms)
    pub debounce_ms: u32,
    /// Alarm indicator toggle period (ms)
    pub blink_period_ms: u32,
    /// Alarm melody, looped while alarming
    pub melody: &'static [Note],
}

impl TimerConfig {
    /// Stock configuration
    ///
    /// Note the X faces: +X runs the 30 s timer and -X the 10 s one. This
    /// matches the shipped device behavior.
    pub const DEFAULT: Self = Self {
        bindings: [
            FaceBinding {
                face: Face::NegY,
                duration_s: 5,
                label: 'Y',
                orientation: DisplayOrientation::Rot0,
            },
            FaceBinding {
                face: Face::PosX,
                duration_s: 30,
                label: 'X',
                orientation: DisplayOrientation::Rot90,
            },
            FaceBinding {
                face: Face::PosY,
                duration_s: 15,
                label: 'Y',
                orientation: DisplayOrientation::Rot180,
            },
            FaceBinding {
                face: Face::NegX,
                duration_s: 10,
                label: 'X',
                orientation: DisplayOrientation::Rot270,
            },
        ],
        gravity: GravityBand::DEFAULT,
        debounce_ms: DEBOUNCE_MS,
        blink_period_ms: ALARM_TOGGLE_MS,
        melody: &MELODY,
    };

    /// Find the binding for a face
    pub fn binding_for(&self, face: Face) -> Option<&FaceBinding> {
        if !face.is_trigger() {
            return None;
        }
        self.bindings.iter().find(|b| b.face == face)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
