//! Face labels and acceleration samples

/// One 3-axis acceleration reading in m/s²
///
/// Produced once per tick by the motion source and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelerationSample {
    /// Create a sample from its three axes
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Resting orientation of the device
///
/// `None` covers both "lying flat" and "tilted / moving".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Face {
    /// No side face is down
    #[default]
    None,
    /// Gravity along -Y (bottom edge down)
    NegY,
    /// Gravity along +X (right edge down)
    PosX,
    /// Gravity along +Y (top edge down)
    PosY,
    /// Gravity along -X (left edge down)
    NegX,
}

impl Face {
    /// The four faces that can start a timer
    pub const TRIGGERS: [Face; 4] = [Face::NegY, Face::PosX, Face::PosY, Face::NegX];

    /// Check if this face can start a timer
    pub fn is_trigger(&self) -> bool {
        !matches!(self, Face::None)
    }
}
