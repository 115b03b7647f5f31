//! Text placement vocabulary

/// Screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where a text item sits on the (rotated) screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placement {
    /// Centered on both axes
    Center,
    /// Against an edge, centered along it
    Edge(Side),
    /// Between the center and an edge
    Inner(Side),
    /// Centered horizontally, upper half
    Upper,
    /// Centered horizontally, lower half
    Lower,
}

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}
