//! Dominant-axis orientation classifier
//!
//! A face is reported only when the dominant axis carries roughly one
//! gravity. Anything weaker or stronger means the device is tilted or
//! being moved, and classifies as [`Face::None`].
//!
//! Axis priority on exact ties is Y, then X, then Z. A dominant Z axis is
//! the "lying flat" position and is never a trigger.

use super::face::{AccelerationSample, Face};

/// Accepted magnitude range for the dominant axis (m/s²)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GravityBand {
    /// Lower bound, inclusive
    pub min: f32,
    /// Upper bound, inclusive
    pub max: f32,
}

impl GravityBand {
    /// Band tolerating sensor noise around 9.8 m/s²
    pub const DEFAULT: Self = Self { min: 9.0, max: 11.5 };

    /// Check if a magnitude lies inside the band
    #[inline]
    pub fn contains(&self, magnitude: f32) -> bool {
        magnitude >= self.min && magnitude <= self.max
    }
}

impl Default for GravityBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[inline]
fn magnitude(v: f32) -> f32 {
    if v < 0.0 {
        -v
    } else {
        v
    }
}

/// Classify a sample into the face the device rests on
///
/// Pure function; NaN components never satisfy the band and fall
/// through to [`Face::None`].
pub fn classify(sample: &AccelerationSample, band: &GravityBand) -> Face {
    let ax = magnitude(sample.x);
    let ay = magnitude(sample.y);
    let az = magnitude(sample.z);

    if ay >= ax && ay >= az && band.contains(ay) {
        if sample.y > 0.0 {
            Face::PosY
        } else {
            Face::NegY
        }
    } else if ax >= ay && ax >= az && band.contains(ax) {
        if sample.x > 0.0 {
            Face::PosX
        } else {
            Face::NegX
        }
    } else {
        // Flat on Z, or no axis in band
        Face::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const G: f32 = 9.81;

    fn face_of(x: f32, y: f32, z: f32) -> Face {
        classify(&AccelerationSample::new(x, y, z), &GravityBand::DEFAULT)
    }

    #[test]
    fn test_side_faces() {
        assert_eq!(face_of(0.2, -G, 0.3), Face::NegY);
        assert_eq!(face_of(0.2, G, 0.3), Face::PosY);
        assert_eq!(face_of(G, 0.4, -0.1), Face::PosX);
        assert_eq!(face_of(-G, 0.4, -0.1), Face::NegX);
    }

    #[test]
    fn test_flat_is_none() {
        assert_eq!(face_of(0.1, 0.2, G), Face::None);
        assert_eq!(face_of(0.1, 0.2, -G), Face::None);
    }

    #[test]
    fn test_band_edges_inclusive() {
        assert_eq!(face_of(0.0, 9.0, 0.0), Face::PosY);
        assert_eq!(face_of(0.0, 11.5, 0.0), Face::PosY);
        assert_eq!(face_of(0.0, 8.99, 0.0), Face::None);
        assert_eq!(face_of(0.0, 11.51, 0.0), Face::None);
    }

    #[test]
    fn test_tie_prefers_y_over_x() {
        assert_eq!(face_of(10.0, 10.0, 0.0), Face::PosY);
        assert_eq!(face_of(-10.0, -10.0, 0.0), Face::NegY);
    }

    #[test]
    fn test_tie_prefers_x_over_z() {
        assert_eq!(face_of(10.0, 0.0, 10.0), Face::PosX);
    }

    #[test]
    fn test_dominant_out_of_band_does_not_fall_back() {
        // Y dominates but is too strong; X is in band but not dominant
        assert_eq!(face_of(10.0, 12.5, 0.0), Face::None);
    }

    #[test]
    fn test_nan_is_none() {
        assert_eq!(face_of(f32::NAN, f32::NAN, f32::NAN), Face::None);
        // A NaN axis poisons every dominance comparison
        assert_eq!(face_of(f32::NAN, G, 0.0), Face::None);
    }

    fn out_of_band() -> impl Strategy<Value = f32> {
        prop_oneof![0.0f32..8.99, 11.51f32..40.0]
    }

    proptest! {
        #[test]
        fn test_out_of_band_dominant_is_none(
            dominant in out_of_band(),
            axis in 0usize..3,
            negative in any::<bool>(),
            a in 0.0f32..1.0,
            b in 0.0f32..1.0,
        ) {
            // Minor axes are strictly smaller than the dominant one
            let d = if negative { -dominant } else { dominant };
            let (m1, m2) = (a * dominant * 0.99, b * dominant * 0.99);
            let sample = match axis {
                0 => AccelerationSample::new(d, m1, m2),
                1 => AccelerationSample::new(m1, d, m2),
                _ => AccelerationSample::new(m1, m2, d),
            };
            prop_assert_eq!(classify(&sample, &GravityBand::DEFAULT), Face::None);
        }
    }
}
