//! Events that trigger state transitions

use crate::orientation::Face;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A face was detected while idle
    FaceDetected(Face),
    /// The device was held on a different face for the full debounce window
    ReorientationConfirmed,
    /// The countdown ran out
    CountdownExpired,
}
