//! Alarm melody

/// One melody step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Tone frequency in Hz (0 = rest)
    pub frequency_hz: u16,
    /// How long the note sounds (ms)
    pub duration_ms: u16,
}

impl Note {
    /// A note of `frequency_hz` (0 for a rest) held for `duration_ms`
    pub const fn new(frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Stock alarm melody, looped while the alarm is active
pub const MELODY: [Note; 13] = [
    Note::new(659, 150),
    Note::new(587, 150),
    Note::new(370, 300),
    Note::new(415, 300),
    Note::new(554, 150),
    Note::new(494, 150),
    Note::new(294, 300),
    Note::new(330, 300),
    Note::new(494, 150),
    Note::new(440, 150),
    Note::new(277, 300),
    Note::new(330, 300),
    Note::new(440, 600),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melody_shape() {
        assert_eq!(MELODY.len(), 13);
        assert_eq!(MELODY[0].frequency_hz, 659);
        assert!(MELODY.iter().all(|n| n.duration_ms > 0 && n.frequency_hz != 0));
        let total: u32 = MELODY.iter().map(|n| n.duration_ms as u32).sum();
        assert_eq!(total, 3300);
    }
}
