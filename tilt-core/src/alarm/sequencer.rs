//! Alarm sequencer
//!
//! Runs the blink clock and the melody clock side by side. Each clock
//! re-anchors to the tick that advanced it.

use super::melody::Note;
use crate::time::{has_elapsed, Millis};

/// Output changes produced by one sequencer step
///
/// `None` means "leave that output as it is".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmOutput {
    /// New indicator level
    pub indicator: Option<bool>,
    /// New tone frequency (0 = silence)
    pub tone_hz: Option<u16>,
}

impl AlarmOutput {
    /// Check if nothing changed
    pub fn is_empty(&self) -> bool {
        self.indicator.is_none() && self.tone_hz.is_none()
    }
}

/// Looping melody and indicator blink
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmSequencer {
    melody: &'static [Note],
    note_index: usize,
    note_start_ms: Millis,
    blink_period_ms: u32,
    blink_ms: Millis,
    blink_level: bool,
}

impl AlarmSequencer {
    /// Start both clocks at `now`
    ///
    /// Returns the sequencer and the entry outputs: indicator off and the
    /// first note's frequency.
    pub fn start(melody: &'static [Note], blink_period_ms: u32, now: Millis) -> (Self, AlarmOutput) {
        let sequencer = Self {
            melody,
            note_index: 0,
            note_start_ms: now,
            blink_period_ms,
            blink_ms: now,
            blink_level: false,
        };
        let output = AlarmOutput {
            indicator: Some(false),
            tone_hz: Some(sequencer.current_frequency()),
        };
        (sequencer, output)
    }

    /// Advance both clocks
    pub fn tick(&mut self, now: Millis) -> AlarmOutput {
        AlarmOutput {
            indicator: self.tick_blink(now),
            tone_hz: self.tick_melody(now),
        }
    }

    fn tick_blink(&mut self, now: Millis) -> Option<bool> {
        if !has_elapsed(now, self.blink_ms, self.blink_period_ms) {
            return None;
        }
        self.blink_ms = now;
        self.blink_level = !self.blink_level;
        Some(self.blink_level)
    }

    fn tick_melody(&mut self, now: Millis) -> Option<u16> {
        let note = self.melody.get(self.note_index)?;
        if !has_elapsed(now, self.note_start_ms, note.duration_ms as u32) {
            return None;
        }
        self.note_index = (self.note_index + 1) % self.melody.len();
        self.note_start_ms = now;
        Some(self.current_frequency())
    }

    fn current_frequency(&self) -> u16 {
        self.melody
            .get(self.note_index)
            .map(|n| n.frequency_hz)
            .unwrap_or(0)
    }

    /// Index of the note currently sounding
    pub fn note_index(&self) -> usize {
        self.note_index
    }

    /// Current indicator level
    pub fn blink_level(&self) -> bool {
        self.blink_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::MELODY;

    static SHORT: [Note; 3] = [Note::new(100, 200), Note::new(0, 100), Note::new(300, 50)];

    #[test]
    fn test_entry_output() {
        let (seq, out) = AlarmSequencer::start(&MELODY, 1000, 5000);
        assert_eq!(out.indicator, Some(false));
        assert_eq!(out.tone_hz, Some(659));
        assert_eq!(seq.note_index(), 0);
    }

    #[test]
    fn test_blink_toggles_every_period() {
        let (mut seq, _) = AlarmSequencer::start(&MELODY, 1000, 0);
        let mut toggles = Vec::new();
        for t in (50..=3000).step_by(50) {
            if let Some(level) = seq.tick(t).indicator {
                toggles.push((t, level));
            }
        }
        assert_eq!(toggles, [(1000, true), (2000, false), (3000, true)]);
    }

    #[test]
    fn test_melody_advances_and_wraps() {
        let (mut seq, _) = AlarmSequencer::start(&SHORT, 1000, 0);
        assert_eq!(seq.tick(199).tone_hz, None);
        assert_eq!(seq.tick(200).tone_hz, Some(0)); // rest
        assert_eq!(seq.tick(300).tone_hz, Some(300));
        assert_eq!(seq.tick(350).tone_hz, Some(100)); // wrapped
        assert_eq!(seq.note_index(), 0);
    }

    #[test]
    fn test_full_melody_cycles_repeatedly() {
        let (mut seq, _) = AlarmSequencer::start(&MELODY, 1000, 0);
        let mut played = Vec::new();
        let mut t = 0;
        while played.len() < MELODY.len() * 2 {
            t += 50;
            if let Some(hz) = seq.tick(t).tone_hz {
                played.push(hz);
            }
        }
        let expected: Vec<u16> = MELODY
            .iter()
            .cycle()
            .skip(1)
            .take(MELODY.len() * 2)
            .map(|n| n.frequency_hz)
            .collect();
        assert_eq!(played, expected);
    }

    #[test]
    fn test_blink_independent_of_melody() {
        // Long notes must not stretch the blink period
        static SLOW: [Note; 1] = [Note::new(440, 60_000)];
        let (mut seq, _) = AlarmSequencer::start(&SLOW, 1000, 0);
        let mut toggles = 0;
        for t in (50..=10_000).step_by(50) {
            let out = seq.tick(t);
            assert_eq!(out.tone_hz, None);
            if out.indicator.is_some() {
                toggles += 1;
            }
        }
        assert_eq!(toggles, 10);
    }

    #[test]
    fn test_clocks_across_wrap() {
        let start = u32::MAX - 500;
        let (mut seq, _) = AlarmSequencer::start(&MELODY, 1000, start);
        assert_eq!(seq.tick(start.wrapping_add(150)).tone_hz, Some(587));
        assert_eq!(seq.tick(start.wrapping_add(1000)).indicator, Some(true));
    }
}
