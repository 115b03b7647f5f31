//! Piezo tone generation
//!
//! A piezo sounds a square wave: the PWM slice runs at the note frequency
//! with a 50% duty cycle, and silence is a zero compare value. The slice
//! counts `top + 1` cycles of `sys_clk / divider` per period, so the divider
//! is the smallest one that brings `top` into 16 bits.

use tilt_core::traits::ToneOutput;

/// Largest integer clock divider
const MAX_DIVIDER: u32 = 255;

/// Register values for one tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmSettings {
    /// Integer clock divider (1..=255)
    pub divider: u8,
    /// Counter wrap value
    pub top: u16,
    /// Compare value for a 50% duty cycle
    pub compare: u16,
}

/// Compute PWM settings for a frequency
///
/// Returns `None` for 0 Hz and for frequencies the slice cannot reach.
pub fn settings_for(sys_clk_hz: u32, frequency_hz: u16) -> Option<PwmSettings> {
    if frequency_hz == 0 {
        return None;
    }

    let frequency_hz = frequency_hz as u32;
    (1..=MAX_DIVIDER).find_map(|divider| {
        let period = sys_clk_hz / (divider * frequency_hz);
        if !(2..=u16::MAX as u32 + 1).contains(&period) {
            return None;
        }
        Some(PwmSettings {
            divider: divider as u8,
            top: (period - 1) as u16,
            compare: (period / 2) as u16,
        })
    })
}

/// A PWM slice driving the piezo
///
/// `None` silences the output.
pub trait PwmSlice {
    /// Apply divider, period and duty for a tone, or hold the output low
    fn configure(&mut self, settings: Option<PwmSettings>);
}

/// Piezo buzzer on a PWM slice
pub struct Piezo<S> {
    slice: S,
    sys_clk_hz: u32,
    frequency_hz: u16,
}

impl<S: PwmSlice> Piezo<S> {
    /// Wrap a slice and silence it
    pub fn new(mut slice: S, sys_clk_hz: u32) -> Self {
        slice.configure(None);
        Self {
            slice,
            sys_clk_hz,
            frequency_hz: 0,
        }
    }

    /// Frequency currently sounding (0 = silent)
    pub fn frequency_hz(&self) -> u16 {
        self.frequency_hz
    }
}

impl<S: PwmSlice> ToneOutput for Piezo<S> {
    fn set_frequency(&mut self, frequency_hz: u16) {
        if frequency_hz == self.frequency_hz {
            return;
        }
        self.frequency_hz = frequency_hz;
        self.slice
            .configure(settings_for(self.sys_clk_hz, frequency_hz));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt_core::alarm::MELODY;

    const SYS_CLK: u32 = 125_000_000;

    #[derive(Default)]
    struct RecordingSlice {
        applied: Vec<Option<PwmSettings>>,
    }

    impl PwmSlice for &mut RecordingSlice {
        fn configure(&mut self, settings: Option<PwmSettings>) {
            self.applied.push(settings);
        }
    }

    #[test]
    fn test_zero_is_silence() {
        assert_eq!(settings_for(SYS_CLK, 0), None);
    }

    #[test]
    fn test_a4() {
        // 125 MHz / (5 * 440 Hz) = 56818
        let s = settings_for(SYS_CLK, 440).unwrap();
        assert_eq!(s.divider, 5);
        assert_eq!(s.top, 56_817);
        assert_eq!(s.compare, 28_409);
    }

    #[test]
    fn test_melody_within_one_percent() {
        for note in MELODY.iter() {
            let s = settings_for(SYS_CLK, note.frequency_hz).unwrap();
            let actual = SYS_CLK as f32 / (s.divider as f32 * (s.top as f32 + 1.0));
            let error = (actual - note.frequency_hz as f32).abs() / note.frequency_hz as f32;
            assert!(error < 0.01, "{} Hz -> {} Hz", note.frequency_hz, actual);
            assert_eq!(s.compare as u32, (s.top as u32 + 1) / 2);
        }
    }

    #[test]
    fn test_unreachable_frequency() {
        // Needs a divider above 255
        assert_eq!(settings_for(SYS_CLK, 5), None);
    }

    #[test]
    fn test_piezo_skips_redundant_updates() {
        let mut slice = RecordingSlice::default();
        {
            let mut piezo = Piezo::new(&mut slice, SYS_CLK);
            piezo.set_frequency(659);
            piezo.set_frequency(659);
            assert_eq!(piezo.frequency_hz(), 659);
            piezo.silence();
            piezo.silence();
        }
        assert_eq!(slice.applied.len(), 3);
        assert_eq!(slice.applied[0], None);
        assert_eq!(slice.applied[1], settings_for(SYS_CLK, 659));
        assert_eq!(slice.applied[2], None);
    }
}
