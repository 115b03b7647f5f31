//! Millisecond timestamps
//!
//! Timestamps come from a free-running monotonic counter that wraps
//! (u32 milliseconds wraps after ~49.7 days). Every comparison goes
//! through [`elapsed_ms`] so a wrap between two readings is harmless.

/// Millisecond timestamp from a wrapping monotonic clock
pub type Millis = u32;

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wrap
#[inline]
pub const fn elapsed_ms(now: Millis, since: Millis) -> u32 {
    now.wrapping_sub(since)
}

/// Check whether at least `period_ms` has passed since `since`
#[inline]
pub const fn has_elapsed(now: Millis, since: Millis, period_ms: u32) -> bool {
    elapsed_ms(now, since) >= period_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_elapsed_simple() {
        assert_eq!(elapsed_ms(1500, 500), 1000);
        assert!(has_elapsed(1500, 500, 1000));
        assert!(!has_elapsed(1499, 500, 1000));
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let since = u32::MAX - 199;
        let now = 800;
        assert_eq!(elapsed_ms(now, since), 1000);
        assert!(has_elapsed(now, since, 1000));
    }

    proptest! {
        #[test]
        fn test_elapsed_is_offset_invariant(start in any::<u32>(), delta in 0u32..=600_000) {
            let now = start.wrapping_add(delta);
            prop_assert_eq!(elapsed_ms(now, start), delta);
        }
    }
}
