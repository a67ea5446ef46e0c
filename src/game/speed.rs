//! Movement Interval Curve
//!
//! Maps the current score to the movement-commit interval. Pure and
//! deterministic; the server-side snapshot and the client scheduler share
//! this function so both sides agree on the cadence for a given score.

/// Movement interval at score 0, in milliseconds.
pub const BASE_INTERVAL_MS: u64 = 400;

/// Hard floor below which the game stays playable, in milliseconds.
pub const MIN_INTERVAL_MS: u64 = 50;

/// Points per speed tier.
pub const POINTS_PER_TIER: u32 = 5;

/// Movement interval for `score`, in milliseconds.
///
/// Step function: every [`POINTS_PER_TIER`] points halves the interval,
/// clamped at [`MIN_INTERVAL_MS`]. Monotone non-increasing in `score`,
/// exactly [`BASE_INTERVAL_MS`] at score 0.
pub fn interval_ms(score: u32) -> u64 {
    let tier = score / POINTS_PER_TIER;
    BASE_INTERVAL_MS
        .checked_shr(tier)
        .unwrap_or(0)
        .max(MIN_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_interval_at_zero() {
        assert_eq!(interval_ms(0), BASE_INTERVAL_MS);
    }

    #[test]
    fn test_tier_boundaries() {
        // Tier changes on every fifth point.
        assert_eq!(interval_ms(4), 400);
        assert_eq!(interval_ms(5), 200);
        assert_eq!(interval_ms(9), 200);
        assert_eq!(interval_ms(10), 100);
        assert_eq!(interval_ms(14), 100);
        assert_eq!(interval_ms(15), 50);
    }

    #[test]
    fn test_floor_holds_forever() {
        for score in [15, 20, 100, 1_000, u32::MAX] {
            assert_eq!(interval_ms(score), MIN_INTERVAL_MS);
        }
    }

    proptest! {
        #[test]
        fn prop_monotone_non_increasing(score in 0u32..10_000) {
            prop_assert!(interval_ms(score + 1) <= interval_ms(score));
        }

        #[test]
        fn prop_bounded(score in 0u32..) {
            let interval = interval_ms(score);
            prop_assert!(interval >= MIN_INTERVAL_MS);
            prop_assert!(interval <= BASE_INTERVAL_MS);
        }
    }
}
