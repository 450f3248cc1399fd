//! Chance to roll a threshold on a single d6

use super::{DIE_FACES, IMPOSSIBLE_ROLL};

/// Probability of rolling `threshold` or higher on a fair d6
///
/// - `0` means no roll is needed and returns exactly `1.0`
/// - `1..=6` returns `(7 - threshold) / 6`
/// - `7` and above can never be rolled and return `0.0`
pub fn success_probability(threshold: u32) -> f64 {
    if threshold < 1 {
        return 1.0;
    }
    if threshold >= IMPOSSIBLE_ROLL {
        return 0.0;
    }
    (IMPOSSIBLE_ROLL - threshold) as f64 / DIE_FACES as f64
}
