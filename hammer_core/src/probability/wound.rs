//! Strength vs toughness wound table

/// Minimum d6 roll needed to wound, from weapon strength against target toughness
///
/// Checked in this order, first match wins:
/// 1. `S == T` wounds on 4+
/// 2. `S >= 2T` wounds on 2+
/// 3. `2S <= T` wounds on 6+
/// 4. `S > T` wounds on 3+
/// 5. `S < T` wounds on 5+
pub fn wound_threshold(strength: u32, toughness: u32) -> u32 {
    let strength = u64::from(strength);
    let toughness = u64::from(toughness);

    if strength == toughness {
        4
    } else if strength >= 2 * toughness {
        2
    } else if 2 * strength <= toughness {
        6
    } else if strength > toughness {
        3
    } else {
        5
    }
}
