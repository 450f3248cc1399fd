//! Probability math - d6 success chances and the strength vs toughness table

mod roll;
mod wound;

pub use roll::success_probability;
pub use wound::wound_threshold;

/// Faces on the dice used for every hit, wound and save roll
pub const DIE_FACES: u32 = 6;

/// Threshold that can never be rolled on a d6 (a 7+ save is no save)
pub const IMPOSSIBLE_ROLL: u32 = DIE_FACES + 1;
