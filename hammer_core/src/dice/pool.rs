//! ExpectedRoll - Expected face counts for a pool of six-sided dice

use crate::probability::DIE_FACES;

/// A pool of d6 throws spread evenly over the six faces
///
/// `throws` may be fractional so the output of one step (e.g. expected hits)
/// can be fed straight into the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedRoll {
    throws: f64,
    faces: [f64; DIE_FACES as usize],
}

impl ExpectedRoll {
    /// Spread `throws` dice evenly over the faces
    pub fn new(throws: f64) -> Self {
        let per_face = throws / DIE_FACES as f64;
        ExpectedRoll {
            throws,
            faces: [per_face; DIE_FACES as usize],
        }
    }

    /// Number of dice thrown
    pub fn throws(&self) -> f64 {
        self.throws
    }

    /// Expected number of dice showing each face, index 0 being a 1
    pub fn faces(&self) -> &[f64; DIE_FACES as usize] {
        &self.faces
    }

    /// Expected number of dice showing `min` or higher
    pub fn successes(&self, min: u32) -> f64 {
        self.faces
            .iter()
            .zip(1u32..)
            .filter(|(_, face)| *face >= min)
            .map(|(count, _)| count)
            .sum()
    }

    /// Expected number of dice showing less than `min`
    pub fn failures(&self, min: u32) -> f64 {
        self.throws - self.successes(min)
    }
}
