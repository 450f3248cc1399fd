//! DiceExpression - A single constant or random dice term

use super::DiceError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One term of a dice expression, e.g. `3`, `D6` or `2D6`
///
/// Random terms are uniform over `1..=faces` per die. Every value held by an
/// expression is at least 1; the parser and constructors reject zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiceExpression {
    /// A fixed value
    Constant(u32),
    /// `count` dice with `faces` sides each
    Random { count: u32, faces: u32 },
}

impl DiceExpression {
    /// Create a constant term
    pub fn constant(value: u32) -> Result<Self, DiceError> {
        if value == 0 {
            return Err(DiceError::malformed("0", "constant must be at least 1"));
        }
        Ok(DiceExpression::Constant(value))
    }

    /// Create a single die with `faces` sides
    pub fn die(faces: u32) -> Result<Self, DiceError> {
        Self::dice(1, faces)
    }

    /// Create `count` dice with `faces` sides each
    pub fn dice(count: u32, faces: u32) -> Result<Self, DiceError> {
        if count == 0 {
            return Err(DiceError::malformed(
                &format!("{}d{}", count, faces),
                "dice count must be at least 1",
            ));
        }
        if faces == 0 {
            return Err(DiceError::malformed(
                &format!("{}d{}", count, faces),
                "die must have at least 1 face",
            ));
        }
        Ok(DiceExpression::Random { count, faces })
    }

    /// Whether this term needs a roll
    pub fn is_random(&self) -> bool {
        matches!(self, DiceExpression::Random { .. })
    }

    /// Roll the term. Constants return themselves without touching the RNG.
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        match *self {
            DiceExpression::Constant(value) => value,
            DiceExpression::Random { count, faces } => (0..count)
                .map(|_| rng.gen_range(1..=faces))
                .fold(0u32, |total, roll| total.saturating_add(roll)),
        }
    }

    /// Mean of the term: `count * (faces + 1) / 2` for dice, the value itself otherwise
    pub fn expected_value(&self) -> f64 {
        match *self {
            DiceExpression::Constant(value) => value as f64,
            DiceExpression::Random { count, faces } => count as f64 * (faces as f64 + 1.0) / 2.0,
        }
    }

    /// Smallest value the term can produce
    pub fn min_value(&self) -> u32 {
        match *self {
            DiceExpression::Constant(value) => value,
            DiceExpression::Random { count, .. } => count,
        }
    }

    /// Largest value the term can produce
    pub fn max_value(&self) -> u32 {
        match *self {
            DiceExpression::Constant(value) => value,
            DiceExpression::Random { count, faces } => count.saturating_mul(faces),
        }
    }
}

/// Parse a non-empty run of ASCII digits
fn parse_digits(part: &str, token: &str, reason: &'static str) -> Result<u32, DiceError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DiceError::malformed(token, reason));
    }
    part.parse::<u32>()
        .map_err(|_| DiceError::malformed(token, "value out of range"))
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();

        let parsed = match token.split_once('d') {
            None => {
                let value = parse_digits(&token, s, "expected a number or a dice term like d6")?;
                Self::constant(value)
            }
            Some((count, faces)) => {
                let count = if count.is_empty() {
                    1
                } else {
                    parse_digits(count, s, "dice count must be a number")?
                };
                let faces = parse_digits(faces, s, "die faces must be a number")?;
                Self::dice(count, faces)
            }
        };

        // Report the caller's token rather than the normalized one
        parsed.map_err(|e| match e {
            DiceError::MalformedToken { reason, .. } => DiceError::malformed(s, reason),
        })
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DiceExpression::Constant(value) => write!(f, "{}", value),
            DiceExpression::Random { count: 1, faces } => write!(f, "D{}", faces),
            DiceExpression::Random { count, faces } => write!(f, "{}D{}", count, faces),
        }
    }
}
