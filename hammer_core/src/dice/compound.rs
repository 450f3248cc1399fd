//! CompoundDice - `base[+addition]` dice values as printed on datasheets

use super::{DiceError, DiceExpression};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A datasheet dice value: a base term plus an optional added term
///
/// Covers every attacks/damage value the dataset uses, e.g. `2`, `D6`,
/// `D6+1` or `D3+3`. Serializes as its rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompoundDice {
    base: DiceExpression,
    addition: Option<DiceExpression>,
}

impl CompoundDice {
    /// Combine a base term with an optional added term
    pub fn new(base: DiceExpression, addition: Option<DiceExpression>) -> Self {
        CompoundDice { base, addition }
    }

    /// The left-hand term
    pub fn base(&self) -> DiceExpression {
        self.base
    }

    /// The right-hand term, if any
    pub fn addition(&self) -> Option<DiceExpression> {
        self.addition
    }

    /// Whether any part of the value needs a roll
    pub fn is_random(&self) -> bool {
        self.base.is_random() || self.addition.map_or(false, |a| a.is_random())
    }

    /// Roll both terms and add them
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        let base = self.base.sample(rng);
        match self.addition {
            Some(addition) => base.saturating_add(addition.sample(rng)),
            None => base,
        }
    }

    /// `E[base] + E[addition]`
    pub fn expected_value(&self) -> f64 {
        self.base.expected_value() + self.addition.map_or(0.0, |a| a.expected_value())
    }
}

impl From<DiceExpression> for CompoundDice {
    fn from(base: DiceExpression) -> Self {
        CompoundDice::new(base, None)
    }
}

impl FromStr for CompoundDice {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let mut parts = token.split('+');

        // split always yields at least one item
        let base = parts.next().unwrap_or_default();
        let addition = parts.next();
        if parts.next().is_some() {
            return Err(DiceError::malformed(s, "at most one '+' is supported"));
        }

        let base = base.parse::<DiceExpression>().map_err(|e| rebase(e, s))?;
        let addition = addition
            .map(|a| a.parse::<DiceExpression>().map_err(|e| rebase(e, s)))
            .transpose()?;

        Ok(CompoundDice::new(base, addition))
    }
}

/// Report errors against the whole compound token
fn rebase(err: DiceError, token: &str) -> DiceError {
    match err {
        DiceError::MalformedToken { reason, .. } => DiceError::malformed(token, reason),
    }
}

impl TryFrom<String> for CompoundDice {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompoundDice> for String {
    fn from(dice: CompoundDice) -> Self {
        dice.to_string()
    }
}

impl fmt::Display for CompoundDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addition {
            Some(addition) => write!(f, "{}+{}", self.base, addition),
            None => write!(f, "{}", self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_plain_value() {
        let dice: CompoundDice = "2".parse().unwrap();
        assert!(dice.addition().is_none());
        assert!((dice.expected_value() - 2.0).abs() < f64::EPSILON);
        assert_eq!(dice.to_string(), "2");
    }

    #[test]
    fn test_die_plus_constant() {
        let dice: CompoundDice = "d6+2".parse().unwrap();
        assert!((dice.expected_value() - 5.5).abs() < f64::EPSILON);
        assert_eq!(dice.to_string(), "D6+2");
    }

    #[test]
    fn test_case_insensitive() {
        let upper: CompoundDice = "D3+3".parse().unwrap();
        let lower: CompoundDice = "d3+3".parse().unwrap();
        assert_eq!(upper, lower);
        assert!((upper.expected_value() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_two_random_terms() {
        let dice: CompoundDice = "D6+D3".parse().unwrap();
        assert!((dice.expected_value() - 5.5).abs() < f64::EPSILON);
        assert!(dice.is_random());
    }

    #[test]
    fn test_malformed_compound() {
        for token in ["", "+", "d6+", "+3", "d6+1+1", "D6+X", "Melee"] {
            let result = token.parse::<CompoundDice>();
            assert!(
                matches!(result, Err(DiceError::MalformedToken { .. })),
                "token {:?} should be rejected, got {:?}",
                token,
                result
            );
        }
    }

    #[test]
    fn test_round_trip_keeps_expected_value() {
        for token in ["1", "d6", "D6+1", "2d6", "d3+d3", " 12 "] {
            let parsed: CompoundDice = token.parse().unwrap();
            let reparsed: CompoundDice = parsed.to_string().parse().unwrap();
            assert_eq!(parsed, reparsed);
            assert!((parsed.expected_value() - reparsed.expected_value()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let dice: CompoundDice = "d6+1".parse().unwrap();
        let json = serde_json::to_string(&dice).unwrap();
        assert_eq!(json, "\"D6+1\"");

        let back: CompoundDice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dice);

        let bad: Result<CompoundDice, _> = serde_json::from_str("\"D6+\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_sample_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let dice: CompoundDice = "D3+3".parse().unwrap();
        for _ in 0..200 {
            let roll = dice.sample(&mut rng);
            assert!((4..=6).contains(&roll));
        }
    }

    proptest! {
        #[test]
        fn prop_expected_value_is_additive(
            base_faces in 1u32..=20,
            bonus in 1u32..=10,
        ) {
            let token = format!("d{}+{}", base_faces, bonus);
            let dice: CompoundDice = token.parse().unwrap();
            let base = DiceExpression::die(base_faces).unwrap();
            let addition = DiceExpression::constant(bonus).unwrap();
            let expected = base.expected_value() + addition.expected_value();
            prop_assert!((dice.expected_value() - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_expected_value_within_bounds(count in 1u32..=4, faces in 1u32..=12) {
            let dice = CompoundDice::from(DiceExpression::dice(count, faces).unwrap());
            let mean = dice.expected_value();
            prop_assert!(mean >= dice.base().min_value() as f64);
            prop_assert!(mean <= dice.base().max_value() as f64);
        }
    }
}
