//! Dice expressions - parsing, sampling and expected values of datasheet dice

mod compound;
mod expression;
mod pool;

pub use compound::CompoundDice;
pub use expression::DiceExpression;
pub use pool::ExpectedRoll;

use thiserror::Error;

/// Dice token parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("Malformed dice token '{token}': {reason}")]
    MalformedToken { token: String, reason: &'static str },
}

impl DiceError {
    pub(crate) fn malformed(token: &str, reason: &'static str) -> Self {
        DiceError::MalformedToken {
            token: token.to_string(),
            reason,
        }
    }
}
