//! Stat token cleaning - datasheet strings to integers

use thiserror::Error;

/// Text used by the dataset for "not applicable"
pub const NOT_APPLICABLE: &str = "N/A";

/// Stat token parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),
}

/// Turn a datasheet stat token into an integer
///
/// `"N/A"` becomes 1, every `+`, `"` and `-` is dropped, and whatever is left
/// is read as digits (nothing left reads as 0). So `"3+"` is 3, `"12\""` is
/// 12, `"-1"` is 1 and `"-"` is 0.
pub fn clean(token: &str) -> Result<u32, StatError> {
    let trimmed = token.trim();
    if trimmed == NOT_APPLICABLE {
        return Ok(1);
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '+' | '"' | '-'))
        .collect();
    let digits = digits.trim();

    if digits.is_empty() {
        return Ok(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StatError::NotNumeric(token.to_string()));
    }
    digits
        .parse()
        .map_err(|_| StatError::NotNumeric(token.to_string()))
}
