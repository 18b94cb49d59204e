//! Parsing of user-entered angle values.

use crate::error::AngleError;

/// Parse text typed by a user into a finite number.
///
/// Accepts surrounding whitespace, an optional sign, digits with an optional
/// fraction, and an optional exponent (`"180"`, `" -1.5e3 "`, `".5"`).
/// Rejects blank text, words, and the textual `inf`/`nan` forms that
/// `f64::from_str` would otherwise accept.
///
/// # Errors
///
/// Returns [`AngleError::InvalidInput`] if the text is not a finite number.
pub fn parse_input(text: &str) -> Result<f64, AngleError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AngleError::InvalidInput("empty input".to_string()));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return Err(AngleError::InvalidInput(trimmed.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AngleError::InvalidInput(trimmed.to_string())),
    }
}
