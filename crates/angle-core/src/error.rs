//! Error types for angle conversion.

use thiserror::Error;

/// Errors that can occur while converting or evaluating an angle.
///
/// Trigonometric singularities are not errors; they are reported through
/// [`TrigValue::Undefined`](crate::trig::TrigValue::Undefined).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AngleError {
    /// The unit key is not part of the catalog.
    #[error("Unknown angle unit: {0}")]
    UnknownUnit(String),

    /// The value is not a finite number.
    #[error("Invalid input value: {0}")]
    InvalidInput(String),
}

impl AngleError {
    /// Returns true for errors caused by the caller's value rather than its unit keys.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AngleError::InvalidInput(_))
    }
}
