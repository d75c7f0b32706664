//! Validation error model.

use thiserror::Error;

/// Result type used across the validation layer.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A quantity or attribute failed validation.
///
/// Variants split into two classes: [`ValidationError::NotAnInteger`] is a
/// type-class failure (the input was not an integer at all), everything else is
/// a value-class failure (an integer, but not an acceptable one).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was not an integer (float, string, bool, null, ...).
    #[error("value must be of type integer (got {0})")]
    NotAnInteger(String),

    /// The input was a negative integer.
    #[error("value must be non-negative (got {0})")]
    Negative(i64),

    /// The input exceeded the caller-provided upper bound.
    #[error("value must be less than or equal to {bound} (got {value})")]
    ExceedsBound { value: u64, bound: u64 },

    /// A domain-specific range check failed (e.g. unsupported HDD rpm).
    #[error("no such configuration available: {0}")]
    Unavailable(String),

    /// Adding the value would overflow the counter.
    #[error("adding {value} to {current} would overflow")]
    Overflow { value: u64, current: u64 },
}

impl ValidationError {
    pub fn not_an_integer(got: impl Into<String>) -> Self {
        Self::NotAnInteger(got.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// `true` for type-class failures.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NotAnInteger(_))
    }

    /// `true` for value-class failures.
    pub fn is_value_error(&self) -> bool {
        !self.is_type_error()
    }
}
