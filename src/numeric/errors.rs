// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or converting decimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a valid decimal number; carries the rejected input
    InvalidFormat(String),
    /// A NaN or infinite float was given to an exact conversion
    NonFinite,
    /// Conversion could not reproduce the input value exactly
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat(input) => {
                write!(f, "the input string {input:?} is not a valid decimal number")
            },
            NumericError::NonFinite => {
                write!(f, "NaN and infinite values have no exact decimal form")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion could not reproduce the value exactly"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidFormat("1<<27".to_string()).to_string(),
            "the input string \"1<<27\" is not a valid decimal number"
        );
        assert_eq!(
            NumericError::NonFinite.to_string(),
            "NaN and infinite values have no exact decimal form"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::NonFinite, NumericError::NonFinite);
        assert_ne!(
            NumericError::NonFinite,
            NumericError::InvalidFormat(String::new())
        );
    }
}
