// ============================================================================
// Numeric Errors
// Error types for monetary amount conversion and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or rounding a monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Amount is below zero
    Negative,
    /// Amount is NaN or infinite
    NonFinite,
    /// Result does not fit the target representation
    Overflow,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Negative => write!(f, "negative amount: amounts must be zero or more"),
            NumericError::NonFinite => write!(f, "non-finite amount: NaN and infinity are rejected"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
