// ============================================================================
// Pricing Errors
// Error types for quoting and configuration management
// ============================================================================

use crate::domain::{ItemId, Metal};
use crate::numeric::NumericError;
use std::fmt;
use std::io;

/// Errors raised by the calculator and the configuration store.
#[derive(Debug)]
pub enum PricingError {
    /// No item with this id in the metal's catalogue
    UnknownItem { metal: Metal, id: ItemId },
    /// Weight must be greater than zero
    InvalidWeight,
    /// Configuration failed validation
    InvalidConfig(String),
    /// Arithmetic or rounding failed
    Numeric(NumericError),
    /// Configuration file could not be read or written
    Io(io::Error),
    /// Configuration JSON is malformed or incomplete
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::UnknownItem { metal, id } => {
                write!(f, "unknown {} item '{}'", metal, id)
            },
            PricingError::InvalidWeight => write!(f, "weight must be greater than zero"),
            PricingError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            PricingError::Numeric(err) => write!(f, "numeric error: {}", err),
            PricingError::Io(err) => write!(f, "configuration file error: {}", err),
            #[cfg(feature = "serde")]
            PricingError::Json(err) => write!(f, "invalid configuration file format: {}", err),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::Numeric(err) => Some(err),
            PricingError::Io(err) => Some(err),
            #[cfg(feature = "serde")]
            PricingError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for PricingError {
    fn from(err: NumericError) -> Self {
        PricingError::Numeric(err)
    }
}

impl From<io::Error> for PricingError {
    fn from(err: io::Error) -> Self {
        PricingError::Io(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        PricingError::Json(err)
    }
}
