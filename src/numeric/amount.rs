// ============================================================================
// Monetary Amount
// Non-negative rupee amounts with arithmetic rounding to whole rupees
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-negative, finite amount of rupees.
///
/// Internally backed by `rust_decimal::Decimal`, so values computed from
/// rates and weights keep their paise until they are explicitly rounded.
/// Construction is the only place where domain checks happen: once an
/// `Amount` exists it is known to be finite and `>= 0`.
///
/// # Example
/// ```
/// use jewellery_pricing::numeric::Amount;
///
/// let amount = Amount::from_f64(1234.5).unwrap();
/// assert_eq!(amount.round_to_rupees().unwrap(), 1235);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero rupees
    pub const ZERO: Self = Self(Decimal::ZERO);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a whole number of rupees.
    #[inline]
    pub fn from_integer(rupees: u64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// Create from a decimal value.
    ///
    /// # Errors
    /// Returns `Negative` if the value is below zero.
    #[inline]
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        if value.is_zero() {
            // Drops the sign of a negative zero.
            return Ok(Self::ZERO);
        }
        if value.is_sign_negative() {
            return Err(NumericError::Negative);
        }
        Ok(Self(value))
    }

    /// Create from a floating-point value.
    ///
    /// The conversion keeps the full precision of the `f64` (up to 28
    /// significant digits) so that rounding afterwards gives the same result
    /// as rounding the float itself.
    ///
    /// # Errors
    /// - `NonFinite` for NaN or infinity
    /// - `Negative` for values below zero
    /// - `Overflow` for values outside the decimal range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        if value < 0.0 {
            return Err(NumericError::Negative);
        }
        let decimal = Decimal::from_f64_retain(value).ok_or(NumericError::Overflow)?;
        Self::from_decimal(decimal)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying decimal value.
    #[inline]
    pub const fn to_decimal(self) -> Decimal {
        self.0
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to the nearest whole rupee, ties away from zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value does not fit in a `u64`.
    pub fn round_to_rupees(self) -> NumericResult<u64> {
        self.0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .ok_or(NumericError::Overflow)
    }

    /// Round to `dp` decimal places, ties away from zero.
    #[inline]
    pub fn round_dp(self, dp: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked multiplication by a non-negative factor.
    ///
    /// # Errors
    /// - `Negative` if the factor is below zero
    /// - `Overflow` if the result is out of range
    #[inline]
    pub fn checked_mul(self, factor: Decimal) -> NumericResult<Self> {
        let product = self.0.checked_mul(factor).ok_or(NumericError::Overflow)?;
        Self::from_decimal(product)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<u64> for Amount {
    #[inline]
    fn from(rupees: u64) -> Self {
        Self::from_integer(rupees)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal) -> NumericResult<Self> {
        Self::from_decimal(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = NumericError;

    #[inline]
    fn try_from(value: f64) -> NumericResult<Self> {
        Self::from_f64(value)
    }
}

impl From<Amount> for Decimal {
    #[inline]
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Amount {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "1234" -> 1234
    /// - " 99.50 " -> 99.50
    /// - "-1" -> `Negative`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let value = Decimal::from_str(s).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
