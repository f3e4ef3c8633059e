// ============================================================================
// Numeric Module
// Monetary amounts for price calculation and word rendering
// ============================================================================
//
// This module provides:
// - Amount: non-negative rupee amount backed by rust_decimal
// - NumericError: domain and arithmetic errors
//
// Design principles:
// - Out-of-domain input (negative, NaN, infinity) is rejected, never clamped
// - Rounding to whole rupees is half away from zero
// - All fallible operations return Result (no panics)

mod amount;
mod errors;

pub use amount::Amount;
pub use errors::{NumericError, NumericResult};
