// ============================================================================
// Jewellery Pricing Library
// Gold and silver price quotes with amounts in Indian-English and Hindi words
// ============================================================================

//! # Jewellery Pricing
//!
//! Prices gold and silver items by weight and renders every amount in words,
//! the way it is written on an Indian shop receipt.
//!
//! ## Features
//!
//! - **Amount in words** in Indian-English and Hindi (Devanagari), both using
//!   thousand / lakh / crore grouping
//! - **One grouping driver** shared by both languages through the
//!   [`NumeralLexicon`](interfaces::NumeralLexicon) trait
//! - **Decimal arithmetic** for rates, purities and charges
//! - **Validated, shareable configuration** with optional JSON import/export
//!   (feature `serde`)
//!
//! ## Example
//!
//! ```rust
//! use jewellery_pricing::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Amounts are rounded to whole rupees before rendering
//! let words = format_amount(Some(1234.4)).unwrap();
//! assert_eq!(words.english, "One Thousand Two Hundred Thirty Four / Rupees");
//! assert_eq!(words.hindi, "एक हज़ार दो सौ चौंतीस / रुपये");
//!
//! // Quote 10 g of the default 916 KDM gold
//! let store = ConfigStore::default();
//! let quote = store
//!     .calculator()
//!     .unwrap()
//!     .quote(Metal::Gold, &ItemId::new("1"), Decimal::from(10))
//!     .unwrap();
//! println!("{}", quote.words.total_price.hindi);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod words;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BaseMetalRates, ItemConfig, ItemId, Metal, PriceQuote, PricingConfig, QuoteWords,
    };
    pub use crate::engine::{ConfigStore, PriceCalculator, PricingError};
    pub use crate::interfaces::{GroupUnit, NumeralLexicon};
    pub use crate::numeric::{Amount, NumericError, NumericResult};
    pub use crate::words::{format_amount, spell_out, AmountInWords, Hindi, IndianEnglish};
}
