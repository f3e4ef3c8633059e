// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod quote;

pub use config::{BaseMetalRates, ItemConfig, ItemId, Metal, PricingConfig};
pub use quote::{PriceQuote, QuoteWords};
