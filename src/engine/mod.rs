// ============================================================================
// Engine Module
// Contains the pricing business logic and configuration management
// ============================================================================

mod calculator;
mod errors;
mod store;

pub use calculator::PriceCalculator;
pub use errors::PricingError;
pub use store::ConfigStore;
