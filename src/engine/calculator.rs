// ============================================================================
// Price Calculator
// Prices catalogue items by weight and renders the amounts in words
// ============================================================================

use super::errors::PricingError;
use crate::domain::{ItemId, Metal, PriceQuote, PricingConfig};
use crate::numeric::{Amount, NumericError};
use rust_decimal::Decimal;

/// Grams covered by a quoted metal rate
const RATE_UNIT_GRAMS: Decimal = Decimal::TEN;

/// Quotes items against a validated configuration snapshot.
///
/// # Pricing rules
/// ```text
/// base rate     = metal price per 10 g × purity / 100
/// rate applied  = base rate + add-on price               (per 10 g)
/// total price   = weight × rate applied / 10 + making charge
/// purchase rate = base rate / 10 × weight + handling charge
/// ```
///
/// # Example
/// ```
/// use jewellery_pricing::prelude::*;
/// use rust_decimal::Decimal;
///
/// let calculator = PriceCalculator::new(PricingConfig::default()).unwrap();
/// let quote = calculator
///     .quote(Metal::Gold, &ItemId::new("1"), Decimal::from(10))
///     .unwrap();
/// assert_eq!(quote.total_rupees().unwrap(), 113_888);
/// ```
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    config: PricingConfig,
}

impl PriceCalculator {
    /// Create a calculator, validating the configuration first
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate().map_err(PricingError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// The configuration this calculator prices against
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price `weight_grams` of a catalogue item.
    ///
    /// # Errors
    /// - `InvalidWeight` if the weight is zero or negative
    /// - `UnknownItem` if the id is not in the metal's catalogue
    /// - `Numeric` on overflow
    pub fn quote(
        &self,
        metal: Metal,
        item_id: &ItemId,
        weight_grams: Decimal,
    ) -> Result<PriceQuote, PricingError> {
        if weight_grams <= Decimal::ZERO {
            return Err(PricingError::InvalidWeight);
        }

        let item = self
            .config
            .find_item(metal, item_id)
            .ok_or_else(|| PricingError::UnknownItem {
                metal,
                id: item_id.clone(),
            })?;

        let price_per_10g = self.config.base_rates.price_per_10g(metal);
        let base_rate = price_per_10g
            .checked_mul(item.purity)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(NumericError::Overflow)?;

        let rate_applied = base_rate
            .checked_add(item.add_on_price)
            .ok_or(NumericError::Overflow)?;

        let total_price = weight_grams
            .checked_mul(rate_applied)
            .and_then(|v| v.checked_div(RATE_UNIT_GRAMS))
            .and_then(|v| v.checked_add(item.making_charge))
            .ok_or(NumericError::Overflow)?;

        let purchase_rate = base_rate
            .checked_div(RATE_UNIT_GRAMS)
            .and_then(|v| v.checked_mul(weight_grams))
            .and_then(|v| v.checked_add(self.config.purchase_handling_charge))
            .ok_or(NumericError::Overflow)?;

        let quote = PriceQuote::new(
            metal,
            item,
            weight_grams,
            Amount::from_decimal(rate_applied)?,
            Amount::from_decimal(total_price)?,
            Amount::from_decimal(purchase_rate)?,
        )?;

        tracing::debug!(
            %metal,
            item = %item.id,
            weight = %weight_grams,
            total = %quote.total_price,
            "computed price quote"
        );

        Ok(quote)
    }
}
