// ============================================================================
// Price Quote Domain Model
// ============================================================================

use super::{ItemConfig, ItemId, Metal};
use crate::numeric::{Amount, NumericResult};
use crate::words::AmountInWords;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every priced field of a quote, rendered in words
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteWords {
    pub total_price: AmountInWords,
    pub rate_applied: AmountInWords,
    pub making_charge: AmountInWords,
    pub purchase_rate: AmountInWords,
}

/// The result of pricing one item at a given weight
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceQuote {
    pub metal: Metal,

    pub item_id: ItemId,

    pub item_name: String,

    /// Weight in grams
    pub weight_grams: Decimal,

    /// Rate per 10 grams after purity and add-on
    pub rate_applied: Amount,

    pub making_charge: Amount,

    /// Metal value plus making charge
    pub total_price: Amount,

    /// What the shop would pay to buy the same weight back
    pub purchase_rate: Amount,

    pub words: QuoteWords,

    pub quoted_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Build a quote and render every priced field in words.
    ///
    /// # Errors
    /// Returns `Overflow` if an amount is too large to render.
    pub fn new(
        metal: Metal,
        item: &ItemConfig,
        weight_grams: Decimal,
        rate_applied: Amount,
        total_price: Amount,
        purchase_rate: Amount,
    ) -> NumericResult<Self> {
        let making_charge = Amount::from_decimal(item.making_charge)?;

        let words = QuoteWords {
            total_price: AmountInWords::from_amount(total_price)?,
            rate_applied: AmountInWords::from_amount(rate_applied)?,
            making_charge: AmountInWords::from_amount(making_charge)?,
            purchase_rate: AmountInWords::from_amount(purchase_rate)?,
        };

        Ok(Self {
            metal,
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            weight_grams,
            rate_applied,
            making_charge,
            total_price,
            purchase_rate,
            words,
            quoted_at: Utc::now(),
        })
    }

    /// Total price rounded to whole rupees
    pub fn total_rupees(&self) -> NumericResult<u64> {
        self.total_price.round_to_rupees()
    }
}
