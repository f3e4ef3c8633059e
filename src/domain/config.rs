// ============================================================================
// Pricing Configuration
// Metal rates and the catalogue of gold and silver items
// ============================================================================

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat amount added to every purchase rate, in rupees
pub const DEFAULT_PURCHASE_HANDLING_CHARGE: i64 = 500;

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metal {
    Gold,
    Silver,
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metal::Gold => write!(f, "gold"),
            Metal::Silver => write!(f, "silver"),
        }
    }
}

/// Identifier of a catalogue item.
///
/// Free-form text so that imported catalogues keep their own ids; items
/// created locally get a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Base Metal Rates
// ============================================================================

/// Market price of pure metal per 10 grams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BaseMetalRates {
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    pub gold_price_per_10g: Decimal,
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    pub silver_price_per_10g: Decimal,
}

impl BaseMetalRates {
    pub fn new(gold_price_per_10g: Decimal, silver_price_per_10g: Decimal) -> Self {
        Self {
            gold_price_per_10g,
            silver_price_per_10g,
        }
    }

    /// Price per 10 grams for a metal
    pub fn price_per_10g(&self, metal: Metal) -> Decimal {
        match metal {
            Metal::Gold => self.gold_price_per_10g,
            Metal::Silver => self.silver_price_per_10g,
        }
    }
}

// ============================================================================
// Catalogue Item
// ============================================================================

/// One sellable item type, e.g. "916 KDM" gold
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemConfig {
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Purity in percent (91.6 for 22 carat)
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    pub purity: Decimal,

    /// Fixed making charge added to the total price
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    pub making_charge: Decimal,

    /// Added to the purity-adjusted rate per 10 grams
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    pub add_on_price: Decimal,
}

impl ItemConfig {
    /// Create an item with a freshly generated id
    pub fn new(
        name: impl Into<String>,
        purity: Decimal,
        making_charge: Decimal,
        add_on_price: Decimal,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            purity,
            making_charge,
            add_on_price,
        }
    }

    /// Builder method: Replace the generated id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ItemId::new(id);
        self
    }

    /// Validate a single item
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().is_empty() {
            return Err("Item id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("Item name cannot be empty".to_string());
        }
        if self.purity <= Decimal::ZERO || self.purity > Decimal::ONE_HUNDRED {
            return Err(format!(
                "Purity of '{}' must be greater than 0 and at most 100",
                self.name
            ));
        }
        if self.making_charge < Decimal::ZERO {
            return Err(format!("Making charge of '{}' cannot be negative", self.name));
        }
        if self.add_on_price < Decimal::ZERO {
            return Err(format!("Add-on price of '{}' cannot be negative", self.name));
        }
        Ok(())
    }
}

// ============================================================================
// Complete Pricing Configuration
// ============================================================================

/// Everything the calculator needs: rates, catalogues and fixed charges.
///
/// With the `serde` feature this serialises to the same JSON shape the
/// shop's exported configuration files use (`baseMetalConfig`,
/// `goldConfigs`, `silverConfigs`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingConfig {
    #[cfg_attr(feature = "serde", serde(rename = "baseMetalConfig"))]
    pub base_rates: BaseMetalRates,

    pub gold_configs: Vec<ItemConfig>,

    pub silver_configs: Vec<ItemConfig>,

    /// Flat amount added to the purchase rate
    #[cfg_attr(
        feature = "serde",
        serde(
            default = "default_purchase_handling_charge",
            with = "rust_decimal::serde::float"
        )
    )]
    pub purchase_handling_charge: Decimal,
}

fn default_purchase_handling_charge() -> Decimal {
    Decimal::from(DEFAULT_PURCHASE_HANDLING_CHARGE)
}

impl PricingConfig {
    /// Create a configuration with empty catalogues
    pub fn new(base_rates: BaseMetalRates) -> Self {
        Self {
            base_rates,
            gold_configs: Vec::new(),
            silver_configs: Vec::new(),
            purchase_handling_charge: default_purchase_handling_charge(),
        }
    }

    /// Builder method: Add an item to a catalogue
    pub fn with_item(mut self, metal: Metal, item: ItemConfig) -> Self {
        self.items_mut(metal).push(item);
        self
    }

    /// Builder method: Set the purchase handling charge
    pub fn with_purchase_handling_charge(mut self, charge: Decimal) -> Self {
        self.purchase_handling_charge = charge;
        self
    }

    /// Items of one metal
    pub fn items(&self, metal: Metal) -> &[ItemConfig] {
        match metal {
            Metal::Gold => &self.gold_configs,
            Metal::Silver => &self.silver_configs,
        }
    }

    /// Mutable items of one metal
    pub fn items_mut(&mut self, metal: Metal) -> &mut Vec<ItemConfig> {
        match metal {
            Metal::Gold => &mut self.gold_configs,
            Metal::Silver => &mut self.silver_configs,
        }
    }

    /// Look up an item by id
    pub fn find_item(&self, metal: Metal, id: &ItemId) -> Option<&ItemConfig> {
        self.items(metal).iter().find(|item| &item.id == id)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Validate base rates
        if self.base_rates.gold_price_per_10g < Decimal::ZERO {
            return Err("Gold price cannot be negative".to_string());
        }
        if self.base_rates.silver_price_per_10g < Decimal::ZERO {
            return Err("Silver price cannot be negative".to_string());
        }

        if self.purchase_handling_charge < Decimal::ZERO {
            return Err("Purchase handling charge cannot be negative".to_string());
        }

        // Validate catalogues
        for metal in [Metal::Gold, Metal::Silver] {
            let mut seen = HashSet::new();
            for item in self.items(metal) {
                item.validate()?;
                if !seen.insert(&item.id) {
                    return Err(format!("Duplicate {} item id '{}'", metal, item.id));
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configuration
// ============================================================================

impl Default for PricingConfig {
    /// Shop defaults
    /// - Gold 118000 / Silver 1200 per 10 g
    /// - 916 KDM and 750 KDM gold
    /// - Payal MRDX and Payal SC-70 silver
    fn default() -> Self {
        Self::new(BaseMetalRates::new(
            Decimal::from(118_000),
            Decimal::from(1_200),
        ))
        .with_item(
            Metal::Gold,
            ItemConfig::new(
                "916 KDM",
                Decimal::new(916, 1),
                Decimal::from(800),
                Decimal::from(5_000),
            )
            .with_id("1"),
        )
        .with_item(
            Metal::Gold,
            ItemConfig::new(
                "750 KDM",
                Decimal::from(75),
                Decimal::from(550),
                Decimal::from(6_500),
            )
            .with_id("2"),
        )
        .with_item(
            Metal::Silver,
            ItemConfig::new(
                "Payal MRDX",
                Decimal::from(56),
                Decimal::from(250),
                Decimal::from(200),
            )
            .with_id("s1"),
        )
        .with_item(
            Metal::Silver,
            ItemConfig::new(
                "Payal SC-70",
                Decimal::from(70),
                Decimal::from(250),
                Decimal::from(200),
            )
            .with_id("s2"),
        )
    }
}
