// ============================================================================
// Configuration Store
// Shared, validated pricing configuration with JSON import/export
// ============================================================================

use super::calculator::PriceCalculator;
use super::errors::PricingError;
use crate::domain::{BaseMetalRates, ItemConfig, ItemId, Metal, PricingConfig};
use parking_lot::RwLock;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use std::fs::{self, File};
#[cfg(feature = "serde")]
use std::io::{BufReader, BufWriter, Write};
#[cfg(feature = "serde")]
use std::path::Path;
#[cfg(feature = "serde")]
use tempfile::NamedTempFile;

/// Thread-safe holder of the current pricing configuration.
///
/// Every mutation is applied to a copy, validated, and only then committed,
/// so readers never observe an invalid configuration.
#[derive(Debug)]
pub struct ConfigStore {
    config: RwLock<PricingConfig>,
}

impl ConfigStore {
    /// Create a store, validating the initial configuration
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate().map_err(PricingError::InvalidConfig)?;
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// Copy of the current configuration
    pub fn snapshot(&self) -> PricingConfig {
        self.config.read().clone()
    }

    /// Calculator over the current configuration
    pub fn calculator(&self) -> Result<PriceCalculator, PricingError> {
        PriceCalculator::new(self.snapshot())
    }

    /// Items of one metal
    pub fn items(&self, metal: Metal) -> Vec<ItemConfig> {
        self.config.read().items(metal).to_vec()
    }

    pub fn set_base_rates(&self, rates: BaseMetalRates) -> Result<(), PricingError> {
        self.mutate(|config| {
            config.base_rates = rates;
            Ok(())
        })?;
        tracing::debug!(
            gold = %rates.gold_price_per_10g,
            silver = %rates.silver_price_per_10g,
            "updated base metal rates"
        );
        Ok(())
    }

    pub fn set_purchase_handling_charge(&self, charge: Decimal) -> Result<(), PricingError> {
        self.mutate(|config| {
            config.purchase_handling_charge = charge;
            Ok(())
        })
    }

    /// Append an item to a catalogue and return its id
    pub fn add_item(&self, metal: Metal, item: ItemConfig) -> Result<ItemId, PricingError> {
        let id = item.id.clone();
        self.mutate(|config| {
            config.items_mut(metal).push(item);
            Ok(())
        })?;
        tracing::debug!(%metal, item = %id, "added catalogue item");
        Ok(id)
    }

    /// Replace the item with the same id
    pub fn update_item(&self, metal: Metal, item: ItemConfig) -> Result<(), PricingError> {
        let id = item.id.clone();
        self.mutate(|config| {
            let slot = config
                .items_mut(metal)
                .iter_mut()
                .find(|existing| existing.id == item.id)
                .ok_or_else(|| PricingError::UnknownItem {
                    metal,
                    id: item.id.clone(),
                })?;
            *slot = item;
            Ok(())
        })?;
        tracing::debug!(%metal, item = %id, "updated catalogue item");
        Ok(())
    }

    /// Remove an item and return it
    pub fn remove_item(&self, metal: Metal, id: &ItemId) -> Result<ItemConfig, PricingError> {
        let removed = self.mutate(|config| {
            let items = config.items_mut(metal);
            let index = items
                .iter()
                .position(|item| &item.id == id)
                .ok_or_else(|| PricingError::UnknownItem {
                    metal,
                    id: id.clone(),
                })?;
            Ok(items.remove(index))
        })?;
        tracing::debug!(%metal, item = %id, "removed catalogue item");
        Ok(removed)
    }

    /// Replace the whole configuration
    pub fn replace(&self, config: PricingConfig) -> Result<(), PricingError> {
        config.validate().map_err(PricingError::InvalidConfig)?;
        *self.config.write() = config;
        Ok(())
    }

    fn mutate<T, F>(&self, apply: F) -> Result<T, PricingError>
    where
        F: FnOnce(&mut PricingConfig) -> Result<T, PricingError>,
    {
        let mut guard = self.config.write();
        let mut draft = guard.clone();
        let output = apply(&mut draft)?;
        draft.validate().map_err(PricingError::InvalidConfig)?;
        *guard = draft;
        Ok(output)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            config: RwLock::new(PricingConfig::default()),
        }
    }
}

// ============================================================================
// JSON Import / Export
// ============================================================================

#[cfg(feature = "serde")]
impl ConfigStore {
    /// Pretty-printed JSON of the current configuration
    pub fn export_json(&self) -> Result<String, PricingError> {
        Ok(serde_json::to_string_pretty(&*self.config.read())?)
    }

    /// Replace the configuration from JSON.
    ///
    /// `baseMetalConfig`, `goldConfigs` and `silverConfigs` are all required.
    /// Nothing changes if the document is malformed or fails validation.
    pub fn import_json(&self, json: &str) -> Result<(), PricingError> {
        let config: PricingConfig = serde_json::from_str(json).map_err(|err| {
            tracing::warn!(error = %err, "rejected configuration import");
            PricingError::from(err)
        })?;
        self.replace(config).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected configuration import");
        })?;
        tracing::debug!("imported configuration");
        Ok(())
    }

    /// Load a store from a JSON file
    pub fn load(path: &Path) -> Result<Self, PricingError> {
        let reader = BufReader::new(File::open(path)?);
        let config: PricingConfig = serde_json::from_reader(reader)?;
        let store = Self::new(config)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(store)
    }

    /// Write the configuration to a JSON file, replacing it atomically
    pub fn save(&self, path: &Path) -> Result<(), PricingError> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let config = self.snapshot();
        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, &config)?;
            writer.flush()?;
        }

        temp_file.persist(path).map_err(|err| err.error)?;
        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ItemConfig {
        ItemConfig::new("Chain", Decimal::from(92), Decimal::from(300), Decimal::from(100))
    }

    #[test]
    fn test_add_and_quote_new_item() {
        let store = ConfigStore::default();
        let id = store.add_item(Metal::Silver, chain()).unwrap();

        assert_eq!(store.items(Metal::Silver).len(), 3);
        let quote = store
            .calculator()
            .unwrap()
            .quote(Metal::Silver, &id, Decimal::from(10))
            .unwrap();
        assert_eq!(quote.item_name, "Chain");
    }

    #[test]
    fn test_update_item() {
        let store = ConfigStore::default();
        let mut item = store.items(Metal::Gold)[0].clone();
        item.making_charge = Decimal::from(900);
        store.update_item(Metal::Gold, item).unwrap();

        assert_eq!(store.items(Metal::Gold)[0].making_charge, Decimal::from(900));
    }

    #[test]
    fn test_update_unknown_item() {
        let store = ConfigStore::default();
        let result = store.update_item(Metal::Gold, chain());
        assert!(matches!(result, Err(PricingError::UnknownItem { .. })));
    }

    #[test]
    fn test_remove_item() {
        let store = ConfigStore::default();
        let removed = store.remove_item(Metal::Silver, &ItemId::new("s2")).unwrap();
        assert_eq!(removed.name, "Payal SC-70");
        assert_eq!(store.items(Metal::Silver).len(), 1);
        assert!(store.remove_item(Metal::Silver, &ItemId::new("s2")).is_err());
    }

    #[test]
    fn test_invalid_mutation_leaves_state_untouched() {
        let store = ConfigStore::default();
        let before = store.snapshot();

        let bad = ItemConfig::new("Bad", Decimal::from(150), Decimal::ZERO, Decimal::ZERO);
        assert!(matches!(
            store.add_item(Metal::Gold, bad),
            Err(PricingError::InvalidConfig(_))
        ));
        assert!(store
            .set_base_rates(BaseMetalRates::new(Decimal::NEGATIVE_ONE, Decimal::ONE))
            .is_err());
        assert!(store.set_purchase_handling_charge(Decimal::NEGATIVE_ONE).is_err());

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_base_rates_changes_quotes() {
        let store = ConfigStore::default();
        store
            .set_base_rates(BaseMetalRates::new(Decimal::from(100_000), Decimal::from(1_000)))
            .unwrap();
        let quote = store
            .calculator()
            .unwrap()
            .quote(Metal::Gold, &ItemId::new("2"), Decimal::from(10))
            .unwrap();
        // 100000 * 75% + 6500 add-on + 550 making charge
        assert_eq!(quote.total_rupees().unwrap(), 82_050);
    }

    #[test]
    fn test_concurrent_readers() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(ConfigStore::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.items(Metal::Gold).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }

    #[cfg(feature = "serde")]
    mod json {
        use super::*;

        const SHOP_EXPORT: &str = r#"{
            "baseMetalConfig": { "goldPricePer10g": 120000, "silverPricePer10g": 1500 },
            "goldConfigs": [
                { "id": "1", "name": "916 KDM", "purity": 91.6, "addOnPrice": 5000, "makingCharge": 800 }
            ],
            "silverConfigs": []
        }"#;

        #[test]
        fn test_import_shop_export() {
            let store = ConfigStore::default();
            store.import_json(SHOP_EXPORT).unwrap();

            let config = store.snapshot();
            assert_eq!(config.base_rates.gold_price_per_10g, Decimal::from(120_000));
            assert_eq!(config.items(Metal::Gold)[0].purity, Decimal::new(916, 1));
            assert!(config.items(Metal::Silver).is_empty());
            assert_eq!(config.purchase_handling_charge, Decimal::from(500));
        }

        #[test]
        fn test_import_requires_all_sections() {
            let store = ConfigStore::default();
            let before = store.snapshot();

            let missing = r#"{ "baseMetalConfig": { "goldPricePer10g": 1, "silverPricePer10g": 1 }, "goldConfigs": [] }"#;
            assert!(matches!(store.import_json(missing), Err(PricingError::Json(_))));
            assert!(store.import_json("not json").is_err());
            assert_eq!(store.snapshot(), before);
        }

        #[test]
        fn test_import_rejects_invalid_values() {
            let store = ConfigStore::default();
            let invalid = SHOP_EXPORT.replace("91.6", "191.6");
            assert!(matches!(
                store.import_json(&invalid),
                Err(PricingError::InvalidConfig(_))
            ));
        }

        #[test]
        fn test_export_then_import_preserves_config() {
            let source = ConfigStore::default();
            source.add_item(Metal::Gold, chain()).unwrap();
            let json = source.export_json().unwrap();
            assert!(json.contains("\"baseMetalConfig\""));
            assert!(json.contains("\"goldPricePer10g\""));

            let target = ConfigStore::new(PricingConfig::new(BaseMetalRates::new(
                Decimal::ONE,
                Decimal::ONE,
            )))
            .unwrap();
            target.import_json(&json).unwrap();
            assert_eq!(target.snapshot(), source.snapshot());
        }

        #[test]
        fn test_export_writes_numbers() {
            let store = ConfigStore::default();
            let value: serde_json::Value =
                serde_json::from_str(&store.export_json().unwrap()).unwrap();

            for pointer in [
                "/baseMetalConfig/goldPricePer10g",
                "/baseMetalConfig/silverPricePer10g",
                "/goldConfigs/0/purity",
                "/goldConfigs/0/makingCharge",
                "/goldConfigs/0/addOnPrice",
                "/silverConfigs/0/purity",
                "/purchaseHandlingCharge",
            ] {
                assert!(value.pointer(pointer).unwrap().is_number(), "{}", pointer);
            }
            assert_eq!(
                value.pointer("/goldConfigs/0/purity").unwrap().as_f64(),
                Some(91.6)
            );
        }

        #[test]
        fn test_import_accepts_string_amounts() {
            let store = ConfigStore::default();
            let quoted = SHOP_EXPORT
                .replace("120000", "\"120000\"")
                .replace("91.6", "\"91.6\"");
            store.import_json(&quoted).unwrap();

            let config = store.snapshot();
            assert_eq!(config.base_rates.gold_price_per_10g, Decimal::from(120_000));
            assert_eq!(config.items(Metal::Gold)[0].purity, Decimal::new(916, 1));
        }

        #[test]
        fn test_save_while_writers_update() {
            use std::sync::Arc;
            use std::thread;

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("jewellery-config.json");
            let store = Arc::new(ConfigStore::default());

            let writer = {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for charge in 1..=50 {
                        store
                            .set_purchase_handling_charge(Decimal::from(charge))
                            .unwrap();
                    }
                })
            };
            for _ in 0..10 {
                store.save(&path).unwrap();
            }
            writer.join().unwrap();

            store.save(&path).unwrap();
            let loaded = ConfigStore::load(&path).unwrap();
            assert_eq!(loaded.snapshot(), store.snapshot());
            assert_eq!(loaded.snapshot().purchase_handling_charge, Decimal::from(50));
        }

        #[test]
        fn test_save_and_load() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("jewellery-config.json");

            let store = ConfigStore::default();
            store.set_purchase_handling_charge(Decimal::from(750)).unwrap();
            store.save(&path).unwrap();

            let loaded = ConfigStore::load(&path).unwrap();
            assert_eq!(loaded.snapshot(), store.snapshot());
        }

        #[test]
        fn test_load_missing_file() {
            let dir = tempfile::tempdir().unwrap();
            let result = ConfigStore::load(&dir.path().join("absent.json"));
            assert!(matches!(result, Err(PricingError::Io(_))));
        }
    }
}
