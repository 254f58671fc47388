//! # Currency Settings
//!
//! Currency definitions live in an external TOML file and are loaded once at
//! startup:
//!
//! ```toml
//! name = "Coin"
//! name_plural = "Coins"
//! digits = 2
//! named_denominations = true
//! include_containers = true
//! container_kinds = ["shulker_box"]
//!
//! [[denominations]]
//! item = { kind = "gold_ingot" }
//! value = 1.0
//! unit_name = "Gold"
//! unit_name_plural = "Golds"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::currency::{Currency, DEFAULT_MAX_CONTAINER_DEPTH};
use crate::error::{EconomyError, EconomyResult};
use crate::item::ItemDescriptor;

/// One denomination as written in the settings file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DenominationSettings {
    /// The item that counts as money.
    pub item: ItemDescriptor,
    /// Worth of one item, in display units.
    pub value: f64,
    /// Singular unit name.
    pub unit_name: String,
    /// Plural unit name.
    pub unit_name_plural: String,
}

/// Everything needed to build a [`Currency`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// Currency name.
    pub name: String,
    /// Currency name, plural.
    pub name_plural: String,
    /// Fractional digits.
    pub digits: u32,
    /// Show amounts broken down into denominations.
    #[serde(default)]
    pub named_denominations: bool,
    /// Value containers by their contents.
    #[serde(default)]
    pub include_containers: bool,
    /// Item kinds that are containers.
    #[serde(default)]
    pub container_kinds: Vec<String>,
    /// Maximum container nesting.
    #[serde(default = "default_max_container_depth")]
    pub max_container_depth: u32,
    /// Denominations, in any order.
    #[serde(default)]
    pub denominations: Vec<DenominationSettings>,
}

const fn default_max_container_depth() -> u32 {
    DEFAULT_MAX_CONTAINER_DEPTH
}

impl CurrencySettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` if the text is not valid settings.
    pub fn from_toml_str(text: &str) -> EconomyResult<Self> {
        toml::from_str(text).map_err(|e| EconomyError::InvalidConfig(e.to_string()))
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> EconomyResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            EconomyError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the frozen currency, registering every denomination.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` for bad digits, a zero container
    /// depth while containers are included, or any rejected denomination.
    pub fn build(&self) -> EconomyResult<Currency> {
        if self.include_containers && self.max_container_depth == 0 {
            return Err(EconomyError::InvalidConfig(
                "max_container_depth must be at least 1 when containers are included".to_string(),
            ));
        }

        let mut builder = Currency::builder(&self.name, &self.name_plural, self.digits)?
            .with_named_denominations(self.named_denominations)
            .with_containers(self.include_containers)
            .with_max_container_depth(self.max_container_depth);
        for kind in &self.container_kinds {
            builder = builder.with_container_kind(kind);
        }
        for denomination in &self.denominations {
            builder.register(
                &denomination.item,
                denomination.value,
                &denomination.unit_name,
                &denomination.unit_name_plural,
            )?;
        }
        Ok(builder.build())
    }
}
