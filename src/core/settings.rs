use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Client, Product, SellerDetails};
use crate::vat::RateTable;

/// Product rows offered on a fresh invoice draft.
pub const DEFAULT_PRODUCT_NAMES: [&str; 2] = ["Spoiler", "Wysyłka"];

/// Read-only configuration snapshot handed to the computation core.
///
/// There is no global settings instance; callers load a snapshot and pass it
/// to each call that needs rates or seller data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub country_vat_rates: RateTable,
    pub default_product_names: Vec<String>,
    pub seller: SellerDetails,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            country_vat_rates: RateTable::default(),
            default_product_names: DEFAULT_PRODUCT_NAMES.iter().map(|s| s.to_string()).collect(),
            seller: SellerDetails::default(),
        }
    }
}

impl Settings {
    /// The client's VAT rate, 0% for countries without an entry.
    pub fn vat_rate_for(&self, client: &Client) -> Decimal {
        self.country_vat_rates.resolve(&client.country)
    }

    /// Unpriced rows for every default product name, carrying the client's rate.
    pub fn draft_products(&self, client: &Client) -> Vec<Product> {
        let rate = self.vat_rate_for(client);
        self.default_product_names
            .iter()
            .map(|name| Product {
                vat_rate: rate,
                ..Product::placeholder(name.as_str())
            })
            .collect()
    }

    /// Restore the default rate table.
    pub fn reset_rates(&mut self) {
        self.country_vat_rates.reset();
    }
}

#[cfg(feature = "settings")]
mod json {
    use tracing::warn;

    use super::Settings;
    use crate::core::FakturaError;

    impl Settings {
        /// Parse a stored snapshot. Missing sections take their defaults and
        /// missing baseline countries are re-added.
        pub fn from_json(json: &str) -> Result<Self, FakturaError> {
            let mut settings: Settings =
                serde_json::from_str(json).map_err(|e| FakturaError::Settings(e.to_string()))?;
            settings.country_vat_rates.ensure_baseline();
            Ok(settings)
        }

        /// Like [`from_json`](Self::from_json), but corrupt input yields the
        /// built-in defaults instead of an error.
        pub fn from_json_or_default(json: &str) -> Self {
            Self::from_json(json).unwrap_or_else(|err| {
                warn!(error = %err, "stored settings unreadable, using defaults");
                Self::default()
            })
        }

        /// Serialize for storage.
        pub fn to_json(&self) -> Result<String, FakturaError> {
            serde_json::to_string_pretty(self).map_err(|e| FakturaError::Settings(e.to_string()))
        }
    }
}
