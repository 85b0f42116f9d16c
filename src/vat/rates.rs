//! Country VAT rate table and rate lookup.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::FakturaError;

/// Label of the Polish entry in the default table.
pub const POLAND: &str = "Polska";
/// Label of the German entry in the default table.
pub const GERMANY: &str = "Niemcy";
/// Label of the catch-all entry for countries without a configured rate.
pub const OTHER: &str = "Inne";

/// VAT rate configured for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryVat {
    /// Country label, unique within a [`RateTable`].
    pub name: String,
    /// Rate in percent, 0 to 100.
    pub vat_rate: Decimal,
    /// Protected entries cannot be removed from the table.
    #[serde(default)]
    pub protected: bool,
}

impl CountryVat {
    /// A removable entry.
    pub fn new(name: impl Into<String>, vat_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            vat_rate,
            protected: false,
        }
    }

    /// A baseline entry that cannot be removed.
    pub fn protected(name: impl Into<String>, vat_rate: Decimal) -> Self {
        Self {
            protected: true,
            ..Self::new(name, vat_rate)
        }
    }
}

/// Country → VAT rate mapping.
///
/// Names are unique. Entries keep their insertion order for display; lookups
/// are by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CountryVat>", into = "Vec<CountryVat>")]
pub struct RateTable {
    entries: Vec<CountryVat>,
}

impl Default for RateTable {
    /// Polska 23%, Niemcy 19%, Inne 0%, all protected.
    fn default() -> Self {
        Self {
            entries: baseline(),
        }
    }
}

fn baseline() -> Vec<CountryVat> {
    vec![
        CountryVat::protected(POLAND, dec!(23)),
        CountryVat::protected(GERMANY, dec!(19)),
        CountryVat::protected(OTHER, dec!(0)),
    ]
}

impl From<Vec<CountryVat>> for RateTable {
    /// Later duplicates of a name are dropped.
    fn from(entries: Vec<CountryVat>) -> Self {
        let mut table = Self::empty();
        for entry in entries {
            if !table.contains(&entry.name) {
                table.entries.push(entry);
            }
        }
        table
    }
}

impl From<RateTable> for Vec<CountryVat> {
    fn from(table: RateTable) -> Self {
        table.entries
    }
}

impl RateTable {
    /// A table with no entries, not even the baseline ones.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The entry named exactly `name`.
    pub fn get(&self, name: &str) -> Option<&CountryVat> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// True if an entry named exactly `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Exact-match lookup of a country's rate, `0` if the country is absent.
    pub fn resolve(&self, country: &str) -> Decimal {
        self.get(country)
            .map(|e| e.vat_rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryVat> {
        self.entries.iter()
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a new country. The name must be non-blank and not already present.
    pub fn add(&mut self, entry: CountryVat) -> Result<(), FakturaError> {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(FakturaError::RateTable(
                "country name must not be empty".into(),
            ));
        }
        if self.contains(name) {
            return Err(FakturaError::RateTable(format!(
                "country '{name}' already exists"
            )));
        }
        check_rate(entry.vat_rate)?;

        self.entries.push(CountryVat {
            name: name.to_string(),
            ..entry
        });
        Ok(())
    }

    /// Change the rate of an existing country.
    pub fn set_rate(&mut self, name: &str, vat_rate: Decimal) -> Result<(), FakturaError> {
        check_rate(vat_rate)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| FakturaError::RateTable(format!("unknown country '{name}'")))?;
        entry.vat_rate = vat_rate;
        Ok(())
    }

    /// Remove a country. Protected entries are refused.
    pub fn remove(&mut self, name: &str) -> Result<CountryVat, FakturaError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| FakturaError::RateTable(format!("unknown country '{name}'")))?;
        if self.entries[idx].protected {
            return Err(FakturaError::RateTable(format!(
                "country '{name}' is a default entry and cannot be removed"
            )));
        }
        Ok(self.entries.remove(idx))
    }

    /// Restore the default table, discarding all edits.
    pub fn reset(&mut self) {
        self.entries = baseline();
    }

    /// Re-add any missing baseline entry with its default rate, and flag
    /// present baseline entries as protected. Returns true if anything changed.
    ///
    /// Tables stored before the `protected` flag existed come back unflagged.
    pub fn ensure_baseline(&mut self) -> bool {
        let mut changed = false;
        for default in baseline() {
            match self.entries.iter_mut().find(|e| e.name == default.name) {
                Some(entry) if !entry.protected => {
                    entry.protected = true;
                    changed = true;
                }
                Some(_) => {}
                None => {
                    self.entries.push(default);
                    changed = true;
                }
            }
        }
        changed
    }
}

fn check_rate(vat_rate: Decimal) -> Result<(), FakturaError> {
    if vat_rate < Decimal::ZERO || vat_rate > dec!(100) {
        return Err(FakturaError::RateTable(format!(
            "VAT rate {vat_rate} must be between 0 and 100"
        )));
    }
    Ok(())
}

/// Look up the VAT rate for `country` by exact name.
///
/// Unknown countries are not an error: they resolve to 0%.
pub fn resolve_vat_rate(country: &str, table: &RateTable) -> Decimal {
    table.resolve(country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let table = RateTable::default();
        assert_eq!(table.len(), 3);
        assert_eq!(resolve_vat_rate(POLAND, &table), dec!(23));
        assert_eq!(resolve_vat_rate(GERMANY, &table), dec!(19));
        assert_eq!(resolve_vat_rate(OTHER, &table), dec!(0));
        assert!(table.iter().all(|e| e.protected));
    }

    #[test]
    fn unknown_country_resolves_to_zero() {
        let table = RateTable::default();
        assert_eq!(resolve_vat_rate("Francja", &table), dec!(0));
        assert_eq!(resolve_vat_rate("", &table), dec!(0));
        // lookup is exact, not case-insensitive
        assert_eq!(resolve_vat_rate("polska", &table), dec!(0));
    }

    #[test]
    fn add_and_resolve() {
        let mut table = RateTable::default();
        table.add(CountryVat::new("Francja", dec!(20))).unwrap();
        assert_eq!(table.resolve("Francja"), dec!(20));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn add_trims_name() {
        let mut table = RateTable::default();
        table.add(CountryVat::new("  Czechy ", dec!(21))).unwrap();
        assert!(table.contains("Czechy"));
    }

    #[test]
    fn add_rejects_blank_and_duplicate() {
        let mut table = RateTable::default();
        assert!(table.add(CountryVat::new("   ", dec!(5))).is_err());
        assert!(table.add(CountryVat::new(POLAND, dec!(5))).is_err());
        assert_eq!(table.resolve(POLAND), dec!(23));
    }

    #[test]
    fn rate_out_of_range_rejected() {
        let mut table = RateTable::default();
        assert!(table.add(CountryVat::new("X", dec!(101))).is_err());
        assert!(table.set_rate(POLAND, dec!(-1)).is_err());
    }

    #[test]
    fn set_rate_updates() {
        let mut table = RateTable::default();
        table.set_rate(GERMANY, dec!(16)).unwrap();
        assert_eq!(table.resolve(GERMANY), dec!(16));
        assert!(table.set_rate("Atlantis", dec!(10)).is_err());
    }

    #[test]
    fn protected_entries_cannot_be_removed() {
        let mut table = RateTable::default();
        let err = table.remove(OTHER).unwrap_err();
        assert!(err.to_string().contains("cannot be removed"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn unprotected_entries_can_be_removed() {
        let mut table = RateTable::default();
        table.add(CountryVat::new("Francja", dec!(20))).unwrap();
        let removed = table.remove("Francja").unwrap();
        assert_eq!(removed.vat_rate, dec!(20));
        assert!(table.remove("Francja").is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut table = RateTable::default();
        table.add(CountryVat::new("Francja", dec!(20))).unwrap();
        table.set_rate(POLAND, dec!(8)).unwrap();
        table.reset();
        assert_eq!(table, RateTable::default());
    }

    #[test]
    fn ensure_baseline_repairs_table() {
        let mut table = RateTable::from(vec![
            CountryVat::new(POLAND, dec!(8)),
            CountryVat::new("Francja", dec!(20)),
        ]);
        assert!(table.ensure_baseline());
        assert_eq!(table.len(), 4);
        // existing rate kept, flag added
        assert_eq!(table.resolve(POLAND), dec!(8));
        assert!(table.get(POLAND).unwrap().protected);
        assert!(table.get(OTHER).unwrap().protected);
        assert!(!table.get("Francja").unwrap().protected);
        assert!(!table.ensure_baseline());
    }

    #[test]
    fn duplicates_dropped_on_conversion() {
        let table = RateTable::from(vec![
            CountryVat::new("A", dec!(1)),
            CountryVat::new("A", dec!(2)),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("A"), dec!(1));
    }
}
