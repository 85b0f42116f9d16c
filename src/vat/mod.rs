//! VAT rates and gross price decomposition.
//!
//! Resolves a country's VAT rate from a [`RateTable`] and splits gross
//! prices into net and VAT with cent rounding.
//!
//! # Example
//!
//! ```
//! use faktura_vat::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let table = RateTable::default();
//! let rate = resolve_vat_rate(POLAND, &table);
//! assert_eq!(rate, dec!(23));
//!
//! let line = decompose(dec!(100), rate, 1);
//! assert_eq!(line.net_price, dec!(81.30));
//! assert_eq!(line.vat_amount, dec!(18.70));
//!
//! // Countries without an entry carry no VAT.
//! assert_eq!(resolve_vat_rate("Norwegia", &table), dec!(0));
//! ```

mod decompose;
mod rates;

pub use decompose::{LineAmounts, decompose, decompose_line};
pub use rates::{CountryVat, GERMANY, OTHER, POLAND, RateTable, resolve_vat_rate};
