//! # faktura-vat
//!
//! Computation core of a VAT invoice generator: parse pasted client details,
//! look up the client country's VAT rate, split gross prices into net and VAT,
//! and assemble invoices with consistent totals.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Nothing in this crate performs I/O; settings and invoices are plain values
//! that a caller loads, stores, and renders.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use faktura_vat::core::*;
//! use rust_decimal_macros::dec;
//!
//! let settings = Settings::default();
//! let client = ClientBuilder::new("Acme GmbH")
//!     .address("Friedrichstraße 123\n10115 Berlin")
//!     .country("Niemcy")
//!     .build();
//!
//! let rate = settings.vat_rate_for(&client);
//! let products = vec![
//!     ProductBuilder::new("Spoiler", dec!(119)).quantity(2).vat_rate(rate).build(),
//!     Product::placeholder("Wysyłka"),
//! ];
//!
//! let invoice = InvoiceAssembler::new()
//!     .assemble_checked(client, products, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .unwrap();
//!
//! assert_eq!(invoice.total().net, dec!(200));
//! assert_eq!(invoice.total().vat, dec!(38));
//! assert_eq!(invoice.total().gross, dec!(238));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, VAT rates, price decomposition, assembly, validation, numbering |
//! | `parse` | Client text parsing and country detection |
//! | `settings` | JSON load/save of the settings snapshot |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "parse")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
