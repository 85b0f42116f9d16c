//! Client text parsing and country detection.
//!
//! Turns a pasted, loosely formatted client block (name, address lines, tax
//! identifier, country) into a [`Client`](crate::core::Client). The rules are
//! heuristics: ambiguous input degrades to a plain address instead of failing.
//!
//! # Example
//!
//! ```
//! use faktura_vat::client::*;
//!
//! let client = parse_client("Jane Doe\n1 Main St\nPoland");
//! assert_eq!(client.name, "Jane Doe");
//! assert_eq!(client.address, "1 Main St");
//! assert_eq!(client.country, "Polska");
//!
//! assert_eq!(detect_country("Hamburg, Deutschland"), "Inne");
//! ```

mod detect;
mod parse;

pub use detect::{CountryDetector, CountryRule, detect_country};
pub use parse::{ClientTextParser, client_to_text, extract_tax_id, parse_client};
