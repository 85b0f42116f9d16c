//! Core invoice types, assembly, validation, and numbering.
//!
//! Clients and priced lines go in, an immutable [`Invoice`] with totals comes
//! out. Nothing here performs I/O.

mod assemble;
mod builder;
mod error;
mod numbering;
mod settings;
mod store;
mod types;
mod validation;

pub use assemble::*;
pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use settings::*;
pub use store::*;
pub use types::*;
pub use validation::*;
