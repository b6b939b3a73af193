//! Export adapters for Martforge.
//!
//! Each adapter consumes a finished, immutable [`martforge_core::Table`] and
//! writes it verbatim; adapters are independent of one another and never run
//! while generation is still in progress. Null markers are preserved in each
//! format's native representation: an empty CSV field, an explicit JSON
//! `null`, an empty XML element, and no column default in the DDL.

pub mod csv;
pub mod errors;
pub mod json;
pub mod sql;
pub mod xml;

pub use errors::ExportError;
