//! Shared table model for Martforge.
//!
//! Every generator produces flat [`Table`] values; export adapters and the
//! database loader consume them without further transformation.

pub mod error;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use table::{Column, Table};
pub use value::{ColumnKind, Value};
