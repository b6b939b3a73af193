use thiserror::Error;

/// Core error type shared across Martforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A row does not match the table's column layout.
    #[error("invalid row: {0}")]
    InvalidRow(String),
    /// A referenced column does not exist.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// Convenience alias for results returned by Martforge crates.
pub type Result<T> = std::result::Result<T, Error>;
