use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Only configuration violations are fatal; resolution gaps (for example a
/// return date past the calendar range) are handled by skipping the single
/// derived row and never surface here.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("core error: {0}")]
    Core(#[from] martforge_core::Error),
}
