use thiserror::Error;

/// Errors produced while validating terrain generation input.
///
/// Validation fails fast, before any allocation: an `Err` means no partial
/// state was produced. Given a valid configuration the rest of the pipeline
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl TerrainError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
