//! Error types for MargaNav

use thiserror::Error;

/// MargaNav error type
#[derive(Error, Debug)]
pub enum MargaError {
    /// Cell buffer length does not match the declared grid dimensions.
    #[error("grid dimension mismatch: expected {expected} cells, got {actual}")]
    GridDimensions {
        /// Cell count implied by width × depth.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },

    /// I/O failure while loading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, MargaError>;
