use std::io;
use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Unified error type for all corpus operations
#[derive(Debug, Error)]
pub enum CorpusError {
    // Format errors
    #[error("Invalid magic number in file header")]
    InvalidMagic,

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    // Buffer invariant violations
    #[error("Buffer overrun: {len} bytes at offset {offset} exceeds capacity {capacity}")]
    BufferOverrun {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(String),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<toml::de::Error> for CorpusError {
    fn from(err: toml::de::Error) -> Self {
        CorpusError::TomlError(err.to_string())
    }
}

impl From<toml::ser::Error> for CorpusError {
    fn from(err: toml::ser::Error) -> Self {
        CorpusError::TomlError(err.to_string())
    }
}
