//! Error types for definition stores.

use thiserror::Error;

/// Errors from loading, saving, or bootstrapping definitions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing the backing source.
    #[error("definition store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid YAML, or a group entry has an invalid
    /// structure.
    #[error("definition parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document root or a mapping key has the wrong shape.
    #[error("invalid definitions document: {0}")]
    InvalidDocument(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
