//! Error types for the engine.

use rolegate_store::StoreError;
use thiserror::Error;

/// Errors from engine operations.
///
/// Only `create`, `reload`, and `save` can fail; permission checks are
/// infallible and express every denial as `false`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Definition store failure (I/O, parse, bootstrap).
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
