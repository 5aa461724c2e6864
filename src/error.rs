//! Error types for the sprite metadata store.

use thiserror::Error;

/// Errors produced by dataset and sidecar operations.
///
/// Every error aborts only the operation that raised it; the in-memory
/// dataset stays usable afterwards.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// Folder or sidecar unreadable/unwritable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sidecar file exists but does not hold the expected JSON shape
    #[error("Failed to parse {path}: {source}")]
    Sidecar {
        /// Path of the offending file
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected input or dataset state
    #[error("{0}")]
    Validation(String),
}

/// Result type alias for store operations.
pub type SpriteResult<T> = Result<T, SpriteError>;
