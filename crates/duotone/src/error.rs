//! Error types for the persistence layer.
//!
//! Storage is deliberately lopsided: reads can never fail (a missing or
//! unreadable value is just `None`, so rendering is never blocked on
//! storage), while writes are best-effort and surface their failures to the
//! caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting a theme choice.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store's snapshot file could not be written.
    #[error("failed to persist store to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store's contents could not be serialized.
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
