//! Error types for the browser core.
//!
//! Nothing in the browsing logic itself can fail; the only fallible
//! collaborator is preference storage, and its failures are reported so the
//! caller can log them and continue in memory.

use std::path::PathBuf;
use thiserror::Error;

/// Preference storage error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be written at all.
    #[error("Preference storage is unavailable")]
    Unavailable,

    /// File I/O error.
    #[error("Failed to write preferences: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences table could not be serialized.
    #[error("Failed to serialize preferences")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
}
