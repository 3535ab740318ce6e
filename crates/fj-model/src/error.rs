//! Model error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid TOML or has the wrong shape.
    #[error("Invalid catalog document")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    /// A recipe entry has a blank title.
    #[error("Recipe #{index} has an empty title")]
    EmptyTitle { index: usize },
}

impl ModelError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, source } => {
                format!(
                    "Could not read the recipe catalog at {}: {}",
                    path.display(),
                    source
                )
            }
            Self::Parse { source } => format!("The recipe catalog is malformed: {}", source),
            Self::EmptyTitle { index } => {
                format!("Recipe number {} in the catalog has no title", index + 1)
            }
        }
    }
}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
