//! GUI-specific error types.
//!
//! Errors here are shown to the user as a dismissible banner above the
//! recipe grid, so every variant carries enough context to explain itself.

use std::path::PathBuf;

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// The configured catalog file could not be used.
    #[error("Failed to load catalog {}: {reason}", path.display())]
    CatalogLoad {
        /// Configured catalog path.
        path: PathBuf,
        /// Description of what went wrong.
        reason: String,
    },

    /// The built-in catalog is broken. Only a packaging mistake causes this.
    #[error("Built-in catalog is invalid: {reason}")]
    EmbeddedCatalog {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::CatalogLoad { path, .. } => format!(
                "Could not open the recipe catalog at {}. Showing the built-in recipes instead.",
                path.display()
            ),
            Self::EmbeddedCatalog { .. } => {
                "The built-in recipe catalog is damaged. No recipes can be shown.".to_string()
            }
        }
    }
}
