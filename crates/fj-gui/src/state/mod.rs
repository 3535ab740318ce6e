//! Application state.
//!
//! [`AppState`] wraps the browsing controller with what only the desktop
//! shell needs: settings, resolved image files, the error banner and the
//! timestamp of the last animation frame.

mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use fj_browse::{Browser, FileStore};
use fj_model::CardId;

use crate::error::GuiError;
use crate::service::LoadedCatalog;

pub use settings::{BrowseSettings, CatalogSettings, Settings};

/// Root application state.
pub struct AppState {
    /// Filtering, overlay and theme state.
    pub browser: Browser<FileStore>,

    /// Settings loaded at startup.
    pub settings: Settings,

    /// Local image file per card.
    pub images: Vec<Option<PathBuf>>,

    /// Error shown in the banner, if any.
    pub error: Option<GuiError>,

    /// Time used to render entrance animations.
    pub frame: Instant,
}

impl AppState {
    /// Build the state from loaded parts.
    pub fn new(settings: Settings, loaded: LoadedCatalog, store: FileStore, now: Instant) -> Self {
        let browser = Browser::with_options(loaded.catalog, store, settings.browser_options(), now);
        Self {
            browser,
            settings,
            images: loaded.images,
            error: loaded.error,
            frame: now,
        }
    }

    /// Local image file for a card.
    pub fn image_path(&self, id: CardId) -> Option<&Path> {
        self.images.get(id.index()).and_then(|path| path.as_deref())
    }
}
