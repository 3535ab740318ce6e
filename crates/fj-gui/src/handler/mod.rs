//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message category and
//! gets the full application state:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Browse(msg) => BrowseHandler.handle(&mut self.state, msg),
//!         Message::Overlay(msg) => OverlayHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod browse;
mod overlay;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use browse::BrowseHandler;
pub use overlay::OverlayHandler;

/// Trait for handling one category of messages.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, returning any follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::time::Instant;

    use fj_browse::FileStore;
    use fj_model::{CardRecord, Catalog};

    use crate::service::LoadedCatalog;
    use crate::state::{AppState, Settings};

    /// Three-card state backed by a preferences file under `dir`.
    pub fn test_state(dir: &Path) -> AppState {
        let catalog = Catalog::new(vec![
            CardRecord::new("Tomato Soup", "soup", "")
                .with_ingredients(["tomatoes", "onion"])
                .with_instructions(["Simmer"]),
            CardRecord::new("Lasagna", "italian", ""),
            CardRecord::new("Minestrone", "soup", ""),
        ]);
        let loaded = LoadedCatalog {
            images: vec![None; catalog.len()],
            catalog,
            error: None,
        };
        let store = FileStore::open(&dir.join("preferences.toml"));
        AppState::new(Settings::default(), loaded, store, Instant::now())
    }
}
