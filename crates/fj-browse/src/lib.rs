//! Browsing core for FlavorJourney.
//!
//! This crate holds every piece of behaviour of the recipe browser that does
//! not depend on a rendering surface:
//!
//! - [`filter`]: the visibility predicate and engine
//! - [`category_bar`]: mutually exclusive category selection
//! - [`overlay`]: the recipe detail overlay state machine
//! - [`theme`]: the persisted light/dark flag
//! - [`store`]: key-value persistence (in memory or TOML file)
//! - [`debounce`]: the cancellable single-slot scheduler used for search
//! - [`animation`]: card entrance timing
//! - [`browser`]: the controller that owns all of the above
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use fj_browse::{Browser, MemoryStore};
//! use fj_model::{CardRecord, Catalog};
//!
//! let catalog = Catalog::new(vec![
//!     CardRecord::new("Tomato Soup", "soup", ""),
//!     CardRecord::new("Lasagna", "italian", ""),
//! ]);
//! let start = Instant::now();
//! let mut browser = Browser::new(catalog, MemoryStore::new(), start);
//!
//! browser.on_search_input("TOM", start);
//! let report = browser.poll_search(start + Duration::from_millis(160)).unwrap();
//! assert_eq!(report.visible, 1);
//! ```

pub mod animation;
pub mod browser;
pub mod category_bar;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod overlay;
pub mod store;
pub mod theme;

pub use animation::{ENTRANCE_DURATION, ENTRANCE_STAGGER, Entrance};
pub use browser::{Browser, BrowserOptions};
pub use category_bar::CategoryBar;
pub use debounce::{Debouncer, SEARCH_DEBOUNCE, Ticket};
pub use error::StoreError;
pub use filter::{
    FilterState, RecomputeCause, VisibilityEngine, VisibilityReport, category_matches, is_visible,
    title_matches,
};
pub use overlay::{
    DetailList, DetailView, FocusTarget, NO_INGREDIENTS, NO_INSTRUCTIONS, Overlay, OverlayState,
    PointerTarget,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{THEME_KEY, ThemeMode, ThemeStore, ToggleGlyph};
