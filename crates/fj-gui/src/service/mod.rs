//! Services that feed the application state.

pub mod catalog;

pub use catalog::{LoadedCatalog, load_catalog};
