//! Recipe data model for FlavorJourney.
//!
//! This crate provides the immutable records the browser works over:
//! - **CardRecord**: one recipe card (title, category, image, ingredients, instructions)
//! - **CategoryTag**: the category label a card belongs to, with the `"all"` wildcard
//! - **Catalog**: the ordered list of cards; a card's identity is its position
//!
//! # Module Organization
//!
//! - [`card`]: Card records and attribute-style construction
//! - [`category`]: Category tags
//! - [`catalog`]: Ordered catalogs and TOML loading
//! - [`error`]: Model errors
//!
//! # Example
//!
//! ```
//! use fj_model::{Catalog, CategoryTag};
//!
//! let catalog = Catalog::from_toml_str(r#"
//!     [[recipe]]
//!     title = "Tomato Soup"
//!     category = "soup"
//!     image = "images/tomato-soup.jpg"
//!     ingredients = ["4 tomatoes", "1 onion"]
//!     instructions = ["Chop", "Simmer"]
//! "#).unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.categories(), vec![CategoryTag::new("soup")]);
//! ```

pub mod card;
pub mod catalog;
pub mod category;
pub mod error;

pub use card::{CardAttributes, CardId, CardRecord, LIST_SEPARATOR};
pub use catalog::Catalog;
pub use category::CategoryTag;
pub use error::{ModelError, Result};
