//! Ordered recipe catalogs.
//!
//! A catalog is the externally supplied card list. It is built once and
//! never mutated; a card's [`CardId`] is its position in the list.
//!
//! # File Format
//!
//! Catalog files are TOML with one `[[recipe]]` table per card:
//!
//! ```toml
//! [[recipe]]
//! title = "Tomato Soup"
//! category = "soup"
//! image = "images/tomato-soup.jpg"
//! ingredients = ["4 ripe tomatoes", "1 onion"]
//! instructions = ["Chop everything", "Simmer 20 minutes"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::card::{CardId, CardRecord};
use crate::category::CategoryTag;
use crate::error::{ModelError, Result};

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    recipe: Vec<CardRecord>,
}

/// The ordered list of recipe cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<CardRecord>,
}

impl Catalog {
    /// Create a catalog from cards, in display order.
    pub fn new(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    /// Parse a catalog from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument =
            toml::from_str(content).map_err(|source| ModelError::Parse { source })?;

        if let Some(index) = document
            .recipe
            .iter()
            .position(|card| card.title.trim().is_empty())
        {
            return Err(ModelError::EmptyTitle { index });
        }

        Ok(Self::new(document.recipe))
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), cards = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Look up a card by id.
    pub fn get(&self, id: CardId) -> Option<&CardRecord> {
        self.cards.get(id.index())
    }

    /// Iterate cards with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CardRecord)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (CardId(index), card))
    }

    /// Number of cards.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct card categories in order of first appearance.
    ///
    /// The wildcard is never part of this list even if a card is tagged with it.
    pub fn categories(&self) -> Vec<CategoryTag> {
        let mut seen: Vec<CategoryTag> = Vec::new();
        for card in &self.cards {
            if !card.category.is_all() && !seen.contains(&card.category) {
                seen.push(card.category.clone());
            }
        }
        seen
    }
}

impl FromIterator<CardRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CardRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
