//! Category tags.
//!
//! Cards are grouped by a free-form string tag (usually a cuisine). The
//! literal tag `"all"` is reserved as the wildcard that selects every card.

use serde::{Deserialize, Serialize};

/// Label of the wildcard category.
pub const ALL: &str = "all";

/// A category label attached to a card or selected in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTag(String);

impl CategoryTag {
    /// Create a tag from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The wildcard tag.
    pub fn all() -> Self {
        Self(ALL.to_string())
    }

    /// Whether this is the wildcard tag.
    #[inline]
    pub fn is_all(&self) -> bool {
        self.0 == ALL
    }

    /// The raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable label for buttons ("all" → "All", "thai" → "Thai").
    pub fn display_label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for CategoryTag {
    fn default() -> Self {
        Self::all()
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for CategoryTag {
    fn from(label: String) -> Self {
        Self(label)
    }
}
