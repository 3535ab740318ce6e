//! Recipe card records.

use serde::{Deserialize, Serialize};

use crate::category::CategoryTag;

/// Separator used by attribute-style list fields (`"Chop||Simmer"`).
pub const LIST_SEPARATOR: &str = "||";

/// Position of a card in its catalog.
///
/// Cards are never created or destroyed at runtime, so the index is a stable
/// identity for the lifetime of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl CardId {
    /// The underlying index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One recipe card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub title: String,
    pub category: CategoryTag,
    #[serde(rename = "image", default)]
    pub image_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl CardRecord {
    /// Create a card with no ingredients or instructions.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<CategoryTag>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image_url: image_url.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Set the ingredient lines.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instruction steps.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Build a card from host-page style attributes.
    ///
    /// `data_title` wins over the heading text and `data_image` over the
    /// image source. List attributes are split on [`LIST_SEPARATOR`] with
    /// empty segments dropped; segments are otherwise kept verbatim.
    pub fn from_attributes(attrs: CardAttributes) -> Self {
        let title = attrs
            .data_title
            .filter(|t| !t.is_empty())
            .unwrap_or(attrs.heading);
        let image_url = attrs
            .data_image
            .filter(|i| !i.is_empty())
            .unwrap_or(attrs.image_src);

        Self {
            title,
            category: attrs.category,
            image_url,
            ingredients: split_list(attrs.data_ingredients.as_deref()),
            instructions: split_list(attrs.data_instructions.as_deref()),
        }
    }
}

/// Raw attributes of a pre-rendered card element.
#[derive(Debug, Clone, Default)]
pub struct CardAttributes {
    /// Visible heading text of the card.
    pub heading: String,
    /// Source of the card's thumbnail image.
    pub image_src: String,
    pub category: CategoryTag,
    pub data_title: Option<String>,
    pub data_image: Option<String>,
    pub data_ingredients: Option<String>,
    pub data_instructions: Option<String>,
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(LIST_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> CardAttributes {
        CardAttributes {
            heading: "Pad Thai".to_string(),
            image_src: "thumbs/pad-thai.jpg".to_string(),
            category: CategoryTag::new("thai"),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_attributes_falls_back_to_heading_and_image() {
        let card = CardRecord::from_attributes(attrs());
        assert_eq!(card.title, "Pad Thai");
        assert_eq!(card.image_url, "thumbs/pad-thai.jpg");
        assert!(card.ingredients.is_empty());
        assert!(card.instructions.is_empty());
    }

    #[test]
    fn test_from_attributes_prefers_data_fields() {
        let card = CardRecord::from_attributes(CardAttributes {
            data_title: Some("Pad Thai (Classic)".to_string()),
            data_image: Some("full/pad-thai.jpg".to_string()),
            ..attrs()
        });
        assert_eq!(card.title, "Pad Thai (Classic)");
        assert_eq!(card.image_url, "full/pad-thai.jpg");
    }

    #[test]
    fn test_list_split_drops_empty_segments() {
        let card = CardRecord::from_attributes(CardAttributes {
            data_ingredients: Some("rice noodles|| tamarind ||||".to_string()),
            data_instructions: Some(String::new()),
            ..attrs()
        });
        // Whitespace is preserved here; trimming is a display concern.
        assert_eq!(card.ingredients, vec!["rice noodles", " tamarind "]);
        assert!(card.instructions.is_empty());
    }

    #[test]
    fn test_builder() {
        let card = CardRecord::new("Tomato Soup", "soup", "soup.jpg")
            .with_ingredients(["tomatoes"])
            .with_instructions(["simmer", "blend"]);
        assert_eq!(card.category, CategoryTag::new("soup"));
        assert_eq!(card.ingredients.len(), 1);
        assert_eq!(card.instructions.len(), 2);
    }
}
