//! Mutually exclusive category selection.

use fj_model::{Catalog, CategoryTag};

/// The row of category buttons.
///
/// Exactly one option is active at all times. The wildcard is always the
/// first option and active initially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBar {
    options: Vec<CategoryTag>,
    active: usize,
}

impl CategoryBar {
    /// Build the bar for a catalog: `"all"` followed by the catalog's categories.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut options = vec![CategoryTag::all()];
        options.extend(catalog.categories());
        Self { options, active: 0 }
    }

    /// All options in display order.
    pub fn options(&self) -> &[CategoryTag] {
        &self.options
    }

    /// The active option.
    pub fn active(&self) -> &CategoryTag {
        &self.options[self.active]
    }

    /// Whether `tag` is the active option.
    pub fn is_active(&self, tag: &CategoryTag) -> bool {
        self.active() == tag
    }

    /// Make `tag` the active option.
    ///
    /// Returns `false` without changing anything when `tag` is already
    /// active or is not one of the options.
    pub fn select(&mut self, tag: &CategoryTag) -> bool {
        match self.options.iter().position(|option| option == tag) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            Some(_) => false,
            None => {
                tracing::warn!(category = %tag, "Ignoring selection of unknown category");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fj_model::CardRecord;

    fn bar() -> CategoryBar {
        CategoryBar::for_catalog(&Catalog::new(vec![
            CardRecord::new("Pad Thai", "thai", ""),
            CardRecord::new("Lasagna", "italian", ""),
        ]))
    }

    fn active_count(bar: &CategoryBar) -> usize {
        bar.options().iter().filter(|tag| bar.is_active(tag)).count()
    }

    #[test]
    fn test_starts_on_wildcard() {
        let bar = bar();
        assert!(bar.active().is_all());
        assert_eq!(bar.options().len(), 3);
        assert_eq!(active_count(&bar), 1);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut bar = bar();
        assert!(bar.select(&CategoryTag::new("thai")));
        assert_eq!(active_count(&bar), 1);
        assert!(bar.select(&CategoryTag::new("italian")));
        assert_eq!(active_count(&bar), 1);
        assert!(bar.is_active(&CategoryTag::new("italian")));
        assert!(!bar.is_active(&CategoryTag::new("thai")));
    }

    #[test]
    fn test_reselect_is_not_a_toggle() {
        let mut bar = bar();
        bar.select(&CategoryTag::new("thai"));
        assert!(!bar.select(&CategoryTag::new("thai")));
        assert!(bar.is_active(&CategoryTag::new("thai")));
    }

    #[test]
    fn test_unknown_category_ignored() {
        let mut bar = bar();
        bar.select(&CategoryTag::new("thai"));
        assert!(!bar.select(&CategoryTag::new("french")));
        assert!(bar.is_active(&CategoryTag::new("thai")));
        assert_eq!(active_count(&bar), 1);
    }
}
