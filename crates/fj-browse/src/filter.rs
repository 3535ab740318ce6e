//! Visibility engine.
//!
//! Decides, for every card, whether it is shown given the current search
//! text and selected category. The decision itself ([`is_visible`]) is a
//! pure function; [`VisibilityEngine`] only remembers the last outcome so it
//! can report which cards changed.

use fj_model::{CardId, CardRecord, Catalog, CategoryTag};

// =============================================================================
// FILTER STATE
// =============================================================================

/// User-controlled filter inputs.
///
/// Mutated only by input handlers and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search text as typed (untrimmed).
    pub search_query: String,
    /// Currently selected category, `"all"` by default.
    pub selected_category: CategoryTag,
}

impl FilterState {
    /// Normalized query used for matching: trimmed and lowercased.
    pub fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }
}

// =============================================================================
// PREDICATE
// =============================================================================

/// Category part of the predicate.
pub fn category_matches(selected: &CategoryTag, card: &CardRecord) -> bool {
    selected.is_all() || card.category == *selected
}

/// Title part of the predicate.
///
/// `needle` must already be normalized; an empty needle matches everything.
pub fn title_matches(needle: &str, card: &CardRecord) -> bool {
    needle.is_empty() || card.title.to_lowercase().contains(needle)
}

/// Whether `card` is shown under `filter`.
pub fn is_visible(filter: &FilterState, card: &CardRecord) -> bool {
    category_matches(&filter.selected_category, card)
        && title_matches(&filter.normalized_query(), card)
}

// =============================================================================
// RECOMPUTATION
// =============================================================================

/// What triggered a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeCause {
    /// The debounced search text settled.
    Search,
    /// A category button was selected.
    Category,
}

impl RecomputeCause {
    /// Whether cards shown by this recomputation replay their entrance.
    pub fn replays_entrance(self) -> bool {
        matches!(self, Self::Category)
    }
}

/// Outcome of a recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityReport {
    /// Number of cards visible after the pass.
    pub visible: usize,
    /// Total number of cards.
    pub total: usize,
    /// Cards hidden before and visible now.
    pub shown: Vec<CardId>,
    /// Cards visible before and hidden now.
    pub hidden: Vec<CardId>,
    /// Cards whose entrance animation must restart.
    pub replay: Vec<CardId>,
}

impl VisibilityReport {
    /// Whether any card changed visibility.
    pub fn changed(&self) -> bool {
        !self.shown.is_empty() || !self.hidden.is_empty()
    }
}

/// Per-card visibility flags for one catalog.
#[derive(Debug, Clone)]
pub struct VisibilityEngine {
    visible: Vec<bool>,
}

impl VisibilityEngine {
    /// Create an engine with every card visible, matching the default filter.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            visible: vec![true; catalog.len()],
        }
    }

    /// Re-apply the predicate to every card.
    pub fn recompute(
        &mut self,
        catalog: &Catalog,
        filter: &FilterState,
        cause: RecomputeCause,
    ) -> VisibilityReport {
        let needle = filter.normalized_query();
        let mut report = VisibilityReport {
            total: catalog.len(),
            ..Default::default()
        };

        self.visible.resize(catalog.len(), true);

        for (id, card) in catalog.iter() {
            let now_visible =
                category_matches(&filter.selected_category, card) && title_matches(&needle, card);
            let was_visible = std::mem::replace(&mut self.visible[id.index()], now_visible);

            match (was_visible, now_visible) {
                (false, true) => report.shown.push(id),
                (true, false) => report.hidden.push(id),
                _ => {}
            }

            if now_visible {
                report.visible += 1;
                if cause.replays_entrance() {
                    report.replay.push(id);
                }
            }
        }

        tracing::debug!(
            ?cause,
            query = %needle,
            category = %filter.selected_category,
            visible = report.visible,
            total = report.total,
            "Recomputed card visibility"
        );

        report
    }

    /// Last computed visibility of a card (unknown ids are hidden).
    pub fn is_visible(&self, id: CardId) -> bool {
        self.visible.get(id.index()).copied().unwrap_or(false)
    }

    /// Ids of all currently visible cards, in catalog order.
    pub fn visible_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, shown)| **shown)
            .map(|(index, _)| CardId(index))
    }

    /// Number of visible cards.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CardRecord::new("Tomato Soup", "soup", ""),
            CardRecord::new("Pad Thai", "thai", ""),
            CardRecord::new("Tom Yum", "thai", ""),
            CardRecord::new("Lasagna", "italian", ""),
        ])
    }

    fn filter(query: &str, category: &str) -> FilterState {
        FilterState {
            search_query: query.to_string(),
            selected_category: CategoryTag::new(category),
        }
    }

    #[test]
    fn test_case_insensitive_title_match() {
        let card = CardRecord::new("Tomato Soup", "soup", "");
        assert!(is_visible(&filter("TOM", "all"), &card));
        assert!(is_visible(&filter("  soup ", "all"), &card));
        assert!(!is_visible(&filter("curry", "all"), &card));
    }

    #[test]
    fn test_empty_query_matches_every_card() {
        let catalog = catalog();
        for query in ["", "   ", "\t"] {
            let f = filter(query, "all");
            assert!(catalog.iter().all(|(_, card)| is_visible(&f, card)));
        }
    }

    #[test]
    fn test_category_and_title_combined() {
        let catalog = catalog();
        let f = filter("tom", "thai");
        let visible: Vec<_> = catalog
            .iter()
            .filter(|(_, card)| is_visible(&f, card))
            .map(|(_, card)| card.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Tom Yum"]);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let card = CardRecord::new("Pad Thai", "thai", "");
        assert!(is_visible(&filter("pad thai", "all"), &card));
        assert!(!is_visible(&filter("pad  thai", "all"), &card));
    }

    #[test]
    fn test_engine_reports_changes() {
        let catalog = catalog();
        let mut engine = VisibilityEngine::new(&catalog);
        assert_eq!(engine.visible_count(), 4);

        let report = engine.recompute(&catalog, &filter("", "thai"), RecomputeCause::Category);
        assert_eq!(report.visible, 2);
        assert_eq!(report.hidden, vec![CardId(0), CardId(3)]);
        assert!(report.shown.is_empty());
        assert_eq!(report.replay, vec![CardId(1), CardId(2)]);

        let report = engine.recompute(&catalog, &filter("", "all"), RecomputeCause::Search);
        assert_eq!(report.shown, vec![CardId(0), CardId(3)]);
        assert!(report.replay.is_empty());
        assert!(engine.is_visible(CardId(3)));
        assert!(!engine.is_visible(CardId(99)));
    }

    #[test]
    fn test_unchanged_pass_reports_nothing() {
        let catalog = catalog();
        let mut engine = VisibilityEngine::new(&catalog);
        let report = engine.recompute(&catalog, &FilterState::default(), RecomputeCause::Search);
        assert!(!report.changed());
        assert_eq!(report.visible, report.total);
    }
}
