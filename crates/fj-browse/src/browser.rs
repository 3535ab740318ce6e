//! Browser controller.
//!
//! [`Browser`] owns every piece of mutable browsing state and exposes one
//! named handler per user input. Each handler documents its transition; the
//! host (GUI or test) supplies the current time so that the debounce and
//! entrance animations stay deterministic.

use std::time::{Duration, Instant};

use fj_model::{CardId, CardRecord, Catalog, CategoryTag};

use crate::animation::Entrance;
use crate::category_bar::CategoryBar;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE, Ticket};
use crate::filter::{FilterState, RecomputeCause, VisibilityEngine, VisibilityReport};
use crate::overlay::{Overlay, PointerTarget};
use crate::store::KeyValueStore;
use crate::theme::{ThemeMode, ThemeStore};

/// Tunables for a [`Browser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Quiet window before search text is applied.
    pub search_debounce: Duration,
    /// Whether cards play entrance animations.
    pub animations: bool,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            search_debounce: SEARCH_DEBOUNCE,
            animations: true,
        }
    }
}

/// All browsing state for one catalog.
#[derive(Debug)]
pub struct Browser<S> {
    catalog: Catalog,
    filter: FilterState,
    categories: CategoryBar,
    engine: VisibilityEngine,
    overlay: Overlay,
    theme: ThemeStore<S>,
    search: Debouncer,
    entrances: Vec<Entrance>,
    animations: bool,
}

impl<S: KeyValueStore> Browser<S> {
    /// Create a browser with default options.
    pub fn new(catalog: Catalog, store: S, now: Instant) -> Self {
        Self::with_options(catalog, store, BrowserOptions::default(), now)
    }

    /// Create a browser.
    ///
    /// Every card starts visible with its staggered entrance running, the
    /// overlay is closed and the theme is read from `store`.
    pub fn with_options(
        catalog: Catalog,
        store: S,
        options: BrowserOptions,
        now: Instant,
    ) -> Self {
        let entrances = (0..catalog.len())
            .map(|position| Entrance::staggered(position, now))
            .collect();

        tracing::info!(
            cards = catalog.len(),
            categories = catalog.categories().len(),
            "Browser ready"
        );

        Self {
            categories: CategoryBar::for_catalog(&catalog),
            engine: VisibilityEngine::new(&catalog),
            filter: FilterState::default(),
            overlay: Overlay::new(),
            theme: ThemeStore::init(store),
            search: Debouncer::new(options.search_debounce),
            entrances,
            animations: options.animations,
            catalog,
        }
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Search text changed.
    ///
    /// Stores the text right away and (re)schedules the recomputation; any
    /// previously scheduled run is superseded. Visibility is untouched until
    /// the returned ticket settles.
    pub fn on_search_input(&mut self, text: impl Into<String>, now: Instant) -> Ticket {
        self.filter.search_query = text.into();
        self.search.schedule(now)
    }

    /// A timer for `ticket` elapsed.
    ///
    /// Recomputes with the search text as it is now, but only if `ticket`
    /// is still the latest one.
    pub fn on_search_settled(
        &mut self,
        ticket: Ticket,
        now: Instant,
    ) -> Option<VisibilityReport> {
        if self.search.fire(ticket) {
            Some(self.recompute(RecomputeCause::Search, now))
        } else {
            tracing::trace!(?ticket, "Dropping superseded search run");
            None
        }
    }

    /// Tick-driven alternative to [`Self::on_search_settled`].
    pub fn poll_search(&mut self, now: Instant) -> Option<VisibilityReport> {
        self.search
            .poll(now)
            .then(|| self.recompute(RecomputeCause::Search, now))
    }

    /// The search clear button was pressed.
    ///
    /// Empties the query, cancels any pending run and recomputes at once.
    pub fn on_search_cleared(&mut self, now: Instant) -> VisibilityReport {
        self.filter.search_query.clear();
        self.search.cancel();
        self.recompute(RecomputeCause::Search, now)
    }

    /// Whether a search recomputation is scheduled.
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Quiet window of the search debounce.
    pub fn search_window(&self) -> Duration {
        self.search.window()
    }

    // =========================================================================
    // CATEGORY
    // =========================================================================

    /// A category button was clicked.
    ///
    /// `active = A → active = tag`, then recomputes synchronously and replays
    /// the entrance of every visible card. Clicking the active or an unknown
    /// category changes nothing.
    pub fn on_category_selected(
        &mut self,
        tag: &CategoryTag,
        now: Instant,
    ) -> Option<VisibilityReport> {
        if !self.categories.select(tag) {
            return None;
        }
        self.filter.selected_category = tag.clone();
        Some(self.recompute(RecomputeCause::Category, now))
    }

    // =========================================================================
    // OVERLAY
    // =========================================================================

    /// "View recipe" on a card: `Closed | Open(_) → Open(id)`.
    ///
    /// Unknown ids are ignored.
    pub fn on_view_recipe(&mut self, id: CardId) -> bool {
        let card = self.catalog.get(id).map(|card| (id, card));
        self.overlay.open(card)
    }

    /// Close control activated: `Open(_) → Closed`.
    pub fn on_close_clicked(&mut self) -> bool {
        self.overlay.close()
    }

    /// Pointer press on the overlay; only the scrim closes it.
    pub fn on_pointer_pressed(&mut self, target: PointerTarget) -> bool {
        self.overlay.pointer_pressed(target)
    }

    /// Escape key: closes when open, ignored when closed.
    pub fn on_escape(&mut self) -> bool {
        self.overlay.escape_pressed()
    }

    /// Enter/Space on the focused overlay control.
    pub fn on_activate_focused(&mut self) -> bool {
        self.overlay.activate_focused()
    }

    // =========================================================================
    // THEME
    // =========================================================================

    /// Theme toggle clicked: flips and persists the mode.
    pub fn on_theme_toggle(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn categories(&self) -> &CategoryBar {
        &self.categories
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn theme(&self) -> &ThemeStore<S> {
        &self.theme
    }

    /// Whether a card is currently shown.
    pub fn is_visible(&self, id: CardId) -> bool {
        self.engine.is_visible(id)
    }

    /// Visible cards in catalog order.
    pub fn visible_cards(&self) -> impl Iterator<Item = (CardId, &CardRecord)> {
        self.engine
            .visible_ids()
            .filter_map(|id| self.catalog.get(id).map(|card| (id, card)))
    }

    /// Number of visible cards.
    pub fn visible_count(&self) -> usize {
        self.engine.visible_count()
    }

    /// Entrance progress of a card in `[0, 1]`; always 1 with animations off.
    pub fn entrance_progress(&self, id: CardId, now: Instant) -> f32 {
        if !self.animations {
            return 1.0;
        }
        self.entrances
            .get(id.index())
            .map_or(1.0, |entrance| entrance.progress(now))
    }

    /// Whether any visible card is still animating in.
    pub fn animating(&self, now: Instant) -> bool {
        self.animations
            && self
                .engine
                .visible_ids()
                .filter_map(|id| self.entrances.get(id.index()))
                .any(|entrance| entrance.is_running(now))
    }

    fn recompute(&mut self, cause: RecomputeCause, now: Instant) -> VisibilityReport {
        let report = self.engine.recompute(&self.catalog, &self.filter, cause);
        for id in &report.replay {
            if let Some(entrance) = self.entrances.get_mut(id.index()) {
                entrance.replay(now);
            }
        }
        report
    }
}
