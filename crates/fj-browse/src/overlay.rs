//! Recipe detail overlay.
//!
//! A two-state machine:
//!
//! ```text
//! Closed ──open(card)──▶ Open(card)
//! Open(card) ──close()──▶ Closed
//! Open(card) ──open(card2)──▶ Open(card2)
//! ```
//!
//! Re-opening while open replaces the card directly; there is never a
//! transient `Closed` in between.

use fj_model::{CardId, CardRecord};

/// Placeholder shown when a recipe lists no ingredients.
pub const NO_INGREDIENTS: &str = "No ingredients listed.";

/// Placeholder shown when a recipe lists no instructions.
pub const NO_INSTRUCTIONS: &str = "No instructions provided.";

// =============================================================================
// DETAIL VIEW
// =============================================================================

/// An ingredient or instruction section of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailList {
    /// Ordered, trimmed entries.
    Items(Vec<String>),
    /// The list was empty; a single placeholder line is shown instead.
    Placeholder(&'static str),
}

impl DetailList {
    fn build(entries: &[String], placeholder: &'static str) -> Self {
        if entries.is_empty() {
            Self::Placeholder(placeholder)
        } else {
            Self::Items(entries.iter().map(|entry| entry.trim().to_string()).collect())
        }
    }

    /// Lines to display, in order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Items(items) => items.iter().map(String::as_str).collect(),
            Self::Placeholder(text) => vec![*text],
        }
    }

    /// Whether this is the placeholder line.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Element that holds input focus while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    CloseControl,
}

/// Everything the overlay renders for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub image_url: String,
    /// Accessible description of the image; always the title.
    pub image_alt: String,
    pub ingredients: DetailList,
    pub instructions: DetailList,
    pub focus: FocusTarget,
}

impl DetailView {
    /// Populate the detail view from a card.
    pub fn from_card(card: &CardRecord) -> Self {
        Self {
            title: card.title.clone(),
            image_url: card.image_url.clone(),
            image_alt: card.title.clone(),
            ingredients: DetailList::build(&card.ingredients, NO_INGREDIENTS),
            instructions: DetailList::build(&card.instructions, NO_INSTRUCTIONS),
            focus: FocusTarget::CloseControl,
        }
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Current overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open { card: CardId, detail: DetailView },
}

/// What a pointer press landed on while the overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed backdrop around the panel.
    Scrim,
    /// The panel itself or anything inside it.
    Panel,
}

/// The detail overlay.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    state: OverlayState,
}

impl Overlay {
    /// Create a closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Whether the overlay is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    /// Whether the overlay takes part in layout.
    pub fn is_displayed(&self) -> bool {
        self.is_open()
    }

    /// Accessibility hidden flag, the inverse of [`Self::is_displayed`].
    pub fn aria_hidden(&self) -> bool {
        !self.is_open()
    }

    /// Id of the card being shown.
    pub fn card(&self) -> Option<CardId> {
        match &self.state {
            OverlayState::Open { card, .. } => Some(*card),
            OverlayState::Closed => None,
        }
    }

    /// Detail view of the card being shown.
    pub fn detail(&self) -> Option<&DetailView> {
        match &self.state {
            OverlayState::Open { detail, .. } => Some(detail),
            OverlayState::Closed => None,
        }
    }

    /// Element holding focus, if open.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.detail().map(|detail| detail.focus)
    }

    /// `Closed | Open(_) → Open(card)`.
    ///
    /// A missing card is a silent no-op; returns whether the overlay opened.
    pub fn open(&mut self, card: Option<(CardId, &CardRecord)>) -> bool {
        let Some((id, record)) = card else {
            tracing::debug!("Ignoring overlay open without a card");
            return false;
        };

        self.state = OverlayState::Open {
            card: id,
            detail: DetailView::from_card(record),
        };
        tracing::debug!(card = %id, title = %record.title, "Opened recipe overlay");
        true
    }

    /// `Open(_) → Closed`; closing a closed overlay does nothing.
    ///
    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = OverlayState::Closed;
        tracing::debug!("Closed recipe overlay");
        true
    }

    /// Pointer press while shown; only the scrim dismisses.
    pub fn pointer_pressed(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Scrim => self.close(),
            PointerTarget::Panel => false,
        }
    }

    /// Escape key; ignored entirely while closed.
    pub fn escape_pressed(&mut self) -> bool {
        if self.is_open() { self.close() } else { false }
    }

    /// Activate the focused element (Enter/Space).
    pub fn activate_focused(&mut self) -> bool {
        match self.focus() {
            Some(FocusTarget::CloseControl) => self.close(),
            None => false,
        }
    }
}
