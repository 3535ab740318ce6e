//! Recipe detail overlay messages.

use fj_browse::PointerTarget;
use fj_model::CardId;

/// Messages that drive the detail overlay.
#[derive(Debug, Clone)]
pub enum OverlayMessage {
    /// "View Recipe" pressed on a card
    ViewRecipe(CardId),

    /// Close button pressed
    CloseClicked,

    /// Pointer pressed somewhere on the overlay
    PointerPressed(PointerTarget),

    /// Escape key
    EscapePressed,

    /// Enter on the focused overlay control
    ActivateFocused,
}
