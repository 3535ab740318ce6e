//! Search and category messages.

use fj_browse::Ticket;
use fj_model::CategoryTag;

/// Messages from the search field and the category chip bar.
#[derive(Debug, Clone)]
pub enum BrowseMessage {
    /// Search text edited
    SearchChanged(String),

    /// Search clear button pressed
    SearchCleared,

    /// Debounce timer for a search edit elapsed
    SearchSettled(Ticket),

    /// Category chip pressed
    CategorySelected(CategoryTag),
}
