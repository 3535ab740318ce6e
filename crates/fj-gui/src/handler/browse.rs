//! Search and category handler.
//!
//! Search edits are debounced: every edit schedules a timer task carrying a
//! [`fj_browse::Ticket`], and only the newest ticket filters the grid when
//! its timer fires.

use std::time::Instant;

use iced::Task;

use crate::handler::MessageHandler;
use crate::message::{BrowseMessage, Message};
use crate::state::AppState;

/// Handler for search field and category chip messages.
pub struct BrowseHandler;

impl MessageHandler<BrowseMessage> for BrowseHandler {
    fn handle(&self, state: &mut AppState, msg: BrowseMessage) -> Task<Message> {
        match msg {
            BrowseMessage::SearchChanged(text) => {
                let ticket = state.browser.on_search_input(text, Instant::now());
                let window = state.browser.search_window();
                // The sleep is built inside the future so it binds to Iced's runtime.
                Task::perform(
                    async move { tokio::time::sleep(window).await },
                    move |()| Message::Browse(BrowseMessage::SearchSettled(ticket)),
                )
            }

            BrowseMessage::SearchSettled(ticket) => {
                let now = Instant::now();
                if let Some(report) = state.browser.on_search_settled(ticket, now) {
                    tracing::debug!(
                        query = %state.browser.filter().search_query,
                        visible = report.visible,
                        "Search applied"
                    );
                    state.frame = now;
                }
                Task::none()
            }

            BrowseMessage::SearchCleared => {
                let now = Instant::now();
                let report = state.browser.on_search_cleared(now);
                tracing::debug!(visible = report.visible, "Search cleared");
                state.frame = now;
                Task::none()
            }

            BrowseMessage::CategorySelected(tag) => {
                let now = Instant::now();
                if let Some(report) = state.browser.on_category_selected(&tag, now) {
                    tracing::info!(category = %tag, visible = report.visible, "Category selected");
                    state.frame = now;
                }
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fj_model::{CardId, CategoryTag};

    use super::*;
    use crate::handler::test_support::test_state;

    fn settle_latest(state: &mut AppState) {
        // Timers are not run in unit tests; fire the pending search directly.
        let due = state.browser.search_window();
        state.browser.poll_search(Instant::now() + due);
    }

    #[test]
    fn search_change_defers_filtering() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = BrowseHandler.handle(&mut state, BrowseMessage::SearchChanged("soup".into()));

        assert_eq!(state.browser.filter().search_query, "soup");
        assert!(state.browser.search_pending());
        assert_eq!(state.browser.visible_count(), 3);

        settle_latest(&mut state);
        assert_eq!(state.browser.visible_count(), 1);
        assert!(state.browser.is_visible(CardId(0)));
    }

    #[test]
    fn clear_filters_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = BrowseHandler.handle(&mut state, BrowseMessage::SearchChanged("lasagna".into()));
        settle_latest(&mut state);
        assert_eq!(state.browser.visible_count(), 1);

        let _ = BrowseHandler.handle(&mut state, BrowseMessage::SearchCleared);
        assert!(!state.browser.search_pending());
        assert_eq!(state.browser.filter().search_query, "");
        assert_eq!(state.browser.visible_count(), 3);
    }

    #[test]
    fn category_selection_is_synchronous() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = BrowseHandler.handle(
            &mut state,
            BrowseMessage::CategorySelected(CategoryTag::new("italian")),
        );

        assert_eq!(state.browser.visible_count(), 1);
        assert!(state.browser.is_visible(CardId(1)));
        assert!(state.browser.categories().is_active(&CategoryTag::new("italian")));
    }

    #[test]
    fn unknown_category_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = BrowseHandler.handle(
            &mut state,
            BrowseMessage::CategorySelected(CategoryTag::new("thai")),
        );

        assert!(state.browser.categories().is_active(&CategoryTag::all()));
        assert_eq!(state.browser.visible_count(), 3);
    }
}
