//! Recipe detail overlay handler.

use iced::Task;

use crate::handler::MessageHandler;
use crate::message::{Message, OverlayMessage};
use crate::state::AppState;

/// Handler for overlay messages.
pub struct OverlayHandler;

impl MessageHandler<OverlayMessage> for OverlayHandler {
    fn handle(&self, state: &mut AppState, msg: OverlayMessage) -> Task<Message> {
        let browser = &mut state.browser;
        let changed = match msg {
            OverlayMessage::ViewRecipe(id) => browser.on_view_recipe(id),
            OverlayMessage::CloseClicked => browser.on_close_clicked(),
            OverlayMessage::PointerPressed(target) => browser.on_pointer_pressed(target),
            OverlayMessage::EscapePressed => browser.on_escape(),
            OverlayMessage::ActivateFocused => browser.on_activate_focused(),
        };

        if !changed {
            tracing::trace!(overlay_open = browser.overlay().is_open(), "Overlay unchanged");
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use fj_browse::{NO_INSTRUCTIONS, PointerTarget};
    use fj_model::CardId;

    use super::*;
    use crate::handler::test_support::test_state;

    #[test]
    fn view_recipe_opens_and_close_button_closes() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ViewRecipe(CardId(0)));
        let overlay = state.browser.overlay();
        assert!(overlay.is_open());
        assert_eq!(overlay.card(), Some(CardId(0)));
        let detail = overlay.detail().unwrap();
        assert_eq!(detail.title, "Tomato Soup");
        assert_eq!(detail.ingredients.lines(), vec!["tomatoes", "onion"]);

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::CloseClicked);
        assert!(!state.browser.overlay().is_open());
    }

    #[test]
    fn missing_lists_show_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ViewRecipe(CardId(1)));
        let detail = state.browser.overlay().detail().unwrap();
        assert!(detail.ingredients.is_placeholder());
        assert_eq!(detail.instructions.lines(), vec![NO_INSTRUCTIONS]);
    }

    #[test]
    fn only_the_scrim_closes() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());
        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ViewRecipe(CardId(2)));

        let _ = OverlayHandler.handle(
            &mut state,
            OverlayMessage::PointerPressed(PointerTarget::Panel),
        );
        assert!(state.browser.overlay().is_open());

        let _ = OverlayHandler.handle(
            &mut state,
            OverlayMessage::PointerPressed(PointerTarget::Scrim),
        );
        assert!(!state.browser.overlay().is_open());
    }

    #[test]
    fn escape_and_enter_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::EscapePressed);
        assert!(!state.browser.overlay().is_open());

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ViewRecipe(CardId(0)));
        let _ = OverlayHandler.handle(&mut state, OverlayMessage::EscapePressed);
        assert!(!state.browser.overlay().is_open());

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ViewRecipe(CardId(0)));
        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ActivateFocused);
        assert!(!state.browser.overlay().is_open());
    }

    #[test]
    fn unknown_card_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());

        let _ = OverlayHandler.handle(&mut state, OverlayMessage::ViewRecipe(CardId(99)));
        assert!(!state.browser.overlay().is_open());
    }
}
