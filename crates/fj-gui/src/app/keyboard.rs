//! Keyboard handling.
//!
//! - Escape closes the recipe overlay
//! - Enter activates the focused overlay control (the close button)

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::{Message, OverlayMessage};

impl App {
    /// Handle a global key press.
    #[allow(clippy::needless_pass_by_value)]
    pub(super) fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let overlay_open = self.state.browser.overlay().is_open();
        match overlay_key_action(&key, overlay_open) {
            Some(msg) => Task::done(Message::Overlay(msg)),
            None => Task::none(),
        }
    }
}

/// Overlay message for a key, if the key means anything right now.
///
/// Keys are ignored entirely while the overlay is closed so typing in the
/// search field is never intercepted.
fn overlay_key_action(key: &keyboard::Key, overlay_open: bool) -> Option<OverlayMessage> {
    if !overlay_open {
        return None;
    }
    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => Some(OverlayMessage::EscapePressed),
        keyboard::Key::Named(Named::Enter) => Some(OverlayMessage::ActivateFocused),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_enter_map_while_open() {
        let escape = keyboard::Key::Named(Named::Escape);
        let enter = keyboard::Key::Named(Named::Enter);

        assert!(matches!(
            overlay_key_action(&escape, true),
            Some(OverlayMessage::EscapePressed)
        ));
        assert!(matches!(
            overlay_key_action(&enter, true),
            Some(OverlayMessage::ActivateFocused)
        ));
    }

    #[test]
    fn keys_ignored_while_closed() {
        let escape = keyboard::Key::Named(Named::Escape);
        assert!(overlay_key_action(&escape, false).is_none());
    }

    #[test]
    fn other_keys_ignored() {
        let key = keyboard::Key::Character("q".into());
        assert!(overlay_key_action(&key, true).is_none());
    }
}
