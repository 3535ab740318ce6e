//! Application subscriptions.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Escape / Enter on the overlay |
//! | Animation | 16ms | Cards entering | Drive entrance animations |

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::time;

use crate::message::Message;
use crate::state::AppState;

/// Roughly one frame at 60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([keyboard_subscription(), animation_subscription(state)])
}

/// Keyboard event subscription.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Frame ticks while any visible card is still animating in.
///
/// Returns no subscription once every entrance has finished, so an idle
/// grid does not redraw.
fn animation_subscription(state: &AppState) -> Subscription<Message> {
    if state.browser.animating(state.frame) {
        time::every(FRAME_INTERVAL).map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}
