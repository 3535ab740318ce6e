//! Message module for FlavorJourney.
//!
//! All user interactions and events flow through these message types.

pub mod browse;
pub mod overlay;

use std::time::Instant;

use iced::keyboard;

pub use browse::BrowseMessage;
pub use overlay::OverlayMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Search field and category chip messages
    Browse(BrowseMessage),

    /// Recipe detail overlay messages
    Overlay(OverlayMessage),

    /// Theme toggle button pressed
    ToggleTheme,

    /// Global keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Animation tick while cards are entering
    AnimationFrame(Instant),

    /// Error banner dismissed
    DismissError,

    /// No operation
    Noop,
}
