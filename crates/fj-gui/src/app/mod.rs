//! Main application module for FlavorJourney.
//!
//! Implements the Iced 0.14 application: State → Message → Update → View.
//! All state changes happen in [`App::update`]; views are pure functions
//! of [`AppState`].

mod keyboard;
mod subscription;

use std::time::Instant;

use fj_browse::FileStore;
use iced::{Element, Subscription, Task, Theme};

use crate::handler::{BrowseHandler, MessageHandler, OverlayHandler};
use crate::message::Message;
use crate::service::load_catalog;
use crate::state::{AppState, Settings};
use crate::theme::flavor_theme;
use crate::view::view_browse;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application.
    ///
    /// Loads settings, the catalog and the stored theme. Nothing here can
    /// fail hard: every problem degrades to defaults and is logged.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let loaded = load_catalog(settings.catalog.path.as_deref());
        let store = FileStore::open_default();

        let app = Self {
            state: AppState::new(settings, loaded, store, Instant::now()),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browse(msg) => BrowseHandler.handle(&mut self.state, msg),
            Message::Overlay(msg) => OverlayHandler.handle(&mut self.state, msg),

            Message::ToggleTheme => {
                let mode = self.state.browser.on_theme_toggle();
                tracing::info!(%mode, "Theme toggled");
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::AnimationFrame(now) => {
                self.state.frame = now;
                Task::none()
            }

            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        view_browse(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        "FlavorJourney".to_string()
    }

    /// Theme for the stored light/dark mode.
    pub fn theme(&self) -> Theme {
        flavor_theme(self.state.browser.theme().mode())
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
