//! FlavorJourney - GUI Library
//!
//! Desktop front end for the recipe browser, built with Iced 0.14 using the
//! Elm architecture. Browsing behaviour itself lives in `fj-browse`; this
//! crate maps widgets and timers onto it.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
