//! FlavorJourney - recipe browser desktop application.

use anyhow::Context;
use fj_gui::App;
use iced::{Size, window};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Logging defaults to `info` and honours `RUST_LOG`.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting FlavorJourney");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1080.0, 800.0),
            min_size: Some(Size::new(720.0, 560.0)),
            ..Default::default()
        })
        .run()
        .context("FlavorJourney exited with an error")
}
