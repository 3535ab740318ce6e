//! End-to-end message flow through the application.

use std::time::Instant;

use fj_browse::{FileStore, PointerTarget, ThemeMode};
use fj_gui::App;
use fj_gui::message::{BrowseMessage, Message, OverlayMessage};
use fj_gui::service::load_catalog;
use fj_gui::state::{AppState, Settings};
use fj_model::{CardId, CategoryTag};

const CATALOG: &str = r#"
[[recipe]]
title = "Tomato Soup"
category = "soup"
image = "img/soup.png"
ingredients = ["tomatoes", "onion"]
instructions = ["Simmer"]

[[recipe]]
title = "Lasagna"
category = "italian"

[[recipe]]
title = "Minestrone"
category = "soup"
"#;

fn app_in(dir: &std::path::Path) -> App {
    let catalog_path = dir.join("recipes.toml");
    std::fs::write(&catalog_path, CATALOG).unwrap();

    let settings_path = dir.join("settings.toml");
    let mut settings = Settings::default();
    settings.catalog.path = Some(catalog_path);
    settings.browse.animations = false;
    settings.save_to(&settings_path).unwrap();

    let settings = Settings::load_from(&settings_path);
    let loaded = load_catalog(settings.catalog.path.as_deref());
    assert!(loaded.error.is_none());

    let store = FileStore::open(&dir.join("preferences.toml"));
    App {
        state: AppState::new(settings, loaded, store, Instant::now()),
    }
}

#[test]
fn configured_catalog_drives_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(dir.path());

    assert_eq!(app.state.browser.catalog().len(), 3);
    assert_eq!(app.state.browser.visible_count(), 3);
    assert_eq!(
        app.state.image_path(CardId(0)),
        Some(dir.path().join("img/soup.png").as_path())
    );
    assert_eq!(app.state.image_path(CardId(1)), None);
    // Animations are off in these settings.
    assert!(!app.state.browser.animating(app.state.frame));
    assert_eq!(app.state.browser.entrance_progress(CardId(2), app.state.frame), 1.0);
}

#[test]
fn category_then_overlay_then_escape() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());

    let _ = app.update(Message::Browse(BrowseMessage::CategorySelected(
        CategoryTag::new("soup"),
    )));
    assert_eq!(app.state.browser.visible_count(), 2);
    assert!(!app.state.browser.is_visible(CardId(1)));

    let _ = app.update(Message::Overlay(OverlayMessage::ViewRecipe(CardId(2))));
    assert_eq!(app.state.browser.overlay().card(), Some(CardId(2)));

    let _ = app.update(Message::Overlay(OverlayMessage::PointerPressed(
        PointerTarget::Panel,
    )));
    assert!(app.state.browser.overlay().is_open());

    let _ = app.update(Message::Overlay(OverlayMessage::EscapePressed));
    assert!(!app.state.browser.overlay().is_open());
}

#[test]
fn stale_search_tickets_do_not_filter() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());

    let first = app
        .state
        .browser
        .on_search_input("lasagna", Instant::now());
    let _ = app.update(Message::Browse(BrowseMessage::SearchChanged("soup".into())));

    let _ = app.update(Message::Browse(BrowseMessage::SearchSettled(first)));
    assert_eq!(app.state.browser.visible_count(), 3);
    assert!(app.state.browser.search_pending());
}

#[test]
fn theme_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    assert_eq!(app.state.browser.theme().mode(), ThemeMode::Light);

    let _ = app.update(Message::ToggleTheme);
    drop(app);

    let app = app_in(dir.path());
    assert_eq!(app.state.browser.theme().mode(), ThemeMode::Dark);
    assert!(app.theme().extended_palette().is_dark);
}

#[test]
fn broken_catalog_falls_back_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[[recipe]]\ntitle = \"\"\ncategory = \"soup\"\n").unwrap();

    let loaded = load_catalog(Some(&path));
    assert!(loaded.error.is_some());
    assert!(!loaded.catalog.is_empty());

    let store = FileStore::open(&dir.path().join("preferences.toml"));
    let mut app = App {
        state: AppState::new(Settings::default(), loaded, store, Instant::now()),
    };
    assert!(app.state.error.is_some());

    let _ = app.update(Message::DismissError);
    assert!(app.state.error.is_none());
}
