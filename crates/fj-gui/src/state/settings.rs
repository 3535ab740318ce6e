//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup. A missing file is replaced by
//! the defaults so users have something to edit.

use std::path::{Path, PathBuf};
use std::time::Duration;

use fj_browse::{BrowserOptions, SEARCH_DEBOUNCE};
use serde::{Deserialize, Serialize};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where recipes come from.
    pub catalog: CatalogSettings,

    /// Search and grid behaviour.
    pub browse: BrowseSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save_to(&path) {
                tracing::warn!(path = %path.display(), "Could not write default settings: {}", e);
            }
            return settings;
        }
        Self::load_from(&path)
    }

    /// Load settings from a specific path.
    ///
    /// Unreadable or malformed files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Ignoring malformed settings: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Get the settings file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "FlavorJourney", "FlavorJourney")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Options for the browsing controller.
    pub fn browser_options(&self) -> BrowserOptions {
        BrowserOptions {
            search_debounce: self.browse.search_debounce(),
            animations: self.browse.animations,
        }
    }
}

// =============================================================================
// CATALOG SETTINGS
// =============================================================================

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file to load instead of the built-in recipes.
    pub path: Option<PathBuf>,
}

// =============================================================================
// BROWSE SETTINGS
// =============================================================================

/// Search and grid behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseSettings {
    /// Quiet period after the last keystroke before the grid is filtered.
    pub search_debounce_ms: u64,

    /// Play card entrance animations.
    pub animations: bool,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            search_debounce_ms: u64::try_from(SEARCH_DEBOUNCE.as_millis()).unwrap_or(160),
            animations: true,
        }
    }
}

impl BrowseSettings {
    /// Debounce window as a duration.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_browser() {
        let settings = Settings::default();
        assert_eq!(settings.browse.search_debounce_ms, 160);
        assert!(settings.browse.animations);
        assert_eq!(settings.catalog.path, None);
        assert_eq!(settings.browser_options(), BrowserOptions::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[browse]\nanimations = false\n").unwrap();
        assert!(!settings.browse.animations);
        assert_eq!(settings.browse.search_debounce_ms, 160);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.catalog.path = Some(PathBuf::from("/srv/recipes.toml"));
        settings.browse.search_debounce_ms = 250;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "browse = 12").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
