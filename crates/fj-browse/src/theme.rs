//! Persisted light/dark theme flag.
//!
//! The flag lives in a [`KeyValueStore`] under [`THEME_KEY`] as the literal
//! `"dark"` or `"light"`. Storage problems never stop the toggle from
//! working; they only mean the choice is forgotten on restart.

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "flavorjourney-theme";

/// Glyph advertising a switch to light mode (shown while dark).
pub const LIGHT_MODE_GLYPH: &str = "☀️";

/// Glyph advertising a switch to dark mode (shown while light).
pub const DARK_MODE_GLYPH: &str = "🌙";

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything but `"dark"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph state of the theme toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleGlyph {
    /// Never touched since startup in light mode.
    #[default]
    Unset,
    /// Offers light mode.
    LightModeIcon,
    /// Offers dark mode.
    DarkModeIcon,
}

impl ToggleGlyph {
    fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::LightModeIcon,
            ThemeMode::Light => Self::DarkModeIcon,
        }
    }

    /// Text to render; an unset glyph shows the dark-mode icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LightModeIcon => LIGHT_MODE_GLYPH,
            Self::DarkModeIcon | Self::Unset => DARK_MODE_GLYPH,
        }
    }
}

// =============================================================================
// THEME STORE
// =============================================================================

/// Theme flag bound to its persistence.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    mode: ThemeMode,
    glyph: ToggleGlyph,
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Initialise from persisted storage.
    pub fn init(store: S) -> Self {
        let mode = ThemeMode::from_stored(store.get(THEME_KEY).as_deref());
        let glyph = match mode {
            ThemeMode::Dark => ToggleGlyph::LightModeIcon,
            ThemeMode::Light => ToggleGlyph::Unset,
        };
        tracing::info!(%mode, "Initialised theme");
        Self { mode, glyph, store }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.glyph = ToggleGlyph::for_mode(self.mode);

        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            tracing::warn!(mode = %self.mode, "Theme preference not saved: {}", e);
        }

        self.mode
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Current glyph of the toggle control.
    pub fn glyph(&self) -> ToggleGlyph {
        self.glyph
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}
