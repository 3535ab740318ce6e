//! Light and dark palettes.
//!
//! Warm, food-photography friendly colors: a paprika accent over cream in
//! light mode and over charcoal in dark mode.

use fj_browse::ThemeMode;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Create the application theme for a mode.
pub fn flavor_theme(mode: ThemeMode) -> Theme {
    let (name, palette) = match mode {
        ThemeMode::Light => ("FlavorJourney Light", light()),
        ThemeMode::Dark => ("FlavorJourney Dark", dark()),
    };
    Theme::custom(name.to_string(), palette)
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.99, 0.97, 0.94), // Cream #FCF7F0
        text: Color::from_rgb(0.16, 0.12, 0.10),       // Espresso #291F1A
        primary: Color::from_rgb(0.85, 0.36, 0.20),    // Paprika #D95C33
        success: Color::from_rgb(0.33, 0.60, 0.30),    // Basil
        warning: Color::from_rgb(0.93, 0.68, 0.16),    // Saffron
        danger: Color::from_rgb(0.78, 0.20, 0.22),     // Chili
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.11, 0.10, 0.10), // Charcoal #1C1A19
        text: Color::from_rgb(0.94, 0.91, 0.87),       // Linen #F0E8DE
        primary: Color::from_rgb(0.95, 0.48, 0.30),    // Paprika, lifted for contrast
        success: Color::from_rgb(0.45, 0.72, 0.42),
        warning: Color::from_rgb(0.96, 0.75, 0.30),
        danger: Color::from_rgb(0.90, 0.35, 0.35),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_matching_brightness() {
        assert!(!flavor_theme(ThemeMode::Light).extended_palette().is_dark);
        assert!(flavor_theme(ThemeMode::Dark).extended_palette().is_dark);
    }
}
