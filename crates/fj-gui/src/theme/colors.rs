//! FlavorJourney color extension trait.
//!
//! Adds app-specific colors to Iced's `Theme`, derived from its extended
//! palette so both modes stay consistent.
//!
//! ```rust,ignore
//! use crate::theme::FlavorColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.flavor().background_elevated.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

/// Colors not covered by Iced's `ExtendedPalette`.
#[derive(Debug, Clone, Copy)]
pub struct FlavorColorSet {
    // === Accent ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    /// Tinted background for the active category chip.
    pub accent_light: Color,
    pub accent_medium: Color,

    // === Backgrounds ===
    /// Cards and the overlay panel.
    pub background_elevated: Color,
    /// Image placeholders.
    pub background_inset: Color,
    /// Error banner.
    pub background_error: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,

    // === Text ===
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Special ===
    pub shadow: Color,
    pub shadow_strong: Color,
    /// Overlay scrim.
    pub backdrop: Color,
}

/// Extension trait for app-specific colors.
pub trait FlavorColors {
    /// Get the FlavorJourney color set for this theme.
    fn flavor(&self) -> FlavorColorSet;
}

impl FlavorColors for Theme {
    fn flavor(&self) -> FlavorColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;

        FlavorColorSet {
            accent_hover: palette.primary.strong.color,
            accent_pressed: blend_color(primary, Color::BLACK, if is_dark { 0.20 } else { 0.15 }),
            accent_light: if is_dark {
                Color { a: 0.15, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.88)
            },
            accent_medium: if is_dark {
                Color { a: 0.25, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.70)
            },

            background_elevated: if is_dark {
                Color::from_rgb(0.17, 0.15, 0.14)
            } else {
                Color::WHITE
            },
            background_inset: if is_dark {
                Color::from_rgb(0.08, 0.07, 0.07)
            } else {
                Color::from_rgb(0.95, 0.92, 0.88)
            },
            background_error: if is_dark {
                Color {
                    a: 0.18,
                    ..palette.danger.base.color
                }
            } else {
                blend_color(palette.danger.base.color, Color::WHITE, 0.85)
            },

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.22, 0.20, 0.19)
            } else {
                Color::from_rgb(0.91, 0.88, 0.84)
            },
            border_focused: primary,

            text_secondary: if is_dark {
                Color::from_rgb(0.82, 0.78, 0.74)
            } else {
                Color::from_rgb(0.32, 0.27, 0.24)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.62, 0.58, 0.55)
            } else {
                Color::from_rgb(0.52, 0.47, 0.44)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.42, 0.39, 0.37)
            } else {
                Color::from_rgb(0.68, 0.64, 0.61)
            },
            text_on_accent: Color::WHITE,

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.40 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.70 } else { 0.50 }),
        }
    }
}

/// Blend two colors together.
///
/// `factor` of 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
