//! Custom widget styles.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::FlavorColors;
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - "View Recipe" and other main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let flavor = theme.flavor();

    let border = Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: flavor.text_on_accent,
            border,
            shadow: Shadow {
                color: flavor.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(flavor.accent_hover.into()),
            text_color: flavor.text_on_accent,
            border,
            shadow: Shadow {
                color: flavor.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(flavor.accent_pressed.into()),
            text_color: flavor.text_on_accent,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(flavor.border_default.into()),
            text_color: flavor.text_disabled,
            border,
            ..Default::default()
        },
    }
}

/// Ghost button style - icon buttons without a resting background.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let flavor = theme.flavor();

    let border = Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(flavor.accent_light.into()),
            text_color: palette.primary.base.color,
            border,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(flavor.accent_medium.into()),
            text_color: flavor.accent_pressed,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: flavor.text_disabled,
            border,
            ..Default::default()
        },
    }
}

/// Category chip style.
///
/// The active chip is filled with the accent tint and outlined; inactive
/// chips are outlined only.
pub fn button_chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let flavor = theme.flavor();

        let (background, text_color, border_color) = if active {
            (
                Some(flavor.accent_light.into()),
                palette.primary.base.color,
                palette.primary.base.color,
            )
        } else {
            match status {
                button::Status::Hovered => (
                    Some(flavor.accent_light.into()),
                    palette.background.base.text,
                    flavor.border_default,
                ),
                button::Status::Pressed => (
                    Some(flavor.accent_medium.into()),
                    palette.background.base.text,
                    flavor.border_default,
                ),
                button::Status::Active | button::Status::Disabled => {
                    (None, flavor.text_secondary, flavor.border_default)
                }
            }
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: spacing::BORDER_RADIUS_FULL.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: border_color,
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Recipe detail panel.
pub fn container_modal(theme: &Theme) -> container::Style {
    let flavor = theme.flavor();

    container::Style {
        background: Some(flavor.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: flavor.border_subtle,
        },
        shadow: Shadow {
            color: flavor.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Error banner.
pub fn container_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let flavor = theme.flavor();

    container::Style {
        background: Some(flavor.background_error.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Search field style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let flavor = theme.flavor();

    let (width, color) = match status {
        text_input::Status::Active | text_input::Status::Disabled => {
            (spacing::BORDER_WIDTH_THIN, flavor.border_default)
        }
        text_input::Status::Hovered => (spacing::BORDER_WIDTH_THIN, flavor.text_disabled),
        text_input::Status::Focused { .. } => {
            (spacing::BORDER_WIDTH_MEDIUM, flavor.border_focused)
        }
    };

    text_input::Style {
        background: flavor.background_elevated.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width,
            color,
        },
        icon: flavor.text_muted,
        placeholder: flavor.text_disabled,
        value: palette.background.base.text,
        selection: flavor.accent_medium,
    }
}
