//! Theme module for FlavorJourney.
//!
//! - Light and dark palettes keyed by [`fj_browse::ThemeMode`] (`palette`)
//! - App-specific colors on top of Iced's extended palette (`colors`)
//! - Spacing and radius constants (`spacing`)
//! - Custom widget styles (`style`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use fj_gui::theme::{FlavorColors, flavor_theme};
//!
//! let theme = flavor_theme(ThemeMode::Dark);
//! let muted = theme.flavor().text_muted;
//! ```

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;

pub use colors::{FlavorColorSet, FlavorColors};
pub use palette::flavor_theme;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, CARD_IMAGE_HEIGHT, CARD_WIDTH, ENTRANCE_OFFSET, GRID_COLUMNS,
    MODAL_IMAGE_HEIGHT, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};
pub use style::{
    button_chip, button_ghost, button_primary, container_banner, container_modal,
    text_input_default,
};
