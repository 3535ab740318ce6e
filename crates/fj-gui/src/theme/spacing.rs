//! Spacing and sizing constants.
//!
//! All values are in logical pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Icon margins, chip gaps
pub const SPACING_SM: f32 = 8.0;

/// Default padding
pub const SPACING_MD: f32 = 16.0;

/// Section padding, grid gutters
pub const SPACING_LG: f32 = 24.0;

/// Page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Cards
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Overlay panel
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Category chips
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

pub const CARD_WIDTH: f32 = 300.0;

pub const CARD_IMAGE_HEIGHT: f32 = 180.0;

pub const MODAL_WIDTH: f32 = 640.0;

pub const MODAL_IMAGE_HEIGHT: f32 = 260.0;

/// How far a card starts below its resting place when it animates in.
pub const ENTRANCE_OFFSET: f32 = 24.0;
