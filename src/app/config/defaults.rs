// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration.

pub use crate::ui::grid::{DEFAULT_COLUMNS, DEFAULT_SPACING};

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Minimum column count accepted from configuration.
///
/// The grid itself tolerates zero columns; user configuration does not.
pub const MIN_COLUMNS: usize = 1;

/// Maximum column count accepted from configuration.
pub const MAX_COLUMNS: usize = 12;

/// Minimum gap between tiles, in logical pixels.
pub const MIN_SPACING: f32 = 0.0;

/// Maximum gap between tiles, in logical pixels.
pub const MAX_SPACING: f32 = 64.0;

/// Whether tiles are draggable when nothing is configured.
pub const DEFAULT_DRAGGABLE: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width. Also seeds the grid width before the first resize.
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

// ==========================================================================
// Validation
// ==========================================================================

const _: () = {
    assert!(MIN_COLUMNS > 0);
    assert!(MIN_COLUMNS <= DEFAULT_COLUMNS);
    assert!(DEFAULT_COLUMNS <= MAX_COLUMNS);
    assert!(MIN_SPACING <= DEFAULT_SPACING);
    assert!(DEFAULT_SPACING <= MAX_SPACING);
    assert!(DEFAULT_WINDOW_WIDTH > 0.0);
};
