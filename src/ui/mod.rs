// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`grid`] - Reorderable grid component (state, gestures, rendering)
//! - [`image_grid`] - Image tiles hosted by the grid
//! - [`styles`] - Centralized container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod image_grid;
pub mod styles;
pub mod theming;
