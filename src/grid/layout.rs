// SPDX-License-Identifier: MPL-2.0
//! Layout parameters derived from the container width and grid settings.

use super::geometry::GridMetrics;

/// Tile width never drops below this many pixels when columns are set.
pub const MIN_TILE_WIDTH: f32 = 40.0;

/// Tiles are 25% taller than they are wide.
pub const TILE_ASPECT_RATIO: f32 = 1.25;

/// Derived layout of the grid. Recomputed whenever the container width or
/// item count changes; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Columns used for placement (at least 1).
    pub columns: usize,
    pub spacing: f32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub container_height: f32,
    pub item_count: usize,
}

impl GridLayout {
    /// Computes the layout for `item_count` tiles in a container `container_width` wide.
    ///
    /// With `columns == 0` the tile spans the container minus its outer
    /// spacing, and placement falls back to a single column.
    #[must_use]
    pub fn compute(container_width: f32, columns: usize, spacing: f32, item_count: usize) -> Self {
        let tile_width = if columns > 0 {
            let gutters = spacing * (columns as f32 + 1.0);
            ((container_width - gutters) / columns as f32).max(MIN_TILE_WIDTH)
        } else {
            container_width - spacing * 2.0
        };
        let tile_height = tile_width * TILE_ASPECT_RATIO;

        let safe_columns = columns.max(1);
        let rows = item_count.max(1).div_ceil(safe_columns);
        let container_height = rows as f32 * (tile_height + spacing) + spacing;

        Self {
            columns: safe_columns,
            spacing,
            tile_width,
            tile_height,
            container_height,
            item_count,
        }
    }

    /// Width spanned by the tiles and their gutters. Exceeds the container
    /// when tile widths are floored.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.columns as f32 * (self.tile_width + self.spacing) + self.spacing
    }

    /// Metrics handed to the geometry mapper.
    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics {
            columns: self.columns,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            spacing: self.spacing,
        }
    }
}
