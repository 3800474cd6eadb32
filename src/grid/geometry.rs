// SPDX-License-Identifier: MPL-2.0
//! Slot ↔ pixel conversions for a fixed-column grid.
//!
//! A slot is laid out row-major: `column = slot % columns`, `row = slot / columns`.
//! Every cell is preceded by one spacing unit, so the top-left corner of
//! slot `0` sits at `(spacing, spacing)`.

use iced::Point;

/// Dimensions needed to place a tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Number of columns, always at least 1.
    pub columns: usize,
    pub tile_width: f32,
    pub tile_height: f32,
    pub spacing: f32,
}

/// Three-way clamp: `min` if `value < min`, `max` if `value > max`, else `value`.
///
/// Unlike [`Ord::clamp`] this never panics when `min > max`; the upper
/// bound wins in that case.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Returns the top-left corner of the cell holding `slot`.
#[must_use]
pub fn slot_to_pixel(slot: usize, metrics: &GridMetrics) -> Point {
    let columns = metrics.columns.max(1);
    let column = (slot % columns) as f32;
    let row = (slot / columns) as f32;

    Point::new(
        metrics.spacing + column * (metrics.tile_width + metrics.spacing),
        metrics.spacing + row * (metrics.tile_height + metrics.spacing),
    )
}

/// Infers the slot closest to a tile whose top-left corner is at `position`.
///
/// Column and row are rounded to the nearest cell, clamped to the grid, and
/// the combined slot is clamped to `[0, item_count - 1]`. Any position,
/// however far outside the grid, yields a valid slot. An empty grid always
/// yields `0`.
#[must_use]
pub fn pixel_to_slot(position: Point, metrics: &GridMetrics, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }

    let columns = metrics.columns.max(1) as i64;
    let rows = item_count.div_ceil(columns as usize) as i64;

    let column = clamp(
        nearest_cell(position.x - metrics.spacing, metrics.tile_width + metrics.spacing),
        0,
        columns - 1,
    );
    let row = clamp(
        nearest_cell(position.y - metrics.spacing, metrics.tile_height + metrics.spacing),
        0,
        rows,
    );

    clamp(row * columns + column, 0, item_count as i64 - 1) as usize
}

/// Rounds `offset / step` to the nearest whole cell index.
fn nearest_cell(offset: f32, step: f32) -> i64 {
    if step <= 0.0 || !offset.is_finite() {
        return 0;
    }
    (offset / step).round() as i64
}
