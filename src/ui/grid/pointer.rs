// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking for tile gestures.
//!
//! Iced reports absolute cursor positions; tiles expect the cumulative
//! delta since their gesture started. The tracker remembers which tile owns
//! the pointer and where the cursor was when it was grabbed.
//!
//! Positions are kept in content coordinates: the cursor plus the scroll
//! offset of the viewport hosting the grid. Scrolling mid-gesture therefore
//! moves the grabbed tile along with the content under the cursor.

use iced::{Point, Vector};

#[derive(Debug, Clone, PartialEq)]
struct Grab {
    id: String,
    /// Content position at grab time. Unknown until the first move if the
    /// press arrived before any cursor report.
    origin: Option<Point>,
}

/// Converts absolute cursor events into per-tile cumulative deltas.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    cursor: Option<Point>,
    scroll: Vector,
    grab: Option<Grab>,
}

impl Tracker {
    /// Hands the pointer to tile `id`. Returns `false` if another tile
    /// already owns it.
    pub fn grab(&mut self, id: &str) -> bool {
        if self.grab.is_some() {
            return false;
        }
        self.grab = Some(Grab {
            id: id.to_owned(),
            origin: self.content_cursor(),
        });
        true
    }

    /// Records a cursor move and returns the owning tile with its
    /// cumulative delta, if a tile is grabbed.
    pub fn cursor_moved(&mut self, position: Point) -> Option<(&str, Vector)> {
        self.cursor = Some(position);
        self.delta()
    }

    /// Records a new scroll offset of the hosting viewport. Returns the
    /// owning tile with its updated delta, if a tile is grabbed.
    pub fn scrolled(&mut self, offset: Vector) -> Option<(&str, Vector)> {
        self.scroll = offset;
        self.delta()
    }

    fn content_cursor(&self) -> Option<Point> {
        self.cursor.map(|cursor| cursor + self.scroll)
    }

    fn delta(&mut self) -> Option<(&str, Vector)> {
        let position = self.content_cursor()?;
        let grab = self.grab.as_mut()?;
        let origin = *grab.origin.get_or_insert(position);
        Some((grab.id.as_str(), position - origin))
    }

    /// Ends the grab and returns the tile that owned the pointer.
    pub fn release(&mut self) -> Option<String> {
        self.grab.take().map(|grab| grab.id)
    }

    /// Tile currently owning the pointer.
    #[must_use]
    pub fn grabbed(&self) -> Option<&str> {
        self.grab.as_ref().map(|grab| grab.id.as_str())
    }

    /// Last known cursor position.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }
}
