// SPDX-License-Identifier: MPL-2.0
//! Drag session state
//!
//! Tracks one gesture on one tile: the position captured when the gesture
//! was granted plus the cumulative pointer delta since then. The live
//! position is purely visual; slots are only touched once the session ends.

use iced::{Point, Vector};

/// Gesture state for a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    /// Tile position when the gesture was granted; `None` while idle.
    baseline: Option<Point>,

    /// Cumulative pointer delta since the gesture started.
    delta: Vector,
}

impl DragSession {
    /// Starts a gesture from `baseline`, discarding any previous delta.
    pub fn start(&mut self, baseline: Point) {
        self.baseline = Some(baseline);
        self.delta = Vector::ZERO;
    }

    /// Replaces the cumulative delta. Ignored while idle.
    pub fn update(&mut self, delta: Vector) {
        if self.baseline.is_some() {
            self.delta = delta;
        }
    }

    /// Ends the gesture and returns the final live position.
    pub fn finish(&mut self) -> Option<Point> {
        let position = self.live_position();
        *self = Self::default();
        position
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// Baseline plus delta while a gesture is active.
    #[must_use]
    pub fn live_position(&self) -> Option<Point> {
        self.baseline.map(|baseline| baseline + self.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_idle() {
        let session = DragSession::default();
        assert!(!session.is_active());
        assert!(session.live_position().is_none());
    }

    #[test]
    fn finished_session_is_indistinguishable_from_default() {
        let mut session = DragSession::default();
        session.start(Point::new(3.0, 4.0));
        session.update(Vector::new(1.0, 1.0));
        session.finish();
        assert_eq!(session, DragSession::default());
    }

    #[test]
    fn start_captures_baseline_with_zero_delta() {
        let mut session = DragSession::default();
        session.start(Point::new(12.0, 24.0));
        assert!(session.is_active());
        assert_eq!(session.live_position(), Some(Point::new(12.0, 24.0)));
    }

    #[test]
    fn deltas_are_cumulative_not_incremental() {
        let mut session = DragSession::default();
        session.start(Point::new(10.0, 10.0));
        session.update(Vector::new(5.0, 0.0));
        session.update(Vector::new(8.0, -3.0));
        assert_eq!(session.live_position(), Some(Point::new(18.0, 7.0)));
    }

    #[test]
    fn update_while_idle_is_ignored() {
        let mut session = DragSession::default();
        session.update(Vector::new(5.0, 5.0));
        session.start(Point::ORIGIN);
        assert_eq!(session.live_position(), Some(Point::ORIGIN));
    }

    #[test]
    fn finish_returns_final_position_and_resets() {
        let mut session = DragSession::default();
        session.start(Point::new(100.0, 50.0));
        session.update(Vector::new(-20.0, 30.0));

        assert_eq!(session.finish(), Some(Point::new(80.0, 80.0)));
        assert!(!session.is_active());
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn restart_discards_previous_delta() {
        let mut session = DragSession::default();
        session.start(Point::ORIGIN);
        session.update(Vector::new(40.0, 40.0));
        session.start(Point::new(1.0, 1.0));
        assert_eq!(session.live_position(), Some(Point::new(1.0, 1.0)));
    }
}
