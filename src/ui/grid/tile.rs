// SPDX-License-Identifier: MPL-2.0
//! Per-tile gesture sub-component.
//!
//! A tile is either idle, gliding on its springs toward its rest position,
//! or active, following the pointer. Only the end of a gesture produces an
//! effect; slot decisions belong to the grid component.

use crate::grid::{DragSession, SpringPoint};
use iced::{Point, Vector};
use std::time::Duration;

/// Tile sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    session: DragSession,
    motion: SpringPoint,
    /// Position implied by the tile's slot.
    rest: Point,
}

/// Gesture events for one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The gesture was granted to this tile.
    Grab,
    /// Cumulative pointer delta since `Grab`.
    Move(Vector),
    /// Pointer released.
    Release,
    /// The host abandoned the gesture without a release.
    Cancel,
}

/// Effects produced by tile gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The gesture ended with the tile's top-left corner at this position.
    Released(Point),
    /// The gesture was abandoned; the tile is heading back to rest.
    Cancelled,
}

impl State {
    /// A tile resting at `rest`.
    #[must_use]
    pub fn new(rest: Point) -> Self {
        Self {
            session: DragSession::default(),
            motion: SpringPoint::at_rest(rest),
            rest,
        }
    }

    /// Handle a gesture message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Grab => {
                if !self.session.is_active() {
                    let baseline = self.motion.halt();
                    self.session.start(baseline);
                }
                Effect::None
            }
            Message::Move(delta) => {
                self.session.update(delta);
                Effect::None
            }
            Message::Release => match self.session.finish() {
                Some(position) => {
                    self.glide_from(position);
                    Effect::Released(position)
                }
                None => Effect::None,
            },
            Message::Cancel => match self.session.finish() {
                Some(position) => {
                    self.glide_from(position);
                    Effect::Cancelled
                }
                None => Effect::None,
            },
        }
    }

    /// Updates the rest position. An active tile keeps following the
    /// pointer and only heads to the new rest position once released.
    pub fn set_rest(&mut self, rest: Point) {
        self.rest = rest;
        if !self.session.is_active() {
            self.motion.set_target(rest);
        }
    }

    /// Advances the glide animation.
    pub fn tick(&mut self, dt: Duration) {
        if !self.session.is_active() {
            self.motion.advance(dt);
        }
    }

    /// Where the tile should be drawn right now.
    #[must_use]
    pub fn display_position(&self) -> Point {
        self.session
            .live_position()
            .unwrap_or_else(|| self.motion.position())
    }

    #[must_use]
    pub fn rest(&self) -> Point {
        self.rest
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.session.is_active() && !self.motion.is_at_rest()
    }

    /// Whether an ancestor may take the gesture away from this tile.
    #[must_use]
    pub fn accepts_termination(&self) -> bool {
        !self.session.is_active()
    }

    fn glide_from(&mut self, position: Point) {
        self.motion.jump_to(position);
        self.motion.set_target(self.rest);
    }
}
