// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to glide tiles toward their rest position.
//!
//! Semi-implicit Euler integration of
//! `a = -stiffness * (position - target) - damping * velocity`,
//! subdivided into steps of at most 4ms so long frames stay stable.

use iced::Point;
use std::time::Duration;

/// Largest integration step in seconds.
const MAX_STEP_SECS: f32 = 0.004;

/// Distance in pixels under which the spring snaps to its target.
const REST_DISTANCE: f32 = 0.5;

/// Speed in pixels per second under which the spring may settle.
const REST_SPEED: f32 = 1.0;

pub const DEFAULT_STIFFNESS: f32 = 170.0;
pub const DEFAULT_DAMPING: f32 = 26.0;

/// One-dimensional spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// A spring resting at `position`.
    #[must_use]
    pub fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
        }
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Stops motion where the spring currently is.
    pub fn halt(&mut self) {
        self.target = self.position;
        self.velocity = 0.0;
    }

    /// Teleports to `position`, keeping the target.
    pub fn jump_to(&mut self, position: f32) {
        self.position = position;
        self.velocity = 0.0;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.is_at_rest() {
            return;
        }

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let acceleration = -self.stiffness * (self.position - self.target)
                - self.damping * self.velocity;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if (self.position - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Pair of springs driving a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPoint {
    x: Spring,
    y: Spring,
}

impl SpringPoint {
    #[must_use]
    pub fn at_rest(point: Point) -> Self {
        Self {
            x: Spring::at_rest(point.x),
            y: Spring::at_rest(point.y),
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.position(), self.y.position())
    }

    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// Stops both axes and returns where the point came to a halt.
    pub fn halt(&mut self) -> Point {
        self.x.halt();
        self.y.halt();
        self.position()
    }

    pub fn jump_to(&mut self, point: Point) {
        self.x.jump_to(point.x);
        self.y.jump_to(point.y);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.x.advance(dt);
        self.y.advance(dt);
    }
}
