//! Circular bodies: motion, wall containment, uniform acceleration

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Viewport;
use crate::{direction_to_heading, heading_to_direction};

/// A moving circle.
///
/// Position is in percent of the viewport, speed in percent per millisecond,
/// size in vmin units. Size doubles as mass in collisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    position: DVec2,
    speed: f64,
    /// Always unit length
    direction: DVec2,
    size: f64,
}

impl Body {
    /// Zero-length directions fall back to +x.
    pub fn new(id: u32, position: DVec2, speed: f64, direction: DVec2, size: f64) -> Self {
        Self {
            id,
            position,
            speed,
            direction: direction.try_normalize().unwrap_or(DVec2::X),
            size,
        }
    }

    /// New body at the start point with a random heading and size
    pub fn spawn<R: Rng>(id: u32, rng: &mut R) -> Self {
        let size = rng.random_range(SIZE_RANGE);
        let mut body = Self::new(id, DVec2::ZERO, INITIAL_SPEED, DVec2::X, size);
        body.relaunch(rng);
        body
    }

    /// Back to the start point with initial speed and a fresh heading; size is kept
    pub fn relaunch<R: Rng>(&mut self, rng: &mut R) {
        self.position = DVec2::new(START_POSITION.0, START_POSITION.1);
        self.speed = INITIAL_SPEED;
        self.direction = random_direction(rng);
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Ignored for zero or non-finite vectors
    pub fn set_direction(&mut self, direction: DVec2) {
        if let Some(unit) = direction.try_normalize() {
            self.direction = unit;
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    /// Heading angle in radians, for renderers that rotate the sprite
    pub fn heading(&self) -> f64 {
        direction_to_heading(self.direction)
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.direction * self.speed
    }

    /// Split `velocity` into speed and direction.
    ///
    /// A zero vector stops the body but keeps the last direction.
    pub fn set_velocity(&mut self, velocity: DVec2) {
        match velocity.try_normalize() {
            Some(unit) => {
                self.speed = velocity.length();
                self.direction = unit;
            }
            None => self.speed = 0.0,
        }
    }

    /// Exchange speed and direction with `other`, bit for bit
    pub fn swap_motion(&mut self, other: &mut Body) {
        std::mem::swap(&mut self.speed, &mut other.speed);
        std::mem::swap(&mut self.direction, &mut other.direction);
    }

    pub fn radius_px(&self, viewport: &Viewport) -> f64 {
        viewport.diameter_px(self.size) / 2.0
    }

    pub fn center_px(&self, viewport: &Viewport) -> DVec2 {
        viewport.to_pixels(self.position)
    }

    /// Advance by `delta_ms` milliseconds
    pub fn integrate(&mut self, delta_ms: f64) {
        self.position += self.velocity() * delta_ms;
    }

    /// Add `step` to the downward velocity component
    pub fn apply_gravity(&mut self, step: f64) {
        let mut velocity = self.velocity();
        velocity.y += step;
        self.set_velocity(velocity);
    }

    /// Keep the circle inside the viewport.
    ///
    /// An edge that reaches or passes a wall is clamped onto it and the
    /// matching direction component is pointed back into the playfield.
    /// Returns true if any wall was touched.
    pub fn wall_collision(&mut self, viewport: &Viewport) -> bool {
        let radius = self.radius_px(viewport);
        let (width, height) = (viewport.width(), viewport.height());
        let pos = self.center_px(viewport);
        let mut hit = false;

        if pos.y + radius >= height {
            self.position.y = (height - radius) / height * 100.0;
            self.direction.y = -self.direction.y.abs();
            hit = true;
        } else if pos.y - radius <= 0.0 {
            self.position.y = radius / height * 100.0;
            self.direction.y = self.direction.y.abs();
            hit = true;
        }

        if pos.x + radius >= width {
            self.position.x = (width - radius) / width * 100.0;
            self.direction.x = -self.direction.x.abs();
            hit = true;
        } else if pos.x - radius <= 0.0 {
            self.position.x = radius / width * 100.0;
            self.direction.x = self.direction.x.abs();
            hit = true;
        }

        hit
    }
}

/// Random unit direction whose |x| lies strictly inside (HEADING_COS_MIN, HEADING_COS_MAX)
fn random_direction<R: Rng>(rng: &mut R) -> DVec2 {
    loop {
        let heading = rng.random_range(0.0..std::f64::consts::TAU);
        let direction = heading_to_direction(heading);
        let cos = direction.x.abs();
        if cos > HEADING_COS_MIN && cos < HEADING_COS_MAX {
            return direction;
        }
    }
}
