//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::math::Body;
use super::pool::Poolable;

/// A pooled projectile
///
/// While `free` is set, `pos` and `vel` are stale and must be ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed multiplier applied to the firing direction
    pub speed: f32,
    pub free: bool,
}

impl Projectile {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
            free: true,
        }
    }

    /// Activate at `pos`, travelling along `dir` scaled by the speed multiplier
    pub fn start(&mut self, pos: Vec2, dir: Vec2) {
        self.free = false;
        self.pos = pos;
        self.vel = dir * self.speed;
    }

    /// Return the projectile to its pool
    pub fn reset(&mut self) {
        self.free = true;
    }

    /// Advance one tick; deactivates once outside the `[0,w]x[0,h]` playfield
    pub fn update(&mut self, bounds: Vec2) {
        if self.free {
            return;
        }
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x || self.pos.y < 0.0 || self.pos.y > bounds.y
        {
            self.reset();
        }
    }
}

impl Poolable for Projectile {
    fn is_free(&self) -> bool {
        self.free
    }
}

impl Body for Projectile {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
