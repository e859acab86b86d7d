//! The planet and the turret orbiting it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::math::{Body, DEFAULT_AIM, calc_aim};
use super::pool::Pool;
use super::projectile::Projectile;

/// Static target at the center of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub pos: Vec2,
    pub radius: f32,
}

impl Planet {
    /// A planet centered in a `width` x `height` field
    pub fn centered(width: f32, height: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0, height / 2.0),
            radius,
        }
    }
}

impl Body for Planet {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// The player's turret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Unit direction from the planet center toward the pointer
    pub aim: Vec2,
    /// Facing angle (radians), derived from `aim`
    pub angle: f32,
}

impl Player {
    /// Create a player resting on the planet surface along the default aim
    pub fn new(planet: &Planet, radius: f32) -> Self {
        let mut player = Self {
            pos: planet.pos,
            radius,
            aim: DEFAULT_AIM,
            angle: 0.0,
        };
        player.orbit(planet, DEFAULT_AIM);
        player
    }

    /// Re-aim toward the pointer and move to the matching point on the orbit
    pub fn update(&mut self, planet: &Planet, pointer: Vec2) {
        let aim = calc_aim(pointer, planet.pos);
        self.orbit(planet, aim.dir);
    }

    fn orbit(&mut self, planet: &Planet, dir: Vec2) {
        self.aim = dir;
        self.pos = planet.pos + dir * (planet.radius + self.radius);
        self.angle = crate::cartesian_to_polar(dir).1;
    }

    /// Point on the turret rim where projectiles leave
    pub fn muzzle(&self) -> Vec2 {
        self.pos + self.aim * self.radius
    }

    /// Fire one projectile along the aim
    ///
    /// Returns `false` without doing anything when the pool is exhausted.
    pub fn shoot(&self, projectiles: &mut Pool<Projectile>) -> bool {
        match projectiles.acquire() {
            Some(projectile) => {
                projectile.start(self.muzzle(), self.aim);
                true
            }
            None => {
                log::debug!("No free projectile, shot dropped");
                false
            }
        }
    }
}

impl Body for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
