//! Enemies homing in on the planet
//!
//! Two fixed kinds share all behavior and differ only in their constants.
//! Death is two-phase: lives drop to zero first (from damage or a crash),
//! then the death animation plays out on the shared sprite clock before the
//! slot returns to its pool.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::math::{Body, calc_aim, check_collision};
use super::player::{Planet, Player};
use super::pool::{Pool, Poolable};
use super::projectile::Projectile;
use crate::consts::ENEMY_SPRITE_ROWS;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Asteroid,
    LobsterMorph,
}

impl EnemyKind {
    /// Starting lives, also the score awarded for a kill
    pub fn max_lives(self) -> u32 {
        match self {
            EnemyKind::Asteroid => 1,
            EnemyKind::LobsterMorph => 8,
        }
    }

    /// Frames per row on the sprite sheet
    pub fn frame_count(self) -> u32 {
        match self {
            EnemyKind::Asteroid => 8,
            EnemyKind::LobsterMorph => 15,
        }
    }

    /// Last valid animation column; going past it ends the death animation
    pub fn max_frame(self) -> u32 {
        self.frame_count() - 1
    }

    /// Sprite sheet identity for the renderer
    pub fn sprite(self) -> &'static str {
        match self {
            EnemyKind::Asteroid => "asteroid",
            EnemyKind::LobsterMorph => "lobstermorph",
        }
    }
}

/// What an enemy crashed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeTarget {
    Planet,
    Player,
}

/// Shared state an enemy reads (and the projectiles it may consume) during
/// its update
pub struct EnemyContext<'a> {
    pub planet: &'a Planet,
    pub player: &'a Player,
    pub projectiles: &'a mut Pool<Projectile>,
    /// True on ticks where the sprite clock fired
    pub sprite_update: bool,
}

/// Everything that happened to one enemy during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyOutcome {
    /// Crash that costs the player a life
    pub struck: Option<StrikeTarget>,
    /// Projectiles absorbed this update
    pub hits: u32,
    /// Death animation finished and the slot was freed
    pub recycled: bool,
    /// Score earned (only for enemies destroyed by damage)
    pub points: u32,
}

/// A pooled enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Unit vector toward the planet (zeroed after a crash)
    pub vel: Vec2,
    pub radius: f32,
    pub lives: u32,
    /// Animation column
    pub frame_x: u32,
    /// Animation row, picked at random on start
    pub frame_y: u32,
    pub free: bool,
    /// Died by crashing rather than by damage
    pub collided: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, radius: f32) -> Self {
        Self {
            kind,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            lives: kind.max_lives(),
            frame_x: 0,
            frame_y: 0,
            free: true,
            collided: false,
        }
    }

    pub fn max_lives(&self) -> u32 {
        self.kind.max_lives()
    }

    pub fn is_alive(&self) -> bool {
        self.lives >= 1
    }

    /// Activate just outside a random edge of the field, heading for the planet
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2, planet: &Planet) {
        self.free = false;
        self.collided = false;
        self.lives = self.max_lives();
        self.frame_x = 0;
        self.frame_y = rng.random_range(0..ENEMY_SPRITE_ROWS);

        let r = self.radius;
        self.pos = if rng.random_bool(0.5) {
            // Top or bottom edge
            let y = if rng.random_bool(0.5) { -r } else { bounds.y + r };
            Vec2::new(rng.random::<f32>() * bounds.x, y)
        } else {
            // Left or right edge
            let x = if rng.random_bool(0.5) { -r } else { bounds.x + r };
            Vec2::new(x, rng.random::<f32>() * bounds.y)
        };
        self.vel = calc_aim(planet.pos, self.pos).dir;
    }

    pub fn reset(&mut self) {
        self.free = true;
    }

    /// Take damage; the animation column advances while the enemy survives
    pub fn hit(&mut self, damage: u32) {
        self.lives = self.lives.saturating_sub(damage);
        if self.is_alive() {
            self.frame_x += 1;
        }
    }

    /// Move, resolve collisions, and advance the death animation
    pub fn update(&mut self, ctx: &mut EnemyContext<'_>) -> EnemyOutcome {
        let mut outcome = EnemyOutcome::default();
        if self.free {
            return outcome;
        }

        self.pos += self.vel;

        // Crashes only count while alive, so each enemy costs at most one life
        if self.is_alive() && check_collision(self, ctx.planet) {
            self.crash();
            outcome.struck = Some(StrikeTarget::Planet);
        }
        if self.is_alive() && check_collision(self, ctx.player) {
            self.crash();
            outcome.struck = Some(StrikeTarget::Player);
        }

        for projectile in ctx.projectiles.active_mut() {
            if self.is_alive() && check_collision(self, projectile) {
                projectile.reset();
                self.hit(1);
                outcome.hits += 1;
            }
        }

        if !self.is_alive() && ctx.sprite_update {
            self.frame_x += 1;
        }

        if self.frame_x > self.kind.max_frame() {
            self.reset();
            outcome.recycled = true;
            if !self.collided {
                outcome.points = self.max_lives();
            }
        }

        outcome
    }

    fn crash(&mut self) {
        self.lives = 0;
        self.vel = Vec2::ZERO;
        self.collided = true;
    }
}

impl Poolable for Enemy {
    fn is_free(&self) -> bool {
        self.free
    }
}

impl Body for Enemy {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
