//! Planet Defense - a turret orbiting a planet, shooting down incoming waves
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, entities, collisions, session state)
//! - `render`: Draw commands handed to an external renderer
//! - `settings`: Data-driven game configuration

pub mod render;
pub mod settings;
pub mod sim;

pub use render::{DrawCommand, Renderer};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Planet sits at the field center
    pub const PLANET_RADIUS: f32 = 80.0;

    /// Player turret orbits just outside the planet surface
    pub const PLAYER_RADIUS: f32 = 40.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Speed multiplier applied to the unit firing direction (pixels per tick)
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_POOL_SIZE: usize = 20;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 40.0;
    pub const ENEMY_POOL_SIZE: usize = 20;
    /// Share of the enemy pool filled with lobster morphs (rest are asteroids)
    pub const LOBSTER_MORPH_CHANCE: f64 = 0.25;
    /// Number of animation rows on each enemy sprite sheet
    pub const ENEMY_SPRITE_ROWS: u32 = 4;

    /// Timers (milliseconds)
    pub const SPAWN_INTERVAL_MS: f32 = 1700.0;
    pub const SPRITE_INTERVAL_MS: f32 = 150.0;

    /// Session rules
    pub const WINNING_SCORE: u32 = 50;
    pub const STARTING_LIVES: u32 = 5;

    pub const DEFAULT_SEED: u64 = 42;
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
