//! Game settings
//!
//! Tunable values for a session. Loaded from a JSON file on native builds,
//! missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Bodies ===
    pub planet_radius: f32,
    pub player_radius: f32,
    pub projectile_radius: f32,
    pub enemy_radius: f32,

    // === Pools ===
    pub projectile_pool_size: usize,
    pub enemy_pool_size: usize,
    /// Probability that a pooled enemy is a lobster morph (0.0 - 1.0)
    pub lobster_morph_chance: f64,

    // === Motion ===
    /// Pixels per tick along the firing direction
    pub projectile_speed: f32,

    // === Timers (ms) ===
    pub spawn_interval_ms: f32,
    pub sprite_interval_ms: f32,

    // === Rules ===
    pub winning_score: u32,
    pub starting_lives: u32,

    /// Run seed for reproducibility
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,

            planet_radius: PLANET_RADIUS,
            player_radius: PLAYER_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            enemy_radius: ENEMY_RADIUS,

            projectile_pool_size: PROJECTILE_POOL_SIZE,
            enemy_pool_size: ENEMY_POOL_SIZE,
            lobster_morph_chance: LOBSTER_MORPH_CHANCE,

            projectile_speed: PROJECTILE_SPEED,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            sprite_interval_ms: SPRITE_INTERVAL_MS,

            winning_score: WINNING_SCORE,
            starting_lives: STARTING_LIVES,

            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Check value ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });

        if !(self.width > 0.0) {
            return invalid("width", "must be positive");
        }
        if !(self.height > 0.0) {
            return invalid("height", "must be positive");
        }

        let radii = [
            ("planet_radius", self.planet_radius),
            ("player_radius", self.player_radius),
            ("projectile_radius", self.projectile_radius),
            ("enemy_radius", self.enemy_radius),
        ];
        for (field, radius) in radii {
            if !(radius > 0.0) {
                return invalid(field, "must be positive");
            }
        }

        if !(self.spawn_interval_ms > 0.0) {
            return invalid("spawn_interval_ms", "must be positive");
        }
        if !(self.sprite_interval_ms > 0.0) {
            return invalid("sprite_interval_ms", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.lobster_morph_chance) {
            return invalid("lobster_morph_chance", "must be within 0.0..=1.0");
        }
        if !self.projectile_speed.is_finite() {
            return invalid("projectile_speed", "must be finite");
        }

        Ok(())
    }
}
