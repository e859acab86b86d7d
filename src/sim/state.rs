//! Session state and core simulation types
//!
//! `GameState` owns both pools and every entity. Entities never hold
//! references back into it; the tick hands them what they need.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind, StrikeTarget};
use super::player::{Planet, Player};
use super::pool::Pool;
use super::projectile::Projectile;
use crate::settings::Settings;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, enemies keep spawning
    Running,
    /// Terminal. Entities already in flight keep moving, nothing new spawns
    GameOver(Outcome),
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { pos: Vec2 },
    EnemySpawned { kind: EnemyKind, pos: Vec2 },
    EnemyHit { kind: EnemyKind, lives: u32 },
    EnemyCrashed { kind: EnemyKind, target: StrikeTarget },
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    GameOver { outcome: Outcome },
}

/// Repeating countdown driven by elapsed milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub elapsed_ms: f32,
    pub interval_ms: f32,
}

impl Timer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            interval_ms,
        }
    }

    /// Accumulate `dt_ms`; returns true (and restarts) once the interval is reached
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield size; projectiles leaving `[0,w]x[0,h]` are recycled
    pub bounds: Vec2,
    pub planet: Planet,
    pub player: Player,
    pub projectiles: Pool<Projectile>,
    pub enemies: Pool<Enemy>,
    /// Score (never decreases)
    pub score: u32,
    pub winning_score: u32,
    pub player_lives: u32,
    pub phase: GamePhase,
    /// Draw collision outlines
    pub debug: bool,
    pub spawn_timer: Timer,
    pub sprite_timer: Timer,
    /// Set on ticks where the sprite clock fired
    pub sprite_update: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session from settings
    ///
    /// The enemy pool is filled up front with a seeded mix of kinds.
    pub fn new(settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);

        let planet = Planet::centered(settings.width, settings.height, settings.planet_radius);
        let player = Player::new(&planet, settings.player_radius);

        let projectiles = Pool::with_capacity(settings.projectile_pool_size, |_| {
            Projectile::new(settings.projectile_radius, settings.projectile_speed)
        });
        // Settings built in code may skip validation; keep the mix a probability
        let lobster_chance = if settings.lobster_morph_chance.is_nan() {
            0.0
        } else {
            settings.lobster_morph_chance.clamp(0.0, 1.0)
        };
        let enemies = Pool::with_capacity(settings.enemy_pool_size, |_| {
            let kind = if rng.random_bool(lobster_chance) {
                EnemyKind::LobsterMorph
            } else {
                EnemyKind::Asteroid
            };
            Enemy::new(kind, settings.enemy_radius)
        });

        log::info!(
            "New session: seed={}, projectiles={}, enemies={}",
            settings.seed,
            projectiles.capacity(),
            enemies.capacity()
        );

        Self {
            seed: settings.seed,
            bounds: Vec2::new(settings.width, settings.height),
            planet,
            player,
            projectiles,
            enemies,
            score: 0,
            winning_score: settings.winning_score,
            player_lives: settings.starting_lives,
            phase: GamePhase::Running,
            debug: false,
            spawn_timer: Timer::new(settings.spawn_interval_ms),
            sprite_timer: Timer::new(settings.sprite_interval_ms),
            sprite_update: false,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Activate the first free pooled enemy; no-op when the pool is exhausted
    pub fn spawn_enemy(&mut self) -> bool {
        let Some(enemy) = self.enemies.acquire() else {
            log::debug!("No free enemy, spawn skipped");
            return false;
        };
        enemy.start(&mut self.rng, self.bounds, &self.planet);
        log::debug!("Spawned {:?} at {}", enemy.kind, enemy.pos);
        self.events.push(GameEvent::EnemySpawned {
            kind: enemy.kind,
            pos: enemy.pos,
        });
        true
    }

    /// Fire from the player; no-op when the projectile pool is exhausted
    pub fn fire(&mut self) -> bool {
        if !self.player.shoot(&mut self.projectiles) {
            return false;
        }
        self.events.push(GameEvent::ProjectileFired {
            pos: self.player.muzzle(),
        });
        true
    }

    /// Enter GameOver the first time a win or loss condition holds
    pub fn check_game_over(&mut self) {
        if self.is_game_over() {
            return;
        }
        let outcome = if self.score >= self.winning_score {
            Outcome::Won
        } else if self.player_lives < 1 {
            Outcome::Lost
        } else {
            return;
        };
        log::info!(
            "Game over: {:?} (score {}, lives {})",
            outcome,
            self.score,
            self.player_lives
        );
        self.phase = GamePhase::GameOver(outcome);
        self.events.push(GameEvent::GameOver { outcome });
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
