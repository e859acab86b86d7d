//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed milliseconds are the only time input
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod enemy;
pub mod math;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod state;
pub mod tick;

pub use enemy::{Enemy, EnemyContext, EnemyKind, EnemyOutcome, StrikeTarget};
pub use math::{Aim, Body, DEFAULT_AIM, calc_aim, check_collision, circles_overlap};
pub use player::{Planet, Player};
pub use pool::{Pool, Poolable};
pub use projectile::Projectile;
pub use state::{GameEvent, GamePhase, GameState, Outcome, Timer};
pub use tick::{TickInput, tick};
