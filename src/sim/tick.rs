//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one display frame.

use glam::Vec2;

use super::enemy::EnemyContext;
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
///
/// `fire` and `toggle_debug` are edge events: the caller sets them once per
/// key/button press and clears them after the tick consumed them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in canvas space
    pub pointer: Vec2,
    /// Fire one projectile (pointer press or fire key)
    pub fire: bool,
    /// Flip collision-outline drawing
    pub toggle_debug: bool,
}

/// Advance the session by one frame that took `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    state.time_ticks += 1;

    if input.toggle_debug {
        state.debug = !state.debug;
        log::debug!("Debug outlines: {}", state.debug);
    }

    // Player follows the pointer, then fires along the fresh aim
    state.player.update(&state.planet, input.pointer);
    if input.fire {
        state.fire();
    }

    for projectile in &mut state.projectiles {
        projectile.update(state.bounds);
    }

    // Death animations only step on sprite clock ticks
    state.sprite_update = state.sprite_timer.advance(dt_ms);

    let mut ctx = EnemyContext {
        planet: &state.planet,
        player: &state.player,
        projectiles: &mut state.projectiles,
        sprite_update: state.sprite_update,
    };
    for enemy in &mut state.enemies {
        let outcome = enemy.update(&mut ctx);

        if outcome.hits > 0 {
            state.events.push(GameEvent::EnemyHit {
                kind: enemy.kind,
                lives: enemy.lives,
            });
        }
        if let Some(target) = outcome.struck {
            state.player_lives = state.player_lives.saturating_sub(1);
            state.events.push(GameEvent::EnemyCrashed {
                kind: enemy.kind,
                target,
            });
        }
        if outcome.recycled {
            state.score += outcome.points;
            state.events.push(GameEvent::EnemyDestroyed {
                kind: enemy.kind,
                points: outcome.points,
            });
        }
    }

    if state.phase == GamePhase::Running && state.spawn_timer.advance(dt_ms) {
        state.spawn_enemy();
    }

    state.check_game_over();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Outcome;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    #[test]
    fn test_fire_is_consumed_per_tick() {
        let mut state = GameState::new(&Settings::default());
        let fire = TickInput {
            pointer: Vec2::new(250.0, 0.0),
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, FRAME_MS);
        assert_eq!(state.projectiles.active_count(), 1);

        let idle = TickInput {
            pointer: Vec2::new(250.0, 0.0),
            ..Default::default()
        };
        tick(&mut state, &idle, FRAME_MS);
        assert_eq!(state.projectiles.active_count(), 1);
    }

    #[test]
    fn test_exhausted_projectile_pool_fires_nothing() {
        let settings = Settings {
            projectile_pool_size: 3,
            ..Default::default()
        };
        let mut state = GameState::new(&settings);
        let fire = TickInput {
            pointer: Vec2::new(250.0, 0.0),
            fire: true,
            ..Default::default()
        };
        for _ in 0..6 {
            tick(&mut state, &fire, FRAME_MS);
        }
        assert_eq!(state.projectiles.active_count(), 3);
        let fired = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ProjectileFired { .. }))
            .count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_debug_toggle() {
        let mut state = GameState::new(&Settings::default());
        let toggle = TickInput {
            toggle_debug: true,
            ..Default::default()
        };
        tick(&mut state, &toggle, FRAME_MS);
        assert!(state.debug);
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert!(state.debug);
        tick(&mut state, &toggle, FRAME_MS);
        assert!(!state.debug);
    }

    #[test]
    fn test_sprite_flag_is_per_tick() {
        let settings = Settings {
            sprite_interval_ms: 150.0,
            ..Default::default()
        };
        let mut state = GameState::new(&settings);
        let input = TickInput::default();

        tick(&mut state, &input, 100.0);
        assert!(!state.sprite_update);
        tick(&mut state, &input, 50.0);
        assert!(state.sprite_update);
        tick(&mut state, &input, 10.0);
        assert!(!state.sprite_update);
    }

    #[test]
    fn test_losing_all_lives_ends_the_game() {
        let mut state = GameState::new(&Settings::default());
        state.player_lives = 1;

        // Drop an enemy right onto the planet, away from the player
        let planet = state.planet.pos;
        let enemy = state.enemies.acquire().unwrap();
        enemy.free = false;
        enemy.lives = enemy.max_lives();
        enemy.pos = planet + Vec2::new(0.0, 100.0);

        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.player_lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver(Outcome::Lost));
    }

    #[test]
    fn test_no_spawns_after_game_over_but_firing_continues() {
        let settings = Settings {
            spawn_interval_ms: 10.0,
            ..Default::default()
        };
        let mut state = GameState::new(&settings);
        state.score = state.winning_score;
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.phase, GamePhase::GameOver(Outcome::Won));

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut state, &fire, 100.0);
        }
        assert_eq!(state.enemies.active_count(), 0);
        let fired = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ProjectileFired { .. }))
            .count();
        assert_eq!(fired, 20);
        assert_eq!(state.phase, GamePhase::GameOver(Outcome::Won));
    }
}
