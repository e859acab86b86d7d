//! End-to-end session scenarios driven through the public tick API

use glam::Vec2;

use planet_defense::Settings;
use planet_defense::sim::{
    EnemyKind, GameEvent, GamePhase, GameState, Outcome, StrikeTarget, TickInput, tick,
};

/// Session with a single enemy slot of the given kind
fn session(kind: EnemyKind) -> GameState {
    let settings = Settings {
        enemy_pool_size: 1,
        lobster_morph_chance: match kind {
            EnemyKind::Asteroid => 0.0,
            EnemyKind::LobsterMorph => 1.0,
        },
        ..Default::default()
    };
    GameState::new(&settings)
}

/// Activate the only enemy, parked at `pos`
fn park_enemy(state: &mut GameState, pos: Vec2) {
    let enemy = state.enemies.acquire().expect("free enemy slot");
    enemy.free = false;
    enemy.lives = enemy.max_lives();
    enemy.frame_x = 0;
    enemy.pos = pos;
    enemy.vel = Vec2::ZERO;
}

/// Drop a motionless projectile onto `pos`
fn place_shot(state: &mut GameState, pos: Vec2) {
    let shot = state.projectiles.acquire().expect("free projectile");
    shot.start(pos, Vec2::ZERO);
}

/// Far corner, clear of the planet and of the player (which the default
/// pointer at the origin pulls toward the top-left)
const CORNER: Vec2 = Vec2::new(450.0, 450.0);

#[test]
fn spawn_waits_for_the_full_interval() {
    let settings = Settings {
        enemy_pool_size: 1,
        spawn_interval_ms: 1000.0,
        ..Default::default()
    };
    let mut state = GameState::new(&settings);
    let input = TickInput::default();

    tick(&mut state, &input, 999.0);
    assert_eq!(state.enemies.active_count(), 0);

    tick(&mut state, &input, 1.0);
    assert_eq!(state.enemies.active_count(), 1);

    let enemy = state.enemies.active().next().unwrap();
    let (p, r) = (enemy.pos, enemy.radius);
    let horizontal = (p.y == -r || p.y == 500.0 + r) && (0.0..=500.0).contains(&p.x);
    let vertical = (p.x == -r || p.x == 500.0 + r) && (0.0..=500.0).contains(&p.y);
    assert!(horizontal || vertical, "spawned off-edge at {p:?}");
    assert!((enemy.vel.length() - 1.0).abs() < 1e-4);

    // Pool of one: the next interval finds nothing free
    tick(&mut state, &input, 1000.0);
    assert_eq!(state.enemies.active_count(), 1);
}

#[test]
fn projectile_leaving_the_field_is_recycled_same_tick() {
    let mut state = GameState::new(&Settings::default());
    let shot = state.projectiles.acquire().unwrap();
    shot.start(Vec2::new(250.0, 0.0), Vec2::new(0.0, -1.0));

    tick(&mut state, &TickInput::default(), 16.0);

    let shot = state.projectiles.get(0).unwrap();
    assert_eq!(shot.pos, Vec2::new(250.0, -5.0));
    assert!(shot.free);
}

#[test]
fn asteroid_falls_to_one_hit() {
    let mut state = session(EnemyKind::Asteroid);
    park_enemy(&mut state, CORNER);
    place_shot(&mut state, CORNER);

    // Every tick is a sprite tick: hit + first death frame, then 7 more frames
    let input = TickInput::default();
    for _ in 0..7 {
        tick(&mut state, &input, 150.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies.active_count(), 1);
    }
    tick(&mut state, &input, 150.0);
    assert_eq!(state.enemies.active_count(), 0);
    assert_eq!(state.score, 1);
    assert_eq!(state.projectiles.active_count(), 0);
}

#[test]
fn lobster_morph_needs_eight_hits() {
    let mut state = session(EnemyKind::LobsterMorph);
    park_enemy(&mut state, CORNER);
    let input = TickInput::default();

    for _ in 0..7 {
        place_shot(&mut state, CORNER);
        tick(&mut state, &input, 1.0);
    }
    let lobster = state.enemies.get(0).unwrap();
    assert_eq!(lobster.lives, 1);
    assert_eq!(lobster.frame_x, 7);

    place_shot(&mut state, CORNER);
    tick(&mut state, &input, 1.0);
    assert_eq!(state.enemies.get(0).unwrap().lives, 0);

    let mut sprite_ticks = 0;
    while state.enemies.active_count() > 0 && sprite_ticks < 50 {
        tick(&mut state, &input, 150.0);
        sprite_ticks += 1;
    }
    assert_eq!(sprite_ticks, 8);
    assert_eq!(state.score, 8);
}

#[test]
fn crash_costs_exactly_one_life_and_no_score() {
    let mut state = session(EnemyKind::LobsterMorph);
    // Inside the planet's reach, opposite the player
    park_enemy(&mut state, Vec2::new(250.0, 350.0));
    let input = TickInput::default();

    let mut crashes = 0;
    for _ in 0..40 {
        tick(&mut state, &input, 150.0);
        crashes += state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyCrashed { .. }))
            .count();
        if state.enemies.get(0).unwrap().free {
            break;
        }
    }

    assert_eq!(crashes, 1);
    assert_eq!(state.player_lives, 4);
    assert_eq!(state.score, 0);
    assert!(state.enemies.get(0).unwrap().free);
}

#[test]
fn player_strike_costs_exactly_one_life_and_no_score() {
    let mut state = session(EnemyKind::Asteroid);
    // Pointer straight above the planet puts the player at (250, 130)
    let input = TickInput {
        pointer: Vec2::new(250.0, 0.0),
        ..Default::default()
    };
    tick(&mut state, &input, 1.0);
    assert_eq!(state.player.pos, Vec2::new(250.0, 130.0));
    state.drain_events();

    // Touching the player but out of the planet's reach
    park_enemy(&mut state, Vec2::new(250.0, 70.0));

    let mut strikes = Vec::new();
    for _ in 0..40 {
        tick(&mut state, &input, 150.0);
        strikes.extend(state.drain_events().into_iter().filter_map(|e| match e {
            GameEvent::EnemyCrashed { target, .. } => Some(target),
            _ => None,
        }));
        if state.enemies.get(0).unwrap().free {
            break;
        }
    }

    assert_eq!(strikes, vec![StrikeTarget::Player]);
    assert_eq!(state.player_lives, 4);
    assert_eq!(state.score, 0);
    assert!(state.enemies.get(0).unwrap().free);
}

#[test]
fn game_over_on_first_qualifying_tick_and_stays() {
    let mut state = session(EnemyKind::LobsterMorph);
    state.score = 49;
    park_enemy(&mut state, CORNER);
    let input = TickInput::default();

    for _ in 0..8 {
        place_shot(&mut state, CORNER);
        tick(&mut state, &input, 1.0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    // Death animation ends, points land, and the phase flips on that tick
    while state.enemies.active_count() > 0 {
        assert_eq!(state.phase, GamePhase::Running);
        tick(&mut state, &input, 150.0);
    }
    assert_eq!(state.score, 57);
    assert_eq!(state.phase, GamePhase::GameOver(Outcome::Won));

    // Losing every life afterwards does not change the result
    state.player_lives = 0;
    for _ in 0..20 {
        tick(&mut state, &input, 150.0);
    }
    assert_eq!(state.phase, GamePhase::GameOver(Outcome::Won));
    assert_eq!(state.enemies.active_count(), 0);
}

#[test]
fn in_flight_enemies_keep_moving_after_game_over() {
    let mut state = session(EnemyKind::Asteroid);
    state.spawn_enemy();
    state.score = state.winning_score;

    let input = TickInput::default();
    tick(&mut state, &input, 16.0);
    assert!(state.is_game_over());

    let before = state.enemies.get(0).unwrap().pos;
    tick(&mut state, &input, 16.0);
    let after = state.enemies.get(0).unwrap().pos;
    assert!((after - before).length() > 0.5);
}
