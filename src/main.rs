//! Planet Defense headless entry point
//!
//! Runs one session with a simple autopilot standing in for the pointer,
//! logs what happens, and prints a JSON summary. Rendering and input
//! plumbing belong to the host; this binary only drives the simulation.
//!
//! Usage: `planet-defense [settings.json]`

use glam::Vec2;
use serde::Serialize;

use planet_defense::render::{DrawCommand, Renderer, draw_commands, render};
use planet_defense::sim::{GameEvent, GamePhase, GameState, Outcome, TickInput, tick};
use planet_defense::Settings;

/// Nominal display refresh
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Give up after five minutes of simulated time
const MAX_TICKS: u64 = 60 * 60 * 5;
/// Keep ticking briefly after game over so in-flight enemies finish
const GRACE_TICKS: u64 = 120;
/// Autopilot fires every this many ticks
const FIRE_EVERY: u64 = 8;

/// Counts draw commands instead of drawing
#[derive(Debug, Default)]
struct HeadlessRenderer {
    frames: u64,
    commands: u64,
    last_message: Option<(String, String)>,
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands += 1;
        match command {
            DrawCommand::Planet { .. } => self.frames += 1,
            DrawCommand::Message { headline, detail } => {
                self.last_message = Some((headline.clone(), detail.clone()));
            }
            _ => {}
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    score: u32,
    lives: u32,
    outcome: Option<Outcome>,
    shots: u32,
    spawns: u32,
    kills: u32,
    crashes: u32,
    draw_commands: u64,
    final_frame: Vec<DrawCommand>,
}

impl Summary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ProjectileFired { .. } => self.shots += 1,
            GameEvent::EnemySpawned { .. } => self.spawns += 1,
            GameEvent::EnemyDestroyed { points, .. } if *points > 0 => self.kills += 1,
            GameEvent::EnemyCrashed { .. } => self.crashes += 1,
            _ => {}
        }
    }
}

/// Point the turret at the live enemy closest to the planet
fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .enemies
        .active()
        .filter(|e| e.is_alive())
        .min_by(|a, b| {
            let da = a.pos.distance_squared(state.planet.pos);
            let db = b.pos.distance_squared(state.planet.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.pos);

    TickInput {
        pointer: target.unwrap_or(state.planet.pos - Vec2::Y),
        fire: target.is_some() && state.time_ticks.is_multiple_of(FIRE_EVERY),
        toggle_debug: false,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Planet Defense (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut state = GameState::new(&settings);
    let mut renderer = HeadlessRenderer::default();
    let mut summary = Summary {
        seed: settings.seed,
        ..Default::default()
    };
    let mut ended_at = None;

    while state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input, FRAME_MS);
        render(&state, &mut renderer);

        for event in state.drain_events() {
            summary.record(&event);
            if let GameEvent::GameOver { outcome } = event {
                log::info!("Session ended at tick {}: {:?}", state.time_ticks, outcome);
                ended_at = Some(state.time_ticks);
            }
        }

        if ended_at.is_some_and(|t| state.time_ticks >= t + GRACE_TICKS) {
            break;
        }
    }

    if let Some((headline, detail)) = &renderer.last_message {
        log::info!("{} {}", headline, detail);
    }
    log::info!(
        "Rendered {} frames ({} draw commands)",
        renderer.frames,
        renderer.commands
    );

    summary.ticks = state.time_ticks;
    summary.score = state.score;
    summary.lives = state.player_lives;
    summary.draw_commands = renderer.commands;
    summary.final_frame = draw_commands(&state);
    summary.outcome = match state.phase {
        GamePhase::GameOver(outcome) => Some(outcome),
        GamePhase::Running => None,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}
