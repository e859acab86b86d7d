//! Draw commands for an external renderer
//!
//! The simulation never draws. Each frame it describes what is visible as a
//! list of [`DrawCommand`]s and hands them to a [`Renderer`] in draw order:
//! planet, player, projectiles, enemies, then the status overlay.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{EnemyKind, GamePhase, GameState, Outcome};

/// A single draw request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Planet {
        pos: Vec2,
        radius: f32,
        debug: bool,
    },
    Player {
        pos: Vec2,
        radius: f32,
        /// Facing angle (radians)
        angle: f32,
        debug: bool,
    },
    Projectile {
        pos: Vec2,
        radius: f32,
        debug: bool,
    },
    Enemy {
        kind: EnemyKind,
        sprite: &'static str,
        pos: Vec2,
        radius: f32,
        /// Sprite sheet cell (column, row)
        frame: (u32, u32),
        /// Remaining lives, shown next to the outline in debug mode
        lives: u32,
        debug: bool,
    },
    /// Score and remaining lives
    Status { score: u32, lives: u32 },
    /// End-of-game banner
    Message { headline: String, detail: String },
}

/// Anything that can turn draw commands into pixels (or text, or nothing)
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);
}

/// Collects commands, mostly useful in tests and headless runs
impl Renderer for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

/// Win/lose banner text for a finished session
pub fn game_over_message(outcome: Outcome, score: u32) -> (String, String) {
    match outcome {
        Outcome::Won => ("You win!".to_string(), format!("Your score is {}!", score)),
        Outcome::Lost => ("You lose!".to_string(), "Try again!".to_string()),
    }
}

/// Describe the current frame
pub fn draw_commands(state: &GameState) -> Vec<DrawCommand> {
    let debug = state.debug;
    let mut commands = Vec::with_capacity(
        3 + state.projectiles.active_count() + state.enemies.active_count(),
    );

    commands.push(DrawCommand::Planet {
        pos: state.planet.pos,
        radius: state.planet.radius,
        debug,
    });
    commands.push(DrawCommand::Player {
        pos: state.player.pos,
        radius: state.player.radius,
        angle: state.player.angle,
        debug,
    });

    commands.extend(state.projectiles.active().map(|p| DrawCommand::Projectile {
        pos: p.pos,
        radius: p.radius,
        debug,
    }));

    commands.extend(state.enemies.active().map(|e| DrawCommand::Enemy {
        kind: e.kind,
        sprite: e.kind.sprite(),
        pos: e.pos,
        radius: e.radius,
        frame: (e.frame_x, e.frame_y),
        lives: e.lives,
        debug,
    }));

    commands.push(DrawCommand::Status {
        score: state.score,
        lives: state.player_lives,
    });

    if let GamePhase::GameOver(outcome) = state.phase {
        let (headline, detail) = game_over_message(outcome, state.score);
        commands.push(DrawCommand::Message { headline, detail });
    }

    commands
}

/// Send the current frame to a renderer
pub fn render<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    for command in draw_commands(state) {
        renderer.draw(&command);
    }
}
