//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use serde::{Deserialize, Serialize};

use super::collision::first_collision;
use super::player::Direction;
use super::spawner::{advance_score, run_spawner};
use super::state::{GameEvent, GamePhase, GameState};

/// A discrete input command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Jump,
    Slide,
    Restart,
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Commands in arrival order
    pub commands: Vec<Command>,
    /// Demo mode - steer the player automatically
    pub autopilot: bool,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            autopilot: false,
        }
    }
}

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How far above the player (in pixels) the autopilot looks for threats
const AUTOPILOT_LOOKAHEAD: f32 = 260.0;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Flow {
    state.events.clear();

    let mut commands = input.commands.clone();
    if input.autopilot && state.phase == GamePhase::Running {
        commands.extend(autopilot_command(state));
    }

    for command in commands {
        match (command, state.phase) {
            (Command::Quit, _) => return Flow::Quit,
            (Command::Restart, GamePhase::GameOver) => {
                state.restart();
                log::info!("Session {} started", state.session);
                // The fresh session starts updating next tick
                return Flow::Continue;
            }
            (_, GamePhase::GameOver) | (Command::Restart, GamePhase::Running) => {}
            (Command::MoveLeft, GamePhase::Running) => {
                state.player.move_lane(Direction::Left, &state.config)
            }
            (Command::MoveRight, GamePhase::Running) => {
                state.player.move_lane(Direction::Right, &state.config)
            }
            (Command::Jump, GamePhase::Running) => state.player.jump(),
            (Command::Slide, GamePhase::Running) => state.player.slide(&state.config),
        }
    }

    if state.phase == GamePhase::GameOver {
        return Flow::Continue;
    }

    state.time_ticks += 1;
    state.player.tick(&state.config);

    let screen_height = state.config.screen_height as f32;
    for obstacle in &mut state.obstacles {
        obstacle.tick();
    }
    let events = &mut state.events;
    state.obstacles.retain(|o| {
        let expired = o.is_expired(screen_height);
        if expired {
            log::debug!("Obstacle {} left the screen", o.id);
            events.push(GameEvent::ObstacleRetired { id: o.id });
        }
        !expired
    });

    advance_score(state);
    run_spawner(state);

    if let Some(obstacle) = first_collision(&state.player, &state.obstacles) {
        let obstacle_id = obstacle.id;
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: hit obstacle {} with score {}",
            obstacle_id,
            state.score
        );
        state.events.push(GameEvent::Collision {
            obstacle_id,
            score: state.score,
        });
    }

    Flow::Continue
}

/// Pick a lane change that steers away from the nearest threat
fn autopilot_command(state: &GameState) -> Option<Command> {
    let player = &state.player;
    if player.is_busy() {
        return None;
    }

    let threatened = |lane: usize| {
        state.obstacles.iter().any(|o| {
            o.lane == lane
                && o.rect.bottom() <= player.rect.bottom()
                && player.rect.top() - o.rect.bottom() < AUTOPILOT_LOOKAHEAD
        })
    };

    if !threatened(player.lane) {
        return None;
    }

    let lane_count = state.config.lane_count as usize;
    let safe_lane = (1..lane_count)
        .flat_map(|d| [player.lane.checked_sub(d), Some(player.lane + d)])
        .flatten()
        .filter(|&lane| lane < lane_count)
        .find(|&lane| !threatened(lane))?;

    Some(if safe_lane < player.lane {
        Command::MoveLeft
    } else {
        Command::MoveRight
    })
}
