//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, durations counted in ticks
//! - Seeded RNG only
//! - Stable iteration order (obstacles in creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::first_collision;
pub use obstacle::Obstacle;
pub use player::{Direction, Player, PlayerAction};
pub use rect::Rect;
pub use spawner::{advance_score, run_spawner, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Command, Flow, TickInput, tick};
