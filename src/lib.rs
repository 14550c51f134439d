//! Lane Runner - A lane-based endless runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, spawning, collisions)
//! - `config`: Immutable game configuration
//! - `snapshot`: Plain-data view of a frame for an external renderer
//! - `app`: Fixed-rate game loop driving a host
//! - `summary`: Results of the sessions played in a run

pub mod app;
pub mod config;
pub mod sim;
pub mod snapshot;
pub mod summary;

pub use app::{FrameClock, Game, Host};
pub use config::{ConfigError, GameConfig};
pub use snapshot::Snapshot;
pub use summary::RunSummary;

/// Game configuration defaults
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: u32 = 600;
    pub const SCREEN_HEIGHT: u32 = 800;

    pub const LANE_COUNT: u32 = 3;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Gap between the player's bottom edge and the screen bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 60.0;
    pub const PLAYER_JUMP_DURATION: u32 = 30; // ticks
    /// Vertical distance moved per jump tick
    pub const PLAYER_JUMP_STEP: f32 = 4.0;
    pub const PLAYER_SLIDE_DURATION: u32 = 30; // ticks
    pub const PLAYER_SLIDE_HEIGHT: f32 = 25.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_SPEED: f32 = 5.0;

    /// Difficulty: speed grows by SPEED_STEP every SCORE_MILESTONE points
    pub const SPEED_STEP: f32 = 0.5;
    pub const SCORE_MILESTONE: u64 = 500;

    /// Spawn interval = max(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_BASE - speed * SPAWN_INTERVAL_PER_SPEED)
    pub const SPAWN_INTERVAL_BASE: f32 = 100.0;
    pub const SPAWN_INTERVAL_PER_SPEED: f32 = 5.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 30.0;
}
