//! Game configuration
//!
//! Fixed for the lifetime of a session. Defaults come from [`crate::consts`];
//! a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Immutable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Ticks per second
    pub tick_rate: u32,
    pub lane_count: u32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub jump_duration: u32,
    pub jump_step: f32,
    pub slide_duration: u32,
    pub slide_height: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Speed at session start (pixels per tick)
    pub base_speed: f32,

    // === Difficulty ===
    pub speed_step: f32,
    pub score_milestone: u64,
    pub spawn_interval_base: f32,
    pub spawn_interval_per_speed: f32,
    pub spawn_interval_min: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            lane_count: LANE_COUNT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            jump_duration: PLAYER_JUMP_DURATION,
            jump_step: PLAYER_JUMP_STEP,
            slide_duration: PLAYER_SLIDE_DURATION,
            slide_height: PLAYER_SLIDE_HEIGHT,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            base_speed: OBSTACLE_SPEED,

            speed_step: SPEED_STEP,
            score_milestone: SCORE_MILESTONE,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_per_speed: SPAWN_INTERVAL_PER_SPEED,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.lane_count == 0 {
            return invalid("lane_count", "must be at least 1");
        }
        if self.screen_width < self.lane_count {
            return invalid("screen_width", "must be at least one pixel per lane");
        }
        if self.screen_height == 0 {
            return invalid("screen_height", "must be positive");
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate", "must be positive");
        }
        if self.jump_duration == 0 {
            return invalid("jump_duration", "must be positive");
        }
        if self.slide_duration == 0 {
            return invalid("slide_duration", "must be positive");
        }
        if !(self.player_height > 0.0) || !(self.player_width > 0.0) {
            return invalid("player_height", "player dimensions must be positive");
        }
        if !(self.slide_height > 0.0 && self.slide_height <= self.player_height) {
            return invalid("slide_height", "must be in (0, player_height]");
        }
        if !(self.obstacle_height > 0.0) || !(self.obstacle_width > 0.0) {
            return invalid("obstacle_height", "obstacle dimensions must be positive");
        }
        if !(self.base_speed > 0.0) {
            return invalid("base_speed", "must be positive");
        }
        if !(self.speed_step >= 0.0) {
            return invalid("speed_step", "must not be negative");
        }
        if self.score_milestone == 0 {
            return invalid("score_milestone", "must be positive");
        }
        if !(self.spawn_interval_min >= 0.0) {
            return invalid("spawn_interval_min", "must not be negative");
        }
        Ok(())
    }

    /// Width of a single lane (integer division of the screen width)
    pub fn lane_width(&self) -> u32 {
        self.screen_width / self.lane_count
    }

    /// Horizontal center of `lane`
    pub fn lane_center(&self, lane: usize) -> f32 {
        let width = self.lane_width();
        (lane as u32 * width + width / 2) as f32
    }

    /// X positions of the lines separating adjacent lanes
    pub fn lane_dividers(&self) -> Vec<f32> {
        (1..self.lane_count)
            .map(|i| (i * self.lane_width()) as f32)
            .collect()
    }

    /// Lane a fresh player starts in
    pub fn start_lane(&self) -> usize {
        (self.lane_count / 2) as usize
    }

    /// Ticks the spawn timer must exceed before the next obstacle appears
    pub fn spawn_threshold(&self, speed: f32) -> f32 {
        (self.spawn_interval_base - speed * self.spawn_interval_per_speed)
            .max(self.spawn_interval_min)
    }
}
