//! Game state and core simulation types
//!
//! Everything a session needs to advance deterministically lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::Player;
use crate::config::{ConfigError, GameConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player hit an obstacle; waiting for restart
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { id: u32, lane: usize },
    ObstacleRetired { id: u32 },
    SpeedIncreased { speed: f32 },
    Collision { obstacle_id: u32, score: u64 },
    Restarted { session: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub config: GameConfig,
    /// Survives restarts so a whole run replays from the seed
    pub(crate) rng: Pcg32,
    /// 1-based count of sessions played in this run
    pub session: u32,
    pub phase: GamePhase,
    pub score: u64,
    /// Baseline obstacle speed (pixels per tick)
    pub speed: f32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Active ticks simulated in the current session
    pub time_ticks: u64,
    pub player: Player,
    /// Live obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a running session.
    ///
    /// `config` must pass [`GameConfig::validate`]; lane layout divides by
    /// the lane count. Use [`GameState::try_new`] for unchecked input.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session: 1,
            phase: GamePhase::Running,
            score: 0,
            speed: config.base_speed,
            spawn_timer: 0,
            time_ticks: 0,
            player: Player::new(&config),
            obstacles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// Validate `config`, then create a running session
    pub fn try_new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Discard the session and start a fresh one with the same config
    pub fn restart(&mut self) {
        self.session += 1;
        self.phase = GamePhase::Running;
        self.score = 0;
        self.speed = self.config.base_speed;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.next_id = 1;
        self.events.push(GameEvent::Restarted {
            session: self.session,
        });
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
