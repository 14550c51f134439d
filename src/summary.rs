//! Run summary
//!
//! Collects one result per finished session from the tick's collision
//! events. A run is every session played from one seed.

use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, GameState};

/// How a single session ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    /// 1-based session number within the run
    pub session: u32,
    pub score: u64,
    /// Obstacle speed when the player was hit
    pub final_speed: f32,
    /// Obstacle that ended the session
    pub obstacle_id: u32,
    /// Active ticks the session lasted
    pub ticks: u64,
}

/// Finished sessions of a run, in play order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub sessions: Vec<SessionResult>,
}

impl RunSummary {
    /// Record a session if the last tick ended it.
    /// Returns the new result, if any.
    pub fn record(&mut self, state: &GameState) -> Option<&SessionResult> {
        let (obstacle_id, score) = state.events.iter().find_map(|event| match event {
            GameEvent::Collision { obstacle_id, score } => Some((*obstacle_id, *score)),
            _ => None,
        })?;
        self.sessions.push(SessionResult {
            session: state.session,
            score,
            final_speed: state.speed,
            obstacle_id,
            ticks: state.time_ticks,
        });
        self.sessions.last()
    }

    /// Highest scoring session; the earlier one wins a tie
    pub fn best(&self) -> Option<&SessionResult> {
        self.sessions.iter().fold(None, |best, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(s),
        })
    }

    pub fn total_ticks(&self) -> u64 {
        self.sessions.iter().map(|s| s.ticks).sum()
    }

    pub fn mean_score(&self) -> Option<f64> {
        if self.sessions.is_empty() {
            return None;
        }
        let total: u64 = self.sessions.iter().map(|s| s.score).sum();
        Some(total as f64 / self.sessions.len() as f64)
    }
}
