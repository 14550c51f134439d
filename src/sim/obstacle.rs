//! Scrolling obstacles

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// An obstacle falling down one lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: usize,
    pub rect: Rect,
    /// Pixels per tick. Copied from the session speed at spawn and on speed-ups.
    pub speed: f32,
}

impl Obstacle {
    /// Create an obstacle in `lane`, positioned just above the visible area
    pub fn new(id: u32, lane: usize, speed: f32, config: &GameConfig) -> Self {
        let rect = Rect::centered_x(
            config.lane_center(lane),
            -config.obstacle_height,
            config.obstacle_width,
            config.obstacle_height,
        );
        Self {
            id,
            lane,
            rect,
            speed,
        }
    }

    /// Move to another lane, keeping the vertical position
    pub fn set_lane(&mut self, lane: usize, config: &GameConfig) {
        self.lane = lane;
        self.rect.set_center_x(config.lane_center(lane));
    }

    pub fn tick(&mut self) {
        self.rect.pos.y += self.speed;
    }

    /// True once the top edge has passed the bottom of the screen
    pub fn is_expired(&self, screen_height: f32) -> bool {
        self.rect.top() > screen_height
    }
}
