//! Renderable view of a single frame
//!
//! The simulation never draws. A host turns a [`Snapshot`] into pixels, text
//! or whatever it likes.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

/// Fixed game palette
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color(0, 0, 0);
    pub const TEXT: Color = Color(255, 255, 255);
    pub const LANE_DIVIDER: Color = Color(128, 128, 128);
    pub const PLAYER: Color = Color(0, 0, 255);
    pub const OBSTACLE: Color = Color(255, 0, 0);
}

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub screen_width: u32,
    pub screen_height: u32,
    pub background: Color,
    /// X positions of the vertical lane divider lines
    pub lane_dividers: Vec<f32>,
    pub divider_color: Color,
    pub player: Sprite,
    /// Obstacles in creation order
    pub obstacles: Vec<Sprite>,
    pub score: u64,
    pub phase: GamePhase,
    /// HUD text, top to bottom
    pub hud: Vec<String>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut hud = vec![format!("Score: {}", state.score)];
        if state.phase == GamePhase::GameOver {
            hud.push("GAME OVER".to_string());
            hud.push("Press 'R' to Restart".to_string());
        }

        Self {
            screen_width: state.config.screen_width,
            screen_height: state.config.screen_height,
            background: palette::BACKGROUND,
            lane_dividers: state.config.lane_dividers(),
            divider_color: palette::LANE_DIVIDER,
            player: Sprite {
                rect: state.player.rect,
                color: palette::PLAYER,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| Sprite {
                    rect: o.rect,
                    color: palette::OBSTACLE,
                })
                .collect(),
            score: state.score,
            phase: state.phase,
            hud,
        }
    }
}
