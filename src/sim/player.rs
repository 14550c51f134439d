//! Player state machine
//!
//! The player occupies one lane and can start one timed action at a time.
//! Actions are counted in ticks, never wall-clock time.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Horizontal lane change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Current timed action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerAction {
    #[default]
    Grounded,
    Jumping { elapsed: u32 },
    Sliding { elapsed: u32 },
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub lane: usize,
    pub rect: Rect,
    pub action: PlayerAction,
    /// Vertical position restored when the current action ends
    pub base_y: f32,
}

impl Player {
    /// Create a grounded player in the start lane
    pub fn new(config: &GameConfig) -> Self {
        let lane = config.start_lane();
        let y = config.screen_height as f32 - config.player_bottom_margin - config.player_height;
        let rect = Rect::centered_x(
            config.lane_center(lane),
            y,
            config.player_width,
            config.player_height,
        );
        Self {
            lane,
            rect,
            action: PlayerAction::Grounded,
            base_y: y,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.action != PlayerAction::Grounded
    }

    /// Shift one lane left or right. Ignored mid-action; clamped at the edges.
    pub fn move_lane(&mut self, direction: Direction, config: &GameConfig) {
        if self.is_busy() {
            return;
        }
        let last_lane = config.lane_count as usize - 1;
        match direction {
            Direction::Left if self.lane > 0 => self.lane -= 1,
            Direction::Right if self.lane < last_lane => self.lane += 1,
            _ => {}
        }
        self.rect.set_center_x(config.lane_center(self.lane));
    }

    pub fn jump(&mut self) {
        if self.is_busy() {
            return;
        }
        self.action = PlayerAction::Jumping { elapsed: 0 };
        self.base_y = self.rect.pos.y;
    }

    /// Crouch: shrink the hitbox keeping its bottom edge anchored
    pub fn slide(&mut self, config: &GameConfig) {
        if self.is_busy() {
            return;
        }
        self.action = PlayerAction::Sliding { elapsed: 0 };
        self.base_y = self.rect.pos.y;
        self.rect.size.y = config.slide_height;
        self.rect.pos.y += config.player_height - config.slide_height;
    }

    /// Advance the active action by one tick
    pub fn tick(&mut self, config: &GameConfig) {
        match self.action {
            PlayerAction::Grounded => {}
            PlayerAction::Jumping { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed as f32 <= config.jump_duration as f32 / 2.0 {
                    self.rect.pos.y -= config.jump_step;
                } else {
                    self.rect.pos.y += config.jump_step;
                }

                if elapsed >= config.jump_duration {
                    self.action = PlayerAction::Grounded;
                    // Snap back to remove any drift from odd durations
                    self.rect.pos.y = self.base_y;
                } else {
                    self.action = PlayerAction::Jumping { elapsed };
                }
            }
            PlayerAction::Sliding { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= config.slide_duration {
                    self.action = PlayerAction::Grounded;
                    self.rect.size.y = config.player_height;
                    self.rect.pos.y = self.base_y;
                } else {
                    self.action = PlayerAction::Sliding { elapsed };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Left,
        Right,
        Jump,
        Slide,
        Tick,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop::sample::select(vec![Op::Left, Op::Right, Op::Jump, Op::Slide, Op::Tick])
    }

    fn apply(player: &mut Player, op: Op, config: &GameConfig) {
        match op {
            Op::Left => player.move_lane(Direction::Left, config),
            Op::Right => player.move_lane(Direction::Right, config),
            Op::Jump => player.jump(),
            Op::Slide => player.slide(config),
            Op::Tick => player.tick(config),
        }
    }

    #[test]
    fn test_new_player_position() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        assert_eq!(player.lane, 1);
        assert_eq!(player.rect.center_x(), 300.0);
        assert_eq!(player.rect.bottom(), 740.0);
        assert_eq!(player.rect.top(), 690.0);
        assert_eq!(player.action, PlayerAction::Grounded);
    }

    #[test]
    fn test_move_clamps_at_edges() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        player.move_lane(Direction::Left, &config);
        assert_eq!(player.lane, 0);
        assert_eq!(player.rect.center_x(), 100.0);
        player.move_lane(Direction::Left, &config);
        assert_eq!(player.lane, 0);

        player.move_lane(Direction::Right, &config);
        player.move_lane(Direction::Right, &config);
        player.move_lane(Direction::Right, &config);
        assert_eq!(player.lane, 2);
        assert_eq!(player.rect.center_x(), 500.0);
    }

    #[test]
    fn test_move_ignored_while_busy() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.jump();
        player.move_lane(Direction::Left, &config);
        assert_eq!(player.lane, 1);

        let mut player = Player::new(&config);
        player.slide(&config);
        player.move_lane(Direction::Right, &config);
        assert_eq!(player.lane, 1);
    }

    #[test]
    fn test_jump_arc_and_restore() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let start_y = player.rect.top();

        player.jump();
        for _ in 0..15 {
            player.tick(&config);
        }
        assert_eq!(player.rect.top(), start_y - 60.0);
        assert!(matches!(player.action, PlayerAction::Jumping { elapsed: 15 }));

        for _ in 15..config.jump_duration {
            player.tick(&config);
        }
        assert_eq!(player.rect.top(), start_y);
        assert_eq!(player.action, PlayerAction::Grounded);
    }

    #[test]
    fn test_odd_jump_duration_snaps_to_baseline() {
        let config = GameConfig {
            jump_duration: 7,
            ..GameConfig::default()
        };
        let mut player = Player::new(&config);
        let start_y = player.rect.top();

        player.jump();
        for _ in 0..6 {
            player.tick(&config);
        }
        // Three ticks up, three down
        assert_eq!(player.rect.top(), start_y);
        player.tick(&config);
        assert_eq!(player.rect.top(), start_y);
        assert_eq!(player.action, PlayerAction::Grounded);
    }

    #[test]
    fn test_slide_shrinks_and_restores() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let start_y = player.rect.top();
        let bottom = player.rect.bottom();

        player.slide(&config);
        assert_eq!(player.rect.height(), config.slide_height);
        assert_eq!(player.rect.bottom(), bottom);
        assert_eq!(player.rect.top(), start_y + 25.0);

        for _ in 0..config.slide_duration - 1 {
            player.tick(&config);
        }
        assert!(player.is_busy());
        player.tick(&config);
        assert_eq!(player.action, PlayerAction::Grounded);
        assert_eq!(player.rect.height(), config.player_height);
        assert_eq!(player.rect.top(), start_y);
    }

    #[test]
    fn test_actions_are_exclusive() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        player.jump();
        player.tick(&config);
        let before = player.clone();
        player.slide(&config);
        player.jump();
        assert_eq!(player.action, before.action);
        assert_eq!(player.rect, before.rect);
        assert_eq!(player.base_y, before.base_y);
    }

    proptest! {
        #[test]
        fn prop_lane_stays_in_bounds(
            ops in prop::collection::vec(arb_op(), 0..300),
            lane_count in 1u32..6,
        ) {
            let config = GameConfig { lane_count, ..GameConfig::default() };
            let mut player = Player::new(&config);
            for op in ops {
                apply(&mut player, op, &config);
                prop_assert!(player.lane < lane_count as usize);
                prop_assert_eq!(player.rect.center_x(), config.lane_center(player.lane));
            }
        }

        #[test]
        fn prop_grounded_player_is_at_rest(ops in prop::collection::vec(arb_op(), 0..300)) {
            let config = GameConfig::default();
            let mut player = Player::new(&config);
            let rest = player.rect;
            for op in ops {
                apply(&mut player, op, &config);
                if player.action == PlayerAction::Grounded {
                    prop_assert_eq!(player.rect.top(), rest.top());
                    prop_assert_eq!(player.rect.height(), rest.height());
                }
            }
        }
    }
}
