//! Player vs obstacle collision detection

use super::obstacle::Obstacle;
use super::player::Player;

/// First obstacle (in creation order) whose hitbox overlaps the player's
pub fn first_collision<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| player.rect.overlaps(&o.rect))
}
