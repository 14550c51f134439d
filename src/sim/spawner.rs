//! Obstacle spawning and difficulty scaling

use rand::Rng;

use super::obstacle::Obstacle;
use super::state::{GameEvent, GameState};

/// Add one point; every milestone raises the speed of the session and of
/// every live obstacle.
pub fn advance_score(state: &mut GameState) {
    state.score += 1;
    if state.score.is_multiple_of(state.config.score_milestone) {
        state.speed += state.config.speed_step;
        for obstacle in &mut state.obstacles {
            obstacle.speed = state.speed;
        }
        log::info!(
            "Score {} reached, speed now {:.1}",
            state.score,
            state.speed
        );
        state.events.push(GameEvent::SpeedIncreased { speed: state.speed });
    }
}

/// Count one tick and spawn an obstacle once the timer exceeds the threshold
pub fn run_spawner(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer as f32 > state.config.spawn_threshold(state.speed) {
        spawn_obstacle(state);
        state.spawn_timer = 0;
    }
}

/// Create an obstacle in a random lane, nudging it off the lane of the most
/// recent live obstacle. The nudge can land on a repeated lane again when
/// there are fewer than three lanes.
pub fn spawn_obstacle(state: &mut GameState) {
    let lane_count = state.config.lane_count as usize;
    let id = state.next_entity_id();
    let lane = state.rng.random_range(0..lane_count);
    let mut obstacle = Obstacle::new(id, lane, state.speed, &state.config);

    if let Some(last) = state.obstacles.last() {
        if obstacle.lane == last.lane {
            let shift: isize = if state.rng.random_bool(0.5) { 1 } else { -1 };
            let shifted = (obstacle.lane as isize + shift).rem_euclid(lane_count as isize);
            obstacle.set_lane(shifted as usize, &state.config);
        }
    }

    log::debug!("Spawned obstacle {} in lane {}", obstacle.id, obstacle.lane);
    state.events.push(GameEvent::ObstacleSpawned {
        id: obstacle.id,
        lane: obstacle.lane,
    });
    state.obstacles.push(obstacle);
}
