//! Lane Runner entry point
//!
//! Native headless runner: the autopilot plays, restarting after each game
//! over, until the frame budget is spent.
//!
//! Usage: `lane-runner [seed] [max_frames] [--realtime]`
//! Set `LANE_RUNNER_CONFIG` to a JSON file to override the defaults.

use std::path::PathBuf;

use lane_runner::sim::{Command, GamePhase, TickInput};
use lane_runner::{FrameClock, Game, GameConfig, Host, Snapshot};

/// Frames a finished session stays on the game over screen before restarting
const GAME_OVER_PAUSE_FRAMES: u32 = 120;

/// Host without a display: plays with the autopilot and logs progress
struct HeadlessHost {
    frames_left: u64,
    game_over_frames: u32,
}

impl Host for HeadlessHost {
    fn poll_input(&mut self, snapshot: &Snapshot) -> TickInput {
        if self.frames_left == 0 {
            return TickInput::command(Command::Quit);
        }
        self.frames_left -= 1;

        match snapshot.phase {
            GamePhase::Running => TickInput {
                commands: Vec::new(),
                autopilot: true,
            },
            GamePhase::GameOver => {
                self.game_over_frames += 1;
                if self.game_over_frames >= GAME_OVER_PAUSE_FRAMES {
                    self.game_over_frames = 0;
                    TickInput::command(Command::Restart)
                } else {
                    TickInput::default()
                }
            }
        }
    }

    fn present(&mut self, snapshot: &Snapshot) {
        let running = snapshot.phase == GamePhase::Running;
        if running && snapshot.score > 0 && snapshot.score.is_multiple_of(600) {
            log::debug!(
                "{} ({} obstacles on screen)",
                snapshot.hud.join(" | "),
                snapshot.obstacles.len()
            );
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Lane Runner (headless) starting...");

    let mut seed = 0x5eed;
    let mut max_frames = 60 * 60;
    let mut realtime = false;
    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
            continue;
        }
        match (positional, arg.parse::<u64>()) {
            (0, Ok(value)) => seed = value,
            (1, Ok(value)) => max_frames = value,
            _ => log::warn!("Ignoring argument `{}`", arg),
        }
        positional += 1;
    }

    let config_path = std::env::var_os("LANE_RUNNER_CONFIG").map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref());
    let tick_rate = config.tick_rate;

    let mut game = Game::new(config, seed);
    let mut host = HeadlessHost {
        frames_left: max_frames,
        game_over_frames: 0,
    };
    let mut clock = FrameClock::new(tick_rate);
    let frames = game.run(&mut host, realtime.then_some(&mut clock));

    if game.state.phase == GamePhase::Running && game.state.score > 0 {
        log::info!("Unfinished session at score {}", game.state.score);
    }
    log::info!(
        "Played {} frames over {} sessions",
        frames,
        game.state.session
    );

    if let (Some(best), Some(mean)) = (game.summary.best(), game.summary.mean_score()) {
        log::info!(
            "Best session {} with score {} (mean {:.1})",
            best.session,
            best.score,
            mean
        );
    }

    match serde_json::to_string_pretty(&game.summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize run summary: {}", e),
    }
}
