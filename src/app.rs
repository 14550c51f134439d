//! Fixed-rate game loop
//!
//! One frame is one input poll, one simulation tick and one present. The
//! windowing, drawing and input devices sit behind [`Host`].

use std::thread;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::sim::{Flow, GameState, TickInput, tick};
use crate::snapshot::Snapshot;
use crate::summary::RunSummary;

/// Platform side of the loop: input devices and the screen
pub trait Host {
    /// Gather the commands issued since the last frame
    fn poll_input(&mut self, snapshot: &Snapshot) -> TickInput;

    /// Show a frame
    fn present(&mut self, snapshot: &Snapshot);
}

/// Paces the loop to a fixed number of frames per second.
///
/// A late frame is not made up for: the next frame starts immediately and
/// the schedule restarts from there.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / tick_rate.max(1),
            next: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep until the next frame is due
    pub fn wait(&mut self) {
        let now = Instant::now();
        self.next += self.frame;
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            self.next = now;
        }
    }
}

/// Game instance holding all state that outlives a session
pub struct Game {
    pub state: GameState,
    pub summary: RunSummary,
    /// Total frames run, across sessions
    pub frames: u64,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        log::info!(
            "Starting run with seed {} ({} lanes, {}x{})",
            seed,
            config.lane_count,
            config.screen_width,
            config.screen_height
        );
        Self {
            state: GameState::new(config, seed),
            summary: RunSummary::default(),
            frames: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Run a single frame's simulation step
    pub fn step(&mut self, input: &TickInput) -> Flow {
        let flow = tick(&mut self.state, input);
        self.frames += 1;

        if let Some(result) = self.summary.record(&self.state) {
            log::info!(
                "Session {} scored {} at speed {:.1}",
                result.session,
                result.score,
                result.final_speed
            );
        }

        flow
    }

    /// Drive frames until the host asks to quit.
    /// Returns the number of frames run.
    pub fn run<H: Host>(&mut self, host: &mut H, mut clock: Option<&mut FrameClock>) -> u64 {
        let start = self.frames;
        loop {
            let input = host.poll_input(&self.snapshot());
            let flow = self.step(&input);
            if flow == Flow::Quit {
                log::info!("Quit after {} frames", self.frames - start);
                break;
            }
            host.present(&self.snapshot());
            if let Some(clock) = clock.as_mut() {
                clock.wait();
            }
        }
        self.frames - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Command, GamePhase, Obstacle};

    /// Replays scripted inputs, then quits
    struct ScriptedHost {
        script: Vec<TickInput>,
        presented: Vec<Snapshot>,
    }

    impl Host for ScriptedHost {
        fn poll_input(&mut self, _snapshot: &Snapshot) -> TickInput {
            if self.script.is_empty() {
                TickInput::command(Command::Quit)
            } else {
                self.script.remove(0)
            }
        }

        fn present(&mut self, snapshot: &Snapshot) {
            self.presented.push(snapshot.clone());
        }
    }

    #[test]
    fn test_run_until_quit() {
        let mut game = Game::new(GameConfig::default(), 8);
        let mut host = ScriptedHost {
            script: vec![TickInput::default(); 5],
            presented: Vec::new(),
        };
        let frames = game.run(&mut host, None);
        assert_eq!(frames, 6);
        assert_eq!(host.presented.len(), 5);
        assert_eq!(host.presented[4].score, 5);
    }

    #[test]
    fn test_game_over_records_session() {
        let mut game = Game::new(GameConfig::default(), 8);
        for _ in 0..10 {
            game.step(&TickInput::default());
        }
        let id = game.state.next_entity_id();
        let mut obstacle = Obstacle::new(id, 1, 5.0, &game.state.config);
        obstacle.rect.pos.y = 660.0;
        game.state.obstacles.push(obstacle);

        game.step(&TickInput::default());
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(game.summary.best().map(|s| s.score), Some(11));

        // Idle frames in GameOver don't record again
        game.step(&TickInput::default());
        assert_eq!(game.summary.sessions.len(), 1);

        game.step(&TickInput::command(Command::Restart));
        assert_eq!(game.state.phase, GamePhase::Running);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.summary.sessions.len(), 1);
    }

    #[test]
    fn test_frame_clock_duration() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_duration(), Duration::from_secs(1) / 60);
    }
}
