//! Frame orchestration
//!
//! [`GameController`] owns the game state and runs one frame at a time:
//! step the simulation, draw, then decide whether to keep going. Spawning is
//! driven separately by the host's interval timer (or [`SpawnTimer`]) and only
//! ever happens between frames.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::input::{InputState, Key};
use crate::renderer::{FrameSnapshot, Surface, draw_frame, draw_game_over};
use crate::settings::GameConfig;
use crate::sim::{GameState, Spawner, TickInput, tick};

/// Shared stop signal for a host loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fixed-period timer fed with elapsed wall-clock time
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    elapsed_ms: f64,
    armed: bool,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            armed: true,
        }
    }

    /// Accumulate time and return how many periods completed
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut fired = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            fired += 1;
        }
        fired
    }

    /// Stop firing and drop any partial period
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0.0;
    }

    /// Start a fresh period
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed_ms = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule the next frame
    Continue,
    /// The run ended this frame; the terminal screen has been drawn
    GameOver,
    /// Not running (already over, or cancelled)
    Stopped,
}

/// Owns one game and drives it frame by frame
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    state: GameState,
    spawner: Spawner,
    input: InputState,
    autopilot: bool,
    spawn_timer: SpawnTimer,
    running: bool,
    cancel: CancelToken,
}

impl GameController {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        log::info!("New game with seed {seed}");
        Self {
            state: GameState::new(seed, &config),
            spawner: Spawner::new(seed),
            input: InputState::default(),
            autopilot: false,
            spawn_timer: SpawnTimer::new(config.spawn_interval_ms),
            running: true,
            cancel: CancelToken::new(),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// True while frames should keep being scheduled
    pub fn is_running(&self) -> bool {
        self.running && !self.cancel.is_cancelled()
    }

    /// Handle for stopping the loop from outside
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn spawn_timer(&self) -> &SpawnTimer {
        &self.spawn_timer
    }

    /// Key press. `Restart` only has an effect once the run is over.
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Restart {
            if self.state.is_game_over() {
                let seed = next_seed(self.state.seed);
                self.restart(seed);
            }
            return;
        }
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Interval callback: add one object if the game is running
    pub fn spawn_tick(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        Some(self.spawner.spawn(&mut self.state, &self.config))
    }

    /// Feed wall-clock time to the built-in spawn timer
    pub fn advance_spawn_timer(&mut self, dt_ms: f64) -> u32 {
        let fired = self.spawn_timer.advance(dt_ms);
        for _ in 0..fired {
            self.spawn_tick();
        }
        fired
    }

    /// Run one frame: step, draw, and report whether to continue
    pub fn frame(&mut self, surface: &mut impl Surface) -> FrameOutcome {
        if !self.is_running() {
            self.running = false;
            return FrameOutcome::Stopped;
        }

        let input = TickInput {
            direction: self.input.direction(),
            autopilot: self.autopilot,
        };
        tick(&mut self.state, &input, &self.config);
        draw_frame(&self.snapshot(), surface);

        if self.state.is_game_over() {
            draw_game_over(surface);
            self.running = false;
            self.spawn_timer.disarm();
            log::info!(
                "Game over after {} frames: score {}, missed {}/{}",
                self.state.time_ticks,
                self.state.score,
                self.state.missed_balls,
                self.config.max_missed_balls
            );
            return FrameOutcome::GameOver;
        }
        FrameOutcome::Continue
    }

    /// Reset everything and resume frames and spawning. A cancelled token
    /// stays cancelled.
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(seed, &self.config);
        self.spawner = Spawner::new(seed);
        self.input.clear();
        self.spawn_timer.arm();
        self.running = true;
        log::info!("Restarted with seed {seed}");
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state, &self.config)
    }
}

/// SplitMix64 step, used to derive a fresh seed on keyboard restart
fn next_seed(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Summary of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: u64,
    pub missed_balls: u32,
    pub game_over: bool,
}

/// Drives a controller on a virtual clock, one fixed-length frame at a time
#[derive(Debug, Clone)]
pub struct HeadlessDriver {
    frame_ms: f64,
    max_frames: u64,
}

impl HeadlessDriver {
    pub fn new(frame_ms: f64, max_frames: u64) -> Self {
        Self {
            frame_ms,
            max_frames,
        }
    }

    /// Run until cancelled, game over, or the frame budget is spent
    pub fn run(&self, controller: &mut GameController, surface: &mut impl Surface) -> RunSummary {
        let mut frames = 0;
        while frames < self.max_frames {
            // Timer callbacks land between frames
            controller.advance_spawn_timer(self.frame_ms);
            let outcome = controller.frame(surface);
            if outcome == FrameOutcome::Stopped {
                break;
            }
            frames += 1;
            if outcome == FrameOutcome::GameOver {
                break;
            }
        }

        let state = controller.state();
        RunSummary {
            frames,
            score: state.score,
            missed_balls: state.missed_balls,
            game_over: state.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::renderer::CommandBuffer;
    use crate::sim::GamePhase;

    fn buffer() -> CommandBuffer {
        CommandBuffer::new(800.0, 800.0)
    }

    #[test]
    fn test_spawn_timer_periods() {
        let mut timer = SpawnTimer::new(1000.0);
        assert_eq!(timer.advance(999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.advance(2500.0), 2);
        timer.disarm();
        assert_eq!(timer.advance(5000.0), 0);
        timer.arm();
        assert_eq!(timer.advance(999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
    }

    #[test]
    fn test_spawn_rate_is_independent_of_frame_rate() {
        let mut controller = GameController::new(GameConfig::default(), 1);
        // 60 frames at 60 Hz is one second of wall clock
        for _ in 0..60 {
            controller.advance_spawn_timer(FRAME_MS);
        }
        // Floating point accumulation may land just short of the boundary
        controller.advance_spawn_timer(0.001);
        assert_eq!(controller.state().objects.len(), 1);

        let mut controller = GameController::new(GameConfig::default(), 1);
        controller.advance_spawn_timer(250.0);
        controller.advance_spawn_timer(250.0);
        controller.advance_spawn_timer(500.0);
        assert_eq!(controller.state().objects.len(), 1);
    }

    #[test]
    fn test_keys_drive_basket() {
        let mut controller = GameController::new(GameConfig::default(), 1);
        let mut surface = buffer();
        controller.key_down(Key::Right);
        controller.frame(&mut surface);
        assert_eq!(controller.state().basket.pos.x, 357.0);
        controller.key_up(Key::Right);
        controller.frame(&mut surface);
        assert_eq!(controller.state().basket.pos.x, 357.0);
    }

    #[test]
    fn test_game_over_halts_frames_and_spawning() {
        let mut controller = GameController::new(GameConfig::default(), 1);
        let mut surface = buffer();
        controller.state.push_object(400.0, 15.0, true);

        let mut outcome = FrameOutcome::Continue;
        while outcome == FrameOutcome::Continue {
            outcome = controller.frame(&mut surface);
        }
        assert_eq!(outcome, FrameOutcome::GameOver);
        assert!(!controller.is_running());
        assert!(surface.texts().any(|t| t == "Game Over"));
        assert!(!controller.spawn_timer().is_armed());

        // Further frames and spawns do nothing
        let before = controller.snapshot();
        assert_eq!(controller.frame(&mut surface), FrameOutcome::Stopped);
        assert_eq!(controller.spawn_tick(), None);
        assert_eq!(controller.advance_spawn_timer(10_000.0), 0);
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_restart_resets_everything() {
        let config = GameConfig::default();
        let mut controller = GameController::new(config.clone(), 1);
        let mut surface = buffer();
        controller.key_down(Key::Left);
        for _ in 0..10 {
            controller.frame(&mut surface);
        }
        controller.spawn_tick();
        controller.state.score = 9;
        controller.state.missed_balls = 3;
        controller.state.end_run();

        controller.restart(2);
        let state = controller.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.basket.pos.x, 350.0);
        assert_eq!(state.basket.pos.y, 770.0);
        assert!(state.objects.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.missed_balls, 0);
        assert!(controller.is_running());
        assert!(controller.spawn_timer().is_armed());
        assert_eq!(controller.input().direction(), crate::input::Direction::None);
        assert_eq!(controller.frame(&mut surface), FrameOutcome::Continue);
    }

    #[test]
    fn test_restart_key_only_after_game_over() {
        let mut controller = GameController::new(GameConfig::default(), 1);
        controller.state.score = 3;
        controller.key_down(Key::Restart);
        assert_eq!(controller.state().score, 3);

        controller.state.end_run();
        controller.key_down(Key::Restart);
        assert_eq!(controller.state().score, 0);
        assert!(!controller.state().is_game_over());
        assert_ne!(controller.state().seed, 1);
    }

    #[test]
    fn test_cancel_stops_loop() {
        let mut controller = GameController::new(GameConfig::default(), 1);
        let token = controller.cancel_token();
        token.cancel();
        assert_eq!(controller.frame(&mut buffer()), FrameOutcome::Stopped);
        assert_eq!(controller.spawn_tick(), None);
    }

    #[test]
    fn test_headless_run_respects_budget() {
        let mut controller = GameController::new(GameConfig::default(), 42);
        let summary = HeadlessDriver::new(FRAME_MS, 30).run(&mut controller, &mut buffer());
        assert_eq!(summary.frames, 30);
        assert!(!summary.game_over);
    }

    #[test]
    fn test_headless_run_without_input_eventually_ends() {
        // Nobody moves the basket, so misses pile up
        let mut controller = GameController::new(GameConfig::default(), 42);
        let summary =
            HeadlessDriver::new(FRAME_MS, 1_000_000).run(&mut controller, &mut buffer());
        assert!(summary.game_over);
        assert!(summary.frames < 1_000_000);
    }
}
