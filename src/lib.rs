//! Basket Catch - A falling-object arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, game state)
//! - `controller`: Frame orchestration, spawn timer and run/stop lifecycle
//! - `renderer`: Drawing-surface abstraction and frame snapshots
//! - `input`: Keyboard mapping to basket direction
//! - `settings`: Data-driven game configuration

pub mod controller;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{
    CancelToken, FrameOutcome, GameController, HeadlessDriver, RunSummary, SpawnTimer,
};
pub use input::{Direction, InputState, Key};
pub use renderer::{CommandBuffer, DrawCommand, FrameSnapshot, Surface};
pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 800.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 100.0;
    pub const BASKET_HEIGHT: f32 = 20.0;
    /// Horizontal speed in pixels per frame
    pub const BASKET_SPEED: f32 = 7.0;
    /// Gap between the basket and the bottom edge
    pub const BASKET_BOTTOM_MARGIN: f32 = 10.0;

    /// Falling object defaults
    pub const OBJECT_RADIUS: f32 = 15.0;
    /// Downward displacement per frame
    pub const GRAVITY: f32 = 3.0;
    /// Chance that a spawned object is dangerous
    pub const DANGEROUS_PROBABILITY: f64 = 0.2;

    /// Safe objects that may hit the floor before the run ends
    pub const MAX_MISSED_BALLS: u32 = 5;

    /// Wall-clock spawn period, independent of frame rate
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Frame period of the headless driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
