//! Game state and core simulation types
//!
//! Everything a frame step reads or mutates lives here, so the step functions
//! can be driven without a live rendering surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A dangerous object landed in the basket
    CaughtDangerous,
    /// Too many safe objects hit the floor
    TooManyMissed,
}

/// Something that happened during collision resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Caught { id: u32, dangerous: bool },
    Missed { id: u32, dangerous: bool },
    GameOver { reason: GameOverReason },
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity applied this frame (0, +speed or -speed)
    pub dx: f32,
}

impl Basket {
    /// Basket centered horizontally, resting just above the bottom edge
    pub fn at_start(config: &GameConfig) -> Self {
        let (x, y) = config.basket_start();
        Self {
            pos: Vec2::new(x, y),
            width: config.basket_width,
            height: config.basket_height,
            dx: 0.0,
        }
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// An object falling from the top of the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    /// Catching a dangerous object ends the run
    pub dangerous: bool,
}

impl FallingObject {
    pub fn new(id: u32, x: f32, radius: f32, dangerous: bool) -> Self {
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            radius,
            dangerous,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player basket
    pub basket: Basket,
    /// Objects in flight (order irrelevant)
    pub objects: Vec<FallingObject>,
    /// Safe objects caught
    pub score: u64,
    /// Safe objects that fell past the floor
    pub missed_balls: u32,
    /// Frames stepped since the run started
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            basket: Basket::at_start(config),
            objects: Vec::new(),
            score: 0,
            missed_balls: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Enter the terminal phase. Returns false if the run had already ended.
    pub fn end_run(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        true
    }

    /// Append an object in flight
    pub fn push_object(&mut self, x: f32, radius: f32, dangerous: bool) -> u32 {
        let id = self.next_entity_id();
        self.objects.push(FallingObject::new(id, x, radius, dangerous));
        id
    }
}
