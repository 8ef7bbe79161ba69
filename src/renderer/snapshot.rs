//! Read-only view of the state handed to the renderer

use glam::Vec2;
use serde::Serialize;

use crate::settings::GameConfig;
use crate::sim::GameState;

/// Object data needed to draw it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub dangerous: bool,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Basket top-left corner
    pub basket_pos: Vec2,
    pub basket_size: Vec2,
    pub objects: Vec<ObjectSnapshot>,
    pub score: u64,
    pub missed_balls: u32,
    pub max_missed_balls: u32,
    pub game_over: bool,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        Self {
            basket_pos: state.basket.pos,
            basket_size: Vec2::new(state.basket.width, state.basket.height),
            objects: state
                .objects
                .iter()
                .map(|o| ObjectSnapshot {
                    pos: o.pos,
                    radius: o.radius,
                    dangerous: o.dangerous,
                })
                .collect(),
            score: state.score,
            missed_balls: state.missed_balls,
            max_missed_balls: config.max_missed_balls,
            game_over: state.is_game_over(),
        }
    }

    /// Export for external tooling
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
