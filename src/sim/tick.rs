//! Per-frame simulation step
//!
//! Motion then collision resolution, applied as a single unit.

use super::autopilot;
use super::collision::resolve;
use super::physics::{move_basket, move_objects};
use super::state::{GameEvent, GameState};
use crate::input::Direction;
use crate::settings::GameConfig;

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction the player is holding
    pub direction: Direction,
    /// Demo mode - the autopilot steers instead of the player
    pub autopilot: bool,
}

/// Advance the game state by one frame
///
/// Does nothing once the run is over; only a restart resumes stepping.
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    if state.is_game_over() {
        return Vec::new();
    }

    let direction = if input.autopilot {
        autopilot::steer(state)
    } else {
        input.direction
    };

    state.time_ticks += 1;
    move_basket(&mut state.basket, direction, config);
    move_objects(&mut state.objects, config.gravity);
    resolve(state, config)
}
