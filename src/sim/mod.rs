//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, fixed per-frame displacements
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contact, classify, resolve};
pub use physics::{move_basket, move_objects};
pub use spawn::Spawner;
pub use state::{Basket, FallingObject, GameEvent, GameOverReason, GamePhase, GameState};
pub use tick::{TickInput, tick};
