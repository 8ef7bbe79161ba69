//! Keyboard input mapping
//!
//! Key events update an [`InputState`] synchronously; the simulation reads the
//! current [`Direction`] once per frame.

use serde::{Deserialize, Serialize};

/// Horizontal direction the player is holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    /// -1, 0 or +1
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::None => 0.0,
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Restart,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name. Anything else is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Enter" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Currently held direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    direction: Direction,
}

impl InputState {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Press a direction key. The latest press wins.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.direction = Direction::Left,
            Key::Right => self.direction = Direction::Right,
            Key::Restart => {}
        }
    }

    /// Releasing either direction key stops the basket
    pub fn key_up(&mut self, key: Key) {
        if matches!(key, Key::Left | Key::Right) {
            self.direction = Direction::None;
        }
    }

    pub fn clear(&mut self) {
        self.direction = Direction::None;
    }
}
