//! Rendering module
//!
//! The game draws through the [`Surface`] trait using a handful of 2D
//! primitives. Hosts supply the implementation (a canvas on the web, a
//! [`CommandBuffer`] headless and in tests).

pub mod commands;
pub mod draw;
pub mod snapshot;

pub use commands::{CommandBuffer, DrawCommand};
pub use draw::{draw_frame, draw_game_over};
pub use snapshot::{FrameSnapshot, ObjectSnapshot};

use serde::{Deserialize, Serialize};

/// Palette used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Basket,
    Safe,
    Dangerous,
    Text,
}

impl Color {
    /// CSS color string
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Basket => "brown",
            Color::Safe => "green",
            Color::Dangerous => "red",
            Color::Text => "black",
        }
    }
}

/// A 2D drawing target with a fixed size
pub trait Surface {
    /// (width, height) in pixels
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// `size` is the font size in pixels; `(x, y)` is the text baseline origin
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}
