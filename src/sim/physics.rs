//! Basket and object motion
//!
//! Pure per-frame integration: no collision handling, no RNG.

use super::state::{Basket, FallingObject};
use crate::input::Direction;
use crate::settings::GameConfig;

/// Apply the held direction to the basket and clamp it inside the surface
pub fn move_basket(basket: &mut Basket, direction: Direction, config: &GameConfig) {
    basket.dx = direction.sign() * config.basket_speed;
    basket.pos.x += basket.dx;

    if basket.pos.x < 0.0 {
        basket.pos.x = 0.0;
    }
    if basket.right() > config.surface_width {
        basket.pos.x = config.surface_width - basket.width;
    }
}

/// Drop every object by the same amount, regardless of kind
pub fn move_objects(objects: &mut [FallingObject], gravity: f32) {
    for object in objects.iter_mut() {
        object.pos.y += gravity;
    }
}
