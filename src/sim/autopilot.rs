//! Demo-mode steering
//!
//! Chases the lowest safe object and sidesteps dangerous ones that are about
//! to land in the basket.

use super::state::GameState;
use crate::input::Direction;

/// Height above the basket at which a dangerous object is worth dodging
const DODGE_WINDOW: f32 = 120.0;
/// Dead zone around the target so the basket doesn't jitter
const TRACK_TOLERANCE: f32 = 4.0;

/// Pick a direction for the basket this frame
pub fn steer(state: &GameState) -> Direction {
    let basket = &state.basket;
    let center = basket.pos.x + basket.width / 2.0;

    // Dangerous object closing in over the basket: move away from it
    let threat = state.objects.iter().filter(|o| o.dangerous).find(|o| {
        let above = basket.pos.y - (o.pos.y + o.radius);
        (0.0..DODGE_WINDOW).contains(&above)
            && o.pos.x > basket.pos.x - o.radius
            && o.pos.x < basket.right() + o.radius
    });
    if let Some(threat) = threat {
        return if threat.pos.x >= center {
            Direction::Left
        } else {
            Direction::Right
        };
    }

    // Lowest safe object still above the basket
    let target = state
        .objects
        .iter()
        .filter(|o| !o.dangerous && o.pos.y < basket.pos.y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(target) if target.pos.x > center + TRACK_TOLERANCE => Direction::Right,
        Some(target) if target.pos.x < center - TRACK_TOLERANCE => Direction::Left,
        _ => Direction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;

    #[test]
    fn test_idle_without_objects() {
        let state = GameState::new(1, &GameConfig::default());
        assert_eq!(steer(&state), Direction::None);
    }

    #[test]
    fn test_tracks_lowest_safe_object() {
        let mut state = GameState::new(1, &GameConfig::default());
        let high = state.push_object(100.0, 15.0, false);
        let low = state.push_object(700.0, 15.0, false);
        state.objects.iter_mut().find(|o| o.id == high).unwrap().pos.y = 100.0;
        state.objects.iter_mut().find(|o| o.id == low).unwrap().pos.y = 500.0;
        assert_eq!(steer(&state), Direction::Right);
    }

    #[test]
    fn test_dodges_dangerous_object() {
        let mut state = GameState::new(1, &GameConfig::default());
        let id = state.push_object(420.0, 15.0, true);
        state.objects.iter_mut().find(|o| o.id == id).unwrap().pos.y = 700.0;
        // Basket center is 400, threat is to the right
        assert_eq!(steer(&state), Direction::Left);
    }
}
