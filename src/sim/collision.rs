//! Catch and miss detection
//!
//! The catch test checks the object's center x against the basket's span but
//! uses the radius vertically. The asymmetry is part of the game rules.

use super::state::{Basket, FallingObject, GameEvent, GameOverReason, GameState};
use crate::settings::GameConfig;

/// Terminal event for one object this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Caught,
    Missed,
}

/// Classify an object against the basket and the floor (catch wins)
pub fn classify(object: &FallingObject, basket: &Basket, surface_height: f32) -> Option<Contact> {
    if is_caught(object, basket) {
        Some(Contact::Caught)
    } else if is_missed(object, surface_height) {
        Some(Contact::Missed)
    } else {
        None
    }
}

/// Bottom of the object below the basket top, center strictly inside its span
#[inline]
pub fn is_caught(object: &FallingObject, basket: &Basket) -> bool {
    object.pos.y + object.radius > basket.pos.y
        && object.pos.x > basket.pos.x
        && object.pos.x < basket.right()
}

/// Whole object below the bottom edge
#[inline]
pub fn is_missed(object: &FallingObject, surface_height: f32) -> bool {
    object.pos.y - object.radius > surface_height
}

/// Remove caught and missed objects, updating score, misses and phase
///
/// Returns the events in the order they were resolved. A run that has already
/// ended is left untouched.
pub fn resolve(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_game_over() {
        return events;
    }

    let mut remaining = Vec::with_capacity(state.objects.len());
    for object in std::mem::take(&mut state.objects) {
        match classify(&object, &state.basket, config.surface_height) {
            Some(Contact::Caught) => {
                events.push(GameEvent::Caught {
                    id: object.id,
                    dangerous: object.dangerous,
                });
                if object.dangerous {
                    if state.end_run() {
                        events.push(GameEvent::GameOver {
                            reason: GameOverReason::CaughtDangerous,
                        });
                    }
                } else {
                    state.score += 1;
                }
            }
            Some(Contact::Missed) => {
                events.push(GameEvent::Missed {
                    id: object.id,
                    dangerous: object.dangerous,
                });
                if !object.dangerous {
                    state.missed_balls += 1;
                    if state.missed_balls >= config.max_missed_balls && state.end_run() {
                        events.push(GameEvent::GameOver {
                            reason: GameOverReason::TooManyMissed,
                        });
                    }
                }
            }
            None => remaining.push(object),
        }
    }
    state.objects = remaining;

    for event in &events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    fn object(id: u32, x: f32, y: f32, dangerous: bool) -> FallingObject {
        FallingObject {
            id,
            pos: Vec2::new(x, y),
            radius: 15.0,
            dangerous,
        }
    }

    fn state() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        // Basket spans x in [350, 450] at y = 770
        (GameState::new(1, &config), config)
    }

    #[test]
    fn test_catch_uses_center_x_only() {
        let (state, _) = state();
        let basket = &state.basket;

        // Edge of the circle overlaps the basket but the center does not
        assert!(!is_caught(&object(1, 345.0, 760.0, false), basket));
        // Exactly on the edge is not inside
        assert!(!is_caught(&object(1, 350.0, 760.0, false), basket));
        assert!(is_caught(&object(1, 351.0, 760.0, false), basket));
        assert!(!is_caught(&object(1, 450.0, 760.0, false), basket));
    }

    #[test]
    fn test_catch_uses_radius_vertically() {
        let (state, _) = state();
        // 755 + 15 == 770 is not strictly below the basket top
        assert!(!is_caught(&object(1, 400.0, 755.0, false), &state.basket));
        assert!(is_caught(&object(1, 400.0, 756.0, false), &state.basket));
    }

    #[test]
    fn test_safe_catch_scores() {
        let (mut state, config) = state();
        state.objects.push(object(1, 400.0, 760.0, false));
        let events = resolve(&mut state, &config);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.objects.is_empty());
        assert_eq!(events, vec![GameEvent::Caught { id: 1, dangerous: false }]);
    }

    #[test]
    fn test_dangerous_catch_ends_run_without_scoring() {
        let (mut state, config) = state();
        state.score = 12;
        state.missed_balls = 2;
        state.objects.push(object(1, 400.0, 760.0, true));
        let events = resolve(&mut state, &config);
        assert_eq!(state.score, 12);
        assert_eq!(state.missed_balls, 2);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::GameOver {
            reason: GameOverReason::CaughtDangerous
        }));
    }

    #[test]
    fn test_miss_accounting() {
        let (mut state, config) = state();
        // Far from the basket, fully below the floor
        state.objects.push(object(1, 50.0, 816.0, false));
        state.objects.push(object(2, 60.0, 816.0, true));
        // Not yet fully below (816 - 15 > 800, but 815 - 15 == 800)
        state.objects.push(object(3, 70.0, 815.0, false));

        resolve(&mut state, &config);
        assert_eq!(state.missed_balls, 1);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].id, 3);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_fifth_miss_ends_run() {
        let (mut state, config) = state();
        state.missed_balls = 4;
        state.objects.push(object(1, 50.0, 900.0, false));
        let events = resolve(&mut state, &config);
        assert_eq!(state.missed_balls, 5);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver {
                reason: GameOverReason::TooManyMissed
            })
        );
    }

    #[test]
    fn test_catch_takes_precedence_over_miss() {
        let (mut state, config) = state();
        // Inside the basket span and already below the floor
        state.objects.push(object(1, 400.0, 900.0, false));
        resolve(&mut state, &config);
        assert_eq!(state.score, 1);
        assert_eq!(state.missed_balls, 0);
    }

    #[test]
    fn test_resolve_is_noop_after_game_over() {
        let (mut state, config) = state();
        state.end_run();
        state.objects.push(object(1, 400.0, 760.0, false));
        let events = resolve(&mut state, &config);
        assert!(events.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.objects.len(), 1);
    }
}
