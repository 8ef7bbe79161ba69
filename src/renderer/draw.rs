//! Frame drawing

use super::{Color, FrameSnapshot, Surface};

const HUD_FONT_SIZE: f32 = 20.0;
const GAME_OVER_FONT_SIZE: f32 = 40.0;

/// Draw basket, objects and HUD for one frame
pub fn draw_frame(snapshot: &FrameSnapshot, surface: &mut impl Surface) {
    surface.clear();

    surface.fill_rect(
        snapshot.basket_pos.x,
        snapshot.basket_pos.y,
        snapshot.basket_size.x,
        snapshot.basket_size.y,
        Color::Basket,
    );

    for object in &snapshot.objects {
        let color = if object.dangerous {
            Color::Dangerous
        } else {
            Color::Safe
        };
        surface.fill_circle(object.pos.x, object.pos.y, object.radius, color);
    }

    surface.fill_text(
        &format!("Score: {}", snapshot.score),
        10.0,
        20.0,
        HUD_FONT_SIZE,
        Color::Text,
    );
    surface.fill_text(
        &format!(
            "Missed Balls: {}/{}",
            snapshot.missed_balls, snapshot.max_missed_balls
        ),
        10.0,
        40.0,
        HUD_FONT_SIZE,
        Color::Text,
    );
}

/// Terminal overlay, drawn once when the run ends
pub fn draw_game_over(surface: &mut impl Surface) {
    let (width, height) = surface.size();
    surface.fill_text(
        "Game Over",
        width / 2.0 - 100.0,
        height / 2.0,
        GAME_OVER_FONT_SIZE,
        Color::Text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandBuffer, DrawCommand};
    use crate::settings::GameConfig;
    use crate::sim::GameState;

    #[test]
    fn test_frame_draw_order() {
        let config = GameConfig::default();
        let mut state = GameState::new(1, &config);
        state.push_object(100.0, 15.0, false);
        state.push_object(200.0, 15.0, true);
        state.missed_balls = 2;

        let mut buffer = CommandBuffer::new(800.0, 800.0);
        draw_frame(&FrameSnapshot::capture(&state, &config), &mut buffer);

        let commands = buffer.commands();
        assert_eq!(commands[0], DrawCommand::Clear);
        assert!(matches!(
            commands[1],
            DrawCommand::Rect { color: Color::Basket, .. }
        ));
        assert!(matches!(
            commands[2],
            DrawCommand::Circle { color: Color::Safe, .. }
        ));
        assert!(matches!(
            commands[3],
            DrawCommand::Circle { color: Color::Dangerous, .. }
        ));
        assert!(buffer.texts().any(|t| t == "Score: 0"));
        assert!(buffer.texts().any(|t| t == "Missed Balls: 2/5"));
    }

    #[test]
    fn test_game_over_text_position() {
        let mut buffer = CommandBuffer::new(800.0, 600.0);
        draw_game_over(&mut buffer);
        assert_eq!(
            buffer.commands(),
            &[DrawCommand::Text {
                text: "Game Over".to_string(),
                x: 300.0,
                y: 300.0,
                size: 40.0,
                color: Color::Text,
            }]
        );
    }
}
