//! Terminal rendering
//!
//! Frames are composed into a [`Canvas`] from game state, then pushed to the
//! terminal by [`Terminal`].

pub mod canvas;
pub mod terminal;

pub use canvas::Canvas;
pub use terminal::Terminal;

use crate::consts::*;
use crate::sim::{GameState, Playfield};

const PAUSE_TEXT: &str = "GAME PAUSED";
const RESUME_TEXT: &str = "Press 'p' to resume";

/// Blank bordered canvas the size of the playfield
fn bordered(field: &Playfield) -> Canvas {
    let mut canvas = Canvas::new(field.width.max(0) as usize, field.height.max(0) as usize);
    canvas.draw_border();
    canvas
}

/// Compose the in-game frame
pub fn compose(state: &GameState) -> Canvas {
    let mut canvas = bordered(&state.field);

    let paddle = &state.paddle;
    canvas.put_run(paddle.pos.x, paddle.pos.y, PADDLE_GLYPH, paddle.width);

    for ball in &state.balls {
        canvas.set(ball.pos.x, ball.pos.y, BALL_GLYPH);
    }

    if let Some(obstacle) = &state.obstacle {
        canvas.put_run(obstacle.pos.x, obstacle.pos.y, OBSTACLE_GLYPH, obstacle.width);
    }

    canvas.put_str(2, 2, &format!("Score: {}", state.score));
    canvas
}

/// Compose the pause screen
pub fn compose_pause(field: &Playfield) -> Canvas {
    let mut canvas = bordered(field);
    let row = field.height / 2;
    canvas.put_str(centered_x(field, PAUSE_TEXT), row, PAUSE_TEXT);
    canvas.put_str(centered_x(field, RESUME_TEXT), row + 1, RESUME_TEXT);
    canvas
}

fn centered_x(field: &Playfield, text: &str) -> i32 {
    (field.width - text.chars().count() as i32) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::tuning::{Tuning, Variant};
    use glam::IVec2;

    #[test]
    fn test_compose_draws_entities() {
        let field = Playfield::new(40, 20);
        let mut state = GameState::new(field, Tuning::from_variant(Variant::Classic), 5);
        state.score = -3;
        state.obstacle = Some(Obstacle {
            pos: IVec2::new(5, 6),
            width: 4,
        });

        let canvas = compose(&state);
        let rows: Vec<String> = canvas.rows().collect();

        assert_eq!(rows.len(), 20);
        assert!(rows[2].contains("Score: -3"));
        assert_eq!(canvas.get(20, 10), Some(BALL_GLYPH));
        assert_eq!(&rows[6][..], "│    ____                              │");
        let paddle_row = &rows[state.paddle.pos.y as usize];
        assert_eq!(paddle_row.matches(PADDLE_GLYPH).count(), 20);
        assert_eq!(canvas.get(0, 0), Some('┌'));
    }

    #[test]
    fn test_compose_pause() {
        let field = Playfield::new(40, 20);
        let canvas = compose_pause(&field);
        let rows: Vec<String> = canvas.rows().collect();

        assert_eq!(rows[10].trim_matches(|c| c == '│' || c == ' '), PAUSE_TEXT);
        assert_eq!(rows[11].trim_matches(|c| c == '│' || c == ' '), RESUME_TEXT);
        assert_eq!(canvas.get(14, 10), Some('G'));
    }
}
