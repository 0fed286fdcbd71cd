//! Collision detection and response on the character grid
//!
//! Balls move one cell per axis per tick, so every check is an exact
//! row/column comparison against the cell the ball is about to enter.

use super::state::{Ball, Obstacle, Paddle, Playfield};

/// Velocity component flipped by a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Reflect off the top and side borders, then advance one step
///
/// Reflection forces the direction away from the border rather than
/// negating it, so a ball sitting on a boundary cell always heads inward.
pub fn update_ball_position(ball: &mut Ball, field: &Playfield) {
    if ball.pos.y <= 1 {
        ball.vel.y = 1;
    }
    if ball.pos.x <= 1 {
        ball.vel.x = 1;
    } else if ball.pos.x >= field.width - 2 {
        ball.vel.x = -1;
    }
    ball.pos += ball.vel;
}

/// Check whether the ball is about to land on the paddle
///
/// On a hit the ball stays on the row just above the paddle and is sent
/// back upward.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.pos.y == paddle.pos.y - 1 && paddle.spans(ball.pos.x) {
        ball.vel.y = -ball.vel.y.abs();
        return true;
    }
    false
}

/// Deflect the ball off whichever obstacle face it is approaching
pub fn obstacle_collision(ball: &mut Ball, obstacle: &Obstacle) -> Option<Axis> {
    let top = obstacle.pos.y - 1;
    let bottom = obstacle.pos.y + 1;

    let approaching_face =
        (ball.pos.y == top && ball.vel.y > 0) || (ball.pos.y == bottom && ball.vel.y < 0);
    if approaching_face && obstacle.spans(ball.pos.x) {
        ball.vel.y = -ball.vel.y;
        return Some(Axis::Y);
    }

    if ball.pos.y == obstacle.pos.y {
        let left = obstacle.pos.x - 1;
        let right = obstacle.pos.x + obstacle.width;
        if (ball.pos.x == left && ball.vel.x > 0) || (ball.pos.x == right && ball.vel.x < 0) {
            ball.vel.x = -ball.vel.x;
            return Some(Axis::X);
        }
    }

    None
}

/// Whether the ball has reached or passed the paddle row
#[inline]
pub fn is_miss(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y >= paddle.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn ball(x: i32, y: i32, dx: i32, dy: i32) -> Ball {
        Ball {
            pos: IVec2::new(x, y),
            vel: IVec2::new(dx, dy),
        }
    }

    fn field() -> Playfield {
        Playfield::new(40, 20)
    }

    #[test]
    fn test_open_field_integrates() {
        let mut b = ball(10, 10, 1, -1);
        update_ball_position(&mut b, &field());
        assert_eq!(b, ball(11, 9, 1, -1));
    }

    #[test]
    fn test_reflect_top() {
        let mut b = ball(10, 1, 1, -1);
        update_ball_position(&mut b, &field());
        assert_eq!(b.vel.y, 1);
        assert_eq!(b.pos, IVec2::new(11, 2));
    }

    #[test]
    fn test_reflect_left() {
        let mut b = ball(1, 5, -1, 1);
        update_ball_position(&mut b, &field());
        assert_eq!(b.vel.x, 1);
        assert_eq!(b.pos, IVec2::new(2, 6));
    }

    #[test]
    fn test_reflect_right() {
        let mut b = ball(38, 5, 1, 1);
        update_ball_position(&mut b, &field());
        assert_eq!(b.vel.x, -1);
        assert_eq!(b.pos, IVec2::new(37, 6));
    }

    #[test]
    fn test_reflect_corner() {
        let mut b = ball(1, 1, -1, -1);
        update_ball_position(&mut b, &field());
        assert_eq!(b, ball(2, 2, 1, 1));
    }

    #[test]
    fn test_boundary_ball_moving_inward_keeps_direction() {
        let mut b = ball(1, 5, 1, 1);
        update_ball_position(&mut b, &field());
        assert_eq!(b.pos, IVec2::new(2, 6));
    }

    #[test]
    fn test_paddle_hit() {
        let paddle = Paddle {
            pos: IVec2::new(10, 18),
            width: 20,
        };
        let mut b = ball(15, 17, 1, 1);
        assert!(paddle_collision(&mut b, &paddle));
        assert_eq!(b, ball(15, 17, 1, -1));

        // Both ends of the span count
        let mut b = ball(10, 17, -1, 1);
        assert!(paddle_collision(&mut b, &paddle));
        let mut b = ball(29, 17, 1, 1);
        assert!(paddle_collision(&mut b, &paddle));
    }

    #[test]
    fn test_paddle_miss_wrong_column() {
        let paddle = Paddle {
            pos: IVec2::new(10, 18),
            width: 20,
        };
        let mut b = ball(9, 17, 1, 1);
        assert!(!paddle_collision(&mut b, &paddle));
        let mut b = ball(30, 17, 1, 1);
        assert!(!paddle_collision(&mut b, &paddle));
        assert_eq!(b, ball(30, 17, 1, 1));
    }

    #[test]
    fn test_paddle_miss_wrong_row() {
        let paddle = Paddle {
            pos: IVec2::new(10, 18),
            width: 20,
        };
        let mut b = ball(15, 16, 1, 1);
        assert!(!paddle_collision(&mut b, &paddle));
        assert_eq!(b, ball(15, 16, 1, 1));
    }

    #[test]
    fn test_obstacle_faces() {
        let obstacle = Obstacle {
            pos: IVec2::new(10, 5),
            width: 5,
        };

        // Top face, moving down
        let mut b = ball(12, 4, 1, 1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), Some(Axis::Y));
        assert_eq!(b.vel, IVec2::new(1, -1));

        // Bottom face, moving up
        let mut b = ball(14, 6, -1, -1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), Some(Axis::Y));
        assert_eq!(b.vel, IVec2::new(-1, 1));

        // Left face, moving right
        let mut b = ball(9, 5, 1, 1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), Some(Axis::X));
        assert_eq!(b.vel, IVec2::new(-1, 1));

        // Right face, moving left
        let mut b = ball(15, 5, -1, -1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), Some(Axis::X));
        assert_eq!(b.vel, IVec2::new(1, -1));
    }

    #[test]
    fn test_obstacle_ignores_receding_ball() {
        let obstacle = Obstacle {
            pos: IVec2::new(10, 5),
            width: 5,
        };

        // Above the obstacle but already moving away
        let mut b = ball(12, 4, 1, -1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), None);
        assert_eq!(b.vel, IVec2::new(1, -1));

        // Beside the obstacle moving away
        let mut b = ball(9, 5, -1, 1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), None);

        // Past the end of the span
        let mut b = ball(15, 4, 1, 1);
        assert_eq!(obstacle_collision(&mut b, &obstacle), None);
    }

    #[test]
    fn test_is_miss() {
        let paddle = Paddle {
            pos: IVec2::new(10, 18),
            width: 20,
        };
        assert!(!is_miss(&ball(0, 17, 1, 1), &paddle));
        assert!(is_miss(&ball(0, 18, 1, 1), &paddle));
        assert!(is_miss(&ball(0, 19, 1, 1), &paddle));
    }
}
