//! Frame and tick advancement
//!
//! A frame runs once per pass of the outer loop; the ball tick runs every
//! `frames_per_tick` frames so input stays responsive while the balls move
//! at a readable pace.

use glam::IVec2;
use rand::Rng;

use super::collision::{is_miss, obstacle_collision, paddle_collision, update_ball_position};
use super::state::{Ball, GameEvent, GamePhase, GameState};
use crate::consts::SPAWN_MARGIN;

/// A single sampled player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    /// Pause toggle
    Pause,
    Quit,
}

/// Apply one sampled command to the state
pub fn apply_command(state: &mut GameState, command: Command) {
    match command {
        Command::Quit => state.phase = GamePhase::Over,
        Command::Pause => {
            if !state.tuning.pause_enabled {
                return;
            }
            state.phase = match state.phase {
                GamePhase::Running => GamePhase::Paused,
                GamePhase::Paused => GamePhase::Running,
                GamePhase::Over => GamePhase::Over,
            };
        }
        Command::Left | Command::Right if state.phase != GamePhase::Running => {}
        Command::Left => state.paddle.move_left(state.tuning.paddle_step),
        Command::Right => {
            let field = state.field;
            state.paddle.move_right(state.tuning.paddle_step, &field);
        }
    }
}

/// Advance the game by one frame
pub fn frame(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    if state.tick_counter >= state.tuning.frames_per_tick {
        step_balls(state);
        state.tick_counter = 0;
    }
    state.tick_counter += 1;

    state.frame_count += 1;
    if state.obstacle.is_some() && state.frame_count % state.tuning.obstacle_relocate_frames == 0 {
        relocate_obstacle(state);
    }

    grow_balls(state);
}

/// Move every ball one step, resolving misses and collisions
pub fn step_balls(state: &mut GameState) {
    let field = state.field;
    let paddle = state.paddle;
    let obstacle = state.obstacle;

    for i in 0..state.balls.len() {
        if is_miss(&state.balls[i], &paddle) {
            let mut ball = state.balls[i];
            respawn_ball(&mut ball, state);
            state.balls[i] = ball;
            state.score -= 1;
            state.events.push(GameEvent::BallMissed);
            log::debug!("Ball {} missed, score {}", i, state.score);
            continue;
        }

        let ball = &mut state.balls[i];
        if paddle_collision(ball, &paddle) {
            state.score += 1;
            state.events.push(GameEvent::PaddleHit);
        }
        if let Some(obstacle) = &obstacle {
            obstacle_collision(ball, obstacle);
        }
        update_ball_position(ball, &field);
    }
}

/// Put a missed ball back somewhere in the upper-left region
pub fn respawn_ball(ball: &mut Ball, state: &mut GameState) {
    let span_x = state.field.spawn_span_x();
    let span_y = state.field.spawn_span_y();
    ball.pos = IVec2::new(
        SPAWN_MARGIN + state.rng.random_range(0..span_x),
        SPAWN_MARGIN + state.rng.random_range(0..span_y),
    );
    ball.vel = IVec2::new(if state.rng.random_bool(0.5) { 1 } else { -1 }, 1);
}

/// Jump the obstacle to a fresh random spot in the upper half
pub fn relocate_obstacle(state: &mut GameState) {
    let span_x = state.field.spawn_span_x();
    let span_y = state.field.spawn_span_y();
    let x = SPAWN_MARGIN + state.rng.random_range(0..span_x);
    let y = SPAWN_MARGIN + state.rng.random_range(0..span_y);
    let max_x = state.field.width - 1;

    if let Some(obstacle) = state.obstacle.as_mut() {
        // Keep the whole bar inside the right border on narrow fields
        obstacle.pos = IVec2::new(x.min(max_x - obstacle.width).max(1), y);
        log::debug!("Obstacle moved to ({}, {})", obstacle.pos.x, obstacle.pos.y);
        state.events.push(GameEvent::ObstacleMoved);
    }
}

/// Add a ball at the center once enough score has been gained
pub fn grow_balls(state: &mut GameState) {
    let gained = state.score - state.last_growth_score;
    if gained >= state.tuning.growth_threshold
        && state.score > 0
        && state.balls.len() < state.tuning.max_balls
    {
        state.balls.push(Ball::new(state.field.center()));
        state.last_growth_score = state.score;
        state.events.push(GameEvent::BallAdded);
        log::debug!("Ball added, {} in play", state.balls.len());
    }
}
