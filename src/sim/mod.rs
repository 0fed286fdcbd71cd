//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame counters only, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (ball pool order)
//! - No rendering, audio or terminal dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Axis, is_miss, obstacle_collision, paddle_collision, update_ball_position};
pub use state::{Ball, GameEvent, GamePhase, GameState, Obstacle, Paddle, Playfield};
pub use tick::{Command, apply_command, frame, grow_balls, relocate_obstacle, respawn_ball, step_balls};
