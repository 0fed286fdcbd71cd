//! Pongout - A terminal Pong/Breakout hybrid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, scoring)
//! - `renderer`: Character canvas and crossterm terminal backend
//! - `input`: Keyboard polling and key mapping
//! - `audio`: Sound effects for paddle hits, misses and new balls
//! - `tuning`: Data-driven game balance and variant presets
//! - `settings`: Config file + command line resolution
//! - `game`: The frame loop tying it all together

pub mod audio;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningOverrides, Variant};

/// Game configuration constants
pub mod consts {
    /// Ball glyph
    pub const BALL_GLYPH: char = 'O';
    /// Paddle glyph (repeated across the paddle width)
    pub const PADDLE_GLYPH: char = '|';
    /// Obstacle glyph (repeated across the obstacle width)
    pub const OBSTACLE_GLYPH: char = '_';

    /// Smallest playfield the game will start on (border included)
    pub const MIN_FIELD_WIDTH: i32 = 24;
    pub const MIN_FIELD_HEIGHT: i32 = 16;

    /// Distance of the respawn/obstacle region from the top-left border
    pub const SPAWN_MARGIN: i32 = 2;
    /// Shrinks the respawn region to stay clear of the center and paddle
    pub const SPAWN_INSET: i32 = 6;

    /// Default directory holding the sound effects
    pub const DEFAULT_SOUND_DIR: &str = "audio";
}
