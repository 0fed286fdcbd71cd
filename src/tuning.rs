//! Game balance constants and variant presets
//!
//! Every number the frame loop depends on lives in [`Tuning`]. A [`Variant`]
//! picks a preset; [`TuningOverrides`] adjusts individual values on top.

use serde::{Deserialize, Serialize};

/// Gameplay variant presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Bare field, fast ball growth, no sound
    Classic,
    /// Adds the wandering obstacle
    Obstacle,
    /// Obstacle, sound effects and pause
    #[default]
    Arcade,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Obstacle => "obstacle",
            Variant::Arcade => "arcade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "obstacle" | "obstacles" => Some(Variant::Obstacle),
            "arcade" => Some(Variant::Arcade),
            _ => None,
        }
    }

    /// Whether this preset places an obstacle on the field
    pub fn obstacles(&self) -> bool {
        match self {
            Variant::Classic => false,
            Variant::Obstacle => true,
            Variant::Arcade => true,
        }
    }

    /// Score gained since the last growth before another ball is added
    pub fn growth_threshold(&self) -> i64 {
        match self {
            Variant::Classic => 5,
            Variant::Obstacle => 10,
            Variant::Arcade => 10,
        }
    }

    pub fn audio(&self) -> bool {
        matches!(self, Variant::Arcade)
    }

    pub fn pause_enabled(&self) -> bool {
        matches!(self, Variant::Arcade)
    }
}

/// Resolved balance values for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    /// Keyboard samples per frame
    pub poll_iterations: u32,
    /// Sleep between keyboard samples (microseconds)
    pub poll_interval_us: u64,
    /// Frames between ball updates
    pub frames_per_tick: u32,
    /// Frames between obstacle relocations
    pub obstacle_relocate_frames: u64,
    pub growth_threshold: i64,
    pub max_balls: usize,
    /// Columns moved per arrow key press
    pub paddle_step: i32,
    pub paddle_width: i32,
    pub obstacle_width: i32,
    pub obstacles: bool,
    pub pause_enabled: bool,
    pub audio: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl Tuning {
    /// Create tuning from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            poll_iterations: 15,
            poll_interval_us: 500,
            frames_per_tick: 5,
            obstacle_relocate_frames: 1000,
            growth_threshold: variant.growth_threshold(),
            max_balls: 3,
            paddle_step: 3,
            paddle_width: 20,
            obstacle_width: 20,
            obstacles: variant.obstacles(),
            pause_enabled: variant.pause_enabled(),
            audio: variant.audio(),
        }
    }

    /// Apply user overrides on top of the preset values
    pub fn apply(&mut self, overrides: &TuningOverrides) {
        if let Some(v) = overrides.poll_iterations {
            self.poll_iterations = v.max(1);
        }
        if let Some(v) = overrides.poll_interval_us {
            self.poll_interval_us = v;
        }
        if let Some(v) = overrides.frames_per_tick {
            self.frames_per_tick = v;
        }
        if let Some(v) = overrides.obstacle_relocate_frames {
            // Zero would relocate on every modulo check
            self.obstacle_relocate_frames = v.max(1);
        }
        if let Some(v) = overrides.growth_threshold {
            self.growth_threshold = v;
        }
        if let Some(v) = overrides.max_balls {
            self.max_balls = v.max(1);
        }
        if let Some(v) = overrides.paddle_step {
            self.paddle_step = v.max(1);
        }
        if let Some(v) = overrides.paddle_width {
            self.paddle_width = v.max(1);
        }
        if let Some(v) = overrides.obstacle_width {
            self.obstacle_width = v.max(1);
        }
        if let Some(v) = overrides.obstacles {
            self.obstacles = v;
        }
        if let Some(v) = overrides.pause_enabled {
            self.pause_enabled = v;
        }
        if let Some(v) = overrides.audio {
            self.audio = v;
        }
    }
}

/// Optional per-field overrides, as read from the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningOverrides {
    pub poll_iterations: Option<u32>,
    pub poll_interval_us: Option<u64>,
    pub frames_per_tick: Option<u32>,
    pub obstacle_relocate_frames: Option<u64>,
    pub growth_threshold: Option<i64>,
    pub max_balls: Option<usize>,
    pub paddle_step: Option<i32>,
    pub paddle_width: Option<i32>,
    pub obstacle_width: Option<i32>,
    pub obstacles: Option<bool>,
    pub pause_enabled: Option<bool>,
    pub audio: Option<bool>,
}
