//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here. Coordinates are integer
//! cells in playfield space: row 0 and column 0 are the border.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen until the pause key is pressed again
    Paused,
    /// Quit requested
    Over,
}

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A ball bounced off the paddle (+1)
    PaddleHit,
    /// A ball went past the paddle and was respawned (-1)
    BallMissed,
    /// The ball pool grew by one
    BallAdded,
    /// The obstacle jumped to a new position
    ObstacleMoved,
}

/// Bordered window the game is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    /// Width including both border columns
    pub width: i32,
    /// Height including both border rows
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Whether a cell lies strictly inside the border
    pub fn is_interior(&self, pos: IVec2) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    /// Number of random column offsets in the spawn region
    pub fn spawn_span_x(&self) -> i32 {
        (self.width / 2 - SPAWN_INSET).max(1)
    }

    /// Number of random row offsets in the spawn region
    pub fn spawn_span_y(&self) -> i32 {
        (self.height / 2 - SPAWN_INSET).max(1)
    }

    /// Whether the field is large enough to play on
    pub fn is_playable(&self) -> bool {
        self.width >= MIN_FIELD_WIDTH && self.height >= MIN_FIELD_HEIGHT
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    /// Each component is always +1 or -1
    pub vel: IVec2,
}

impl Ball {
    /// A fresh ball at `pos` heading down and to the right
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            vel: IVec2::ONE,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Leftmost cell of the paddle
    pub pos: IVec2,
    pub width: i32,
}

impl Paddle {
    /// Paddle centered on the last interior row
    pub fn centered(field: &Playfield, width: i32) -> Self {
        Self {
            pos: IVec2::new((field.width - width) / 2, field.height - 2),
            width,
        }
    }

    /// Whether `x` falls on the paddle
    #[inline]
    pub fn spans(&self, x: i32) -> bool {
        x >= self.pos.x && x < self.pos.x + self.width
    }

    pub fn move_left(&mut self, step: i32) {
        self.pos.x = (self.pos.x - step).max(1);
    }

    pub fn move_right(&mut self, step: i32, field: &Playfield) {
        let max_x = (field.width - 1 - self.width).max(1);
        self.pos.x = (self.pos.x + step).min(max_x);
    }
}

/// A horizontal bar that deflects balls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Leftmost cell of the obstacle
    pub pos: IVec2,
    pub width: i32,
}

impl Obstacle {
    #[inline]
    pub fn spans(&self, x: i32) -> bool {
        x >= self.pos.x && x < self.pos.x + self.width
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub field: Playfield,
    pub phase: GamePhase,
    pub score: i64,
    /// Score at the moment the last ball was added
    pub last_growth_score: i64,
    pub paddle: Paddle,
    /// Ball pool (grows, never shrinks)
    pub balls: Vec<Ball>,
    pub obstacle: Option<Obstacle>,
    /// Frames since the last ball update
    pub tick_counter: u32,
    /// Frames since the game started (drives obstacle relocation)
    pub frame_count: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(field: Playfield, mut tuning: Tuning, seed: u64) -> Self {
        // Bars never extend past the interior
        let interior = (field.width - 2).max(1);
        tuning.paddle_width = tuning.paddle_width.clamp(1, interior);
        tuning.obstacle_width = tuning.obstacle_width.clamp(1, interior);

        let mut state = Self {
            seed,
            field,
            phase: GamePhase::Running,
            score: 0,
            last_growth_score: 0,
            paddle: Paddle::centered(&field, tuning.paddle_width),
            balls: vec![Ball::new(field.center())],
            obstacle: None,
            tick_counter: 0,
            frame_count: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };

        if state.tuning.obstacles {
            state.obstacle = Some(Obstacle {
                pos: IVec2::ZERO,
                width: state.tuning.obstacle_width,
            });
            super::tick::relocate_obstacle(&mut state);
            // Initial placement isn't a move
            state.events.clear();
        }

        state
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Variant;

    #[test]
    fn test_new_state_layout() {
        let field = Playfield::new(80, 24);
        let state = GameState::new(field, Tuning::from_variant(Variant::Classic), 7);

        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].pos, IVec2::new(40, 12));
        assert_eq!(state.balls[0].vel, IVec2::ONE);
        assert_eq!(state.paddle.pos, IVec2::new(30, 22));
        assert!(state.obstacle.is_none());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_new_state_places_obstacle_in_upper_half() {
        let field = Playfield::new(80, 24);
        let state = GameState::new(field, Tuning::from_variant(Variant::Obstacle), 42);

        let obstacle = state.obstacle.expect("obstacle variant places an obstacle");
        assert!(obstacle.pos.y >= SPAWN_MARGIN && obstacle.pos.y < field.height / 2);
        assert!(obstacle.pos.x >= SPAWN_MARGIN);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_paddle_movement_clamped() {
        let field = Playfield::new(40, 20);
        let mut paddle = Paddle::centered(&field, 20);

        for _ in 0..10 {
            paddle.move_left(3);
        }
        assert_eq!(paddle.pos.x, 1);

        for _ in 0..10 {
            paddle.move_right(3, &field);
        }
        assert_eq!(paddle.pos.x + paddle.width, field.width - 1);
    }

    #[test]
    fn test_oversized_bars_fit_interior() {
        let field = Playfield::new(40, 20);
        let mut tuning = Tuning::from_variant(Variant::Obstacle);
        tuning.paddle_width = 200;
        tuning.obstacle_width = 500;
        let mut state = GameState::new(field, tuning, 3);

        assert_eq!(state.paddle.width, 38);
        assert_eq!(state.paddle.pos.x, 1);
        state.paddle.move_left(3);
        assert_eq!(state.paddle.pos.x, 1);
        state.paddle.move_right(3, &field);
        assert_eq!(state.paddle.pos.x, 1);

        let obstacle = state.obstacle.expect("obstacle variant places an obstacle");
        assert_eq!(obstacle.width, 38);
        assert_eq!(obstacle.pos.x, 1);
    }

    #[test]
    fn test_spawn_span_never_zero() {
        let tiny = Playfield::new(10, 10);
        assert_eq!(tiny.spawn_span_x(), 1);
        assert_eq!(tiny.spawn_span_y(), 1);
        assert!(!tiny.is_playable());
    }
}
