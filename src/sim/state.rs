//! Game state and core simulation types
//!
//! Everything the physics step reads or writes lives in `GameState`; the
//! render step only reads it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::layout::Layout;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Last life lost
    Lost,
}

impl GamePhase {
    /// Win/loss end the session
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Won => Some(Outcome::Won),
            GamePhase::Lost => Some(Outcome::Lost),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Text shown in the blocking game-over notification
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "Congratulations, you won!",
            Outcome::Lost => "Game Over",
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallBounce,
    PaddleCatch,
    BrickDestroyed { row: u32, column: u32, special: bool },
    BallsSpawned { count: usize },
    BallLost,
    LifeLost { remaining: u32 },
    Won,
    Lost,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Fresh ball at the layout's start position
    pub fn at_start(layout: &Layout) -> Self {
        Self::new(layout.ball_start(), layout.ball_start_velocity(), layout.ball_radius)
    }

    /// Position after one more frame at the current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle, drawn along the bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge, kept within [0, playfield width - width]
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance per frame while a direction is held
    pub step: f32,
}

impl Paddle {
    pub fn centered(layout: &Layout) -> Self {
        Self {
            x: layout.paddle_center_x(),
            width: layout.paddle_width,
            height: layout.paddle_height,
            step: layout.paddle_step,
        }
    }

    /// Move by `dx`, clamped to the playfield
    pub fn shift(&mut self, dx: f32, layout: &Layout) {
        self.x = (self.x + dx).clamp(0.0, layout.paddle_max_x());
    }

    /// Whether `x` lies strictly within the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

/// A brick cell in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub row: u32,
    pub column: u32,
    /// Cached top-left pixel position, refreshed every frame from the layout
    pub x: f32,
    pub y: f32,
    pub alive: bool,
    /// Releases extra balls when destroyed
    pub special: bool,
}

impl Brick {
    /// Brick centre for the given brick size
    pub fn center(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.x + width / 2.0, self.y + height / 2.0)
    }
}

/// Fixed rows x columns arrangement of bricks, row-major
#[derive(Debug, Clone)]
pub struct BrickGrid {
    pub rows: u32,
    pub columns: u32,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build a fully alive grid; each brick is special with probability `special_chance`
    pub fn new(rows: u32, columns: u32, special_chance: f64, rng: &mut Pcg32) -> Self {
        let chance = special_chance.clamp(0.0, 1.0);
        let mut bricks = Vec::with_capacity((rows * columns) as usize);
        for row in 0..rows {
            for column in 0..columns {
                bricks.push(Brick {
                    row,
                    column,
                    x: 0.0,
                    y: 0.0,
                    alive: true,
                    special: rng.random_bool(chance),
                });
            }
        }
        Self {
            rows,
            columns,
            bricks,
        }
    }

    /// rows x columns
    pub fn total(&self) -> u32 {
        self.rows * self.columns
    }

    pub fn alive_count(&self) -> u32 {
        self.bricks.iter().filter(|b| b.alive).count() as u32
    }

    pub fn destroyed_count(&self) -> u32 {
        self.total() - self.alive_count()
    }

    pub fn get(&self, row: u32, column: u32) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get((row * self.columns + column) as usize)
    }

    /// Recompute cached pixel coordinates from row/column
    pub fn update_positions(&mut self, layout: &Layout) {
        for brick in &mut self.bricks {
            let origin = layout.brick_origin(brick.row, brick.column);
            brick.x = origin.x;
            brick.y = origin.y;
        }
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub layout: Layout,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub paddle: Paddle,
    /// Active balls (unordered)
    pub balls: Vec<Ball>,
    pub bricks: BrickGrid,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    /// Sessions played so far, including this one
    pub session: u32,
}

impl GameState {
    /// Create a session at the reference playfield size
    pub fn new(settings: Settings) -> Self {
        let layout = Layout::reference(settings.columns);
        Self::with_layout(settings, layout)
    }

    /// Create a session for a specific playfield layout
    pub fn with_layout(settings: Settings, layout: Layout) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut bricks = BrickGrid::new(
            settings.rows,
            settings.columns,
            settings.special_chance,
            &mut rng,
        );
        bricks.update_positions(&layout);

        log::info!(
            "New session: {}x{} bricks ({} special), {} lives, seed {}",
            settings.rows,
            settings.columns,
            bricks.bricks.iter().filter(|b| b.special).count(),
            settings.lives,
            seed
        );

        Self {
            lives: settings.lives,
            settings,
            layout,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            paddle: Paddle::centered(&layout),
            balls: vec![Ball::at_start(&layout)],
            bricks,
            events: Vec::new(),
            session: 1,
        }
    }

    /// Start a fresh session with the same settings and layout.
    ///
    /// Unseeded settings draw a new grid; seeded settings replay the same one.
    pub fn reset(&mut self) {
        let session = self.session + 1;
        *self = Self::with_layout(self.settings.clone(), self.layout);
        self.session = session;
    }

    /// Put a single fresh ball in play and recenter the paddle
    pub fn respawn(&mut self) {
        self.balls.clear();
        self.balls.push(Ball::at_start(&self.layout));
        self.paddle = Paddle::centered(&self.layout);
    }

    /// Apply a new playfield layout, rescaling live entities proportionally
    pub fn resize(&mut self, layout: Layout) {
        let old = self.layout;
        let sx = layout.width / old.width;
        let sy = layout.height / old.height;

        for ball in &mut self.balls {
            ball.pos = Vec2::new(ball.pos.x * sx, ball.pos.y * sy);
            ball.radius = layout.ball_radius;
        }

        let x = self.paddle.x * sx;
        self.paddle = Paddle::centered(&layout);
        self.paddle.x = x.clamp(0.0, layout.paddle_max_x());

        self.bricks.update_positions(&layout);
        self.layout = layout;
        log::debug!("Resized playfield to {}x{}", layout.width, layout.height);
    }

    /// Random velocity for a ball released by a special brick
    pub fn random_spawn_velocity(&mut self) -> Vec2 {
        use crate::consts::*;
        Vec2::new(
            self.rng.random_range(SPAWN_DX_MIN..=SPAWN_DX_MAX),
            self.rng.random_range(SPAWN_DY_MIN..=SPAWN_DY_MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Settings {
        Settings {
            seed: Some(7),
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_session() {
        let state = GameState::new(seeded());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.total(), 15);
        assert_eq!(state.bricks.alive_count(), 15);
        assert_eq!(state.balls[0].pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.paddle.x, (480.0 - 75.0) / 2.0);
    }

    #[test]
    fn test_special_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(1);
        let none = BrickGrid::new(3, 5, 0.0, &mut rng);
        assert!(none.bricks.iter().all(|b| !b.special));
        let all = BrickGrid::new(3, 5, 1.0, &mut rng);
        assert!(all.bricks.iter().all(|b| b.special));
    }

    #[test]
    fn test_grid_lookup() {
        let mut rng = Pcg32::seed_from_u64(1);
        let grid = BrickGrid::new(3, 5, 0.0, &mut rng);
        let brick = grid.get(2, 4).unwrap();
        assert_eq!((brick.row, brick.column), (2, 4));
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    fn test_seeded_grid_is_reproducible() {
        let settings = Settings {
            special_chance: 0.5,
            ..seeded()
        };
        let a = GameState::new(settings.clone());
        let b = GameState::new(settings);
        let flags = |s: &GameState| s.bricks.bricks.iter().map(|b| b.special).collect::<Vec<_>>();
        assert_eq!(flags(&a), flags(&b));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new(seeded());
        state.score = 4;
        state.lives = 1;
        state.bricks.bricks[0].alive = false;
        state.balls.clear();
        state.phase = GamePhase::Lost;

        state.reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.alive_count(), 15);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.session, 2);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let layout = Layout::reference(5);
        let mut paddle = Paddle::centered(&layout);
        paddle.shift(-1000.0, &layout);
        assert_eq!(paddle.x, 0.0);
        paddle.shift(1000.0, &layout);
        assert_eq!(paddle.x, 480.0 - 75.0);
    }

    #[test]
    fn test_resize_scales_entities() {
        let mut state = GameState::new(seeded());
        state.resize(Layout::with_width(960.0, 5));
        assert_eq!(state.balls[0].pos, Vec2::new(480.0, 580.0));
        assert_eq!(state.balls[0].radius, 20.0);
        assert_eq!(state.paddle.width, 150.0);
        assert_eq!(state.paddle.x, 405.0);
        assert_eq!(state.bricks.bricks[0].x, 60.0);
    }

    #[test]
    fn test_spawn_velocity_range() {
        let mut state = GameState::new(seeded());
        for _ in 0..200 {
            let v = state.random_spawn_velocity();
            assert!((-2.0..=2.0).contains(&v.x));
            assert!((-4.0..=-2.0).contains(&v.y));
        }
    }
}
