//! Brick Breaker - a canvas Breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `input`: Keyboard/touch input tracking
//! - `renderer`: Drawing-surface abstraction and the per-frame render step
//! - `driver`: Frame driver tying input, simulation and rendering together
//! - `settings`: Data-driven game configuration
//! - `platform`: Browser bindings (canvas, DOM events, animation frames)

pub mod driver;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameStatus, Notifier, Session};
pub use input::{InputMode, InputTracker, Key};
pub use renderer::{DisplayList, Surface};
pub use settings::{Settings, SettingsError};

/// Game configuration constants, in pixels at the reference playfield size
pub mod consts {
    /// Reference playfield dimensions (fixed 480:320 aspect ratio)
    pub const REFERENCE_WIDTH: f32 = 480.0;
    pub const REFERENCE_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Fresh ball spawns this far above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;
    /// Start velocity in pixels per frame
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Velocity ranges for balls released by special bricks
    pub const SPAWN_DX_MIN: f32 = -2.0;
    pub const SPAWN_DX_MAX: f32 = 2.0;
    pub const SPAWN_DY_MIN: f32 = -4.0;
    pub const SPAWN_DY_MAX: f32 = -2.0;
    /// Balls released per special brick
    pub const SPAWN_COUNT: usize = 2;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_STEP: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 30.0;
    pub const BRICK_OFFSET_Y: f32 = 30.0;

    /// HUD text
    pub const HUD_FONT_PX: f32 = 16.0;
    pub const HUD_BASELINE: f32 = 20.0;
    pub const SCORE_TEXT_X: f32 = 8.0;
    /// Lives text is anchored this far from the right edge
    pub const LIVES_TEXT_INSET: f32 = 65.0;
}
