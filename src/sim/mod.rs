//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per displayed frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{BottomContact, point_in_rect};
pub use layout::{ASPECT_RATIO, Layout};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Outcome, Paddle};
pub use tick::{TickInput, tick};
