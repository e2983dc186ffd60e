//! Per-frame render step

use glam::Vec2;

use super::surface::{Surface, colors};
use crate::sim::GameState;

/// Draw the current state: bricks, balls, paddle, then the HUD
pub fn render(state: &GameState, surface: &mut impl Surface) {
    let layout = &state.layout;
    surface.clear(layout.width, layout.height);

    // Derived from row/column, not the cached brick coordinates
    let brick_size = Vec2::new(layout.brick_width, layout.brick_height);
    for brick in state.bricks.bricks.iter().filter(|b| b.alive) {
        let color = if brick.special {
            colors::BRICK_SPECIAL
        } else {
            colors::BRICK
        };
        surface.fill_rect(layout.brick_origin(brick.row, brick.column), brick_size, color);
    }

    for ball in &state.balls {
        surface.fill_circle(ball.pos, ball.radius, colors::BALL);
    }

    let paddle = &state.paddle;
    surface.fill_rect(
        Vec2::new(paddle.x, layout.height - paddle.height),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    );

    let font_px = layout.hud_font_px();
    surface.fill_text(
        &format!("Score: {}", state.score),
        layout.score_anchor(),
        font_px,
        colors::HUD_TEXT,
    );
    surface.fill_text(
        &format!("Lives: {}", state.lives),
        layout.lives_anchor(),
        font_px,
        colors::HUD_TEXT,
    );
}
