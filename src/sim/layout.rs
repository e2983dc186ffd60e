//! Playfield geometry
//!
//! Every size-derived quantity (ball radius, paddle size, brick grid
//! geometry, HUD anchors) is computed here from the playfield width, so a
//! resize only has to build a new `Layout`.

use glam::Vec2;

use crate::consts::*;

/// Playfield aspect ratio (width / height)
pub const ASPECT_RATIO: f32 = REFERENCE_WIDTH / REFERENCE_HEIGHT;

/// Size-derived geometry for one playfield size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    /// Playfield width relative to the 480px reference
    pub scale: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset: Vec2,
}

impl Layout {
    /// Layout at the reference size
    pub fn reference(columns: u32) -> Self {
        Self::with_width(REFERENCE_WIDTH, columns)
    }

    /// Largest playfield with the fixed aspect ratio that fits the given area
    pub fn fit(available_width: f32, available_height: f32, columns: u32) -> Self {
        let width = available_width.min(available_height * ASPECT_RATIO).max(1.0);
        Self::with_width(width, columns)
    }

    /// Layout for a playfield of the given width
    pub fn with_width(width: f32, columns: u32) -> Self {
        let scale = width / REFERENCE_WIDTH;
        let columns = columns.max(1) as f32;

        // Shrink bricks when the configured column count would overflow
        let usable = REFERENCE_WIDTH - 2.0 * BRICK_OFFSET_X - (columns - 1.0) * BRICK_PADDING;
        let brick_width = BRICK_WIDTH.min(usable / columns).max(1.0);

        Self {
            width,
            height: width / ASPECT_RATIO,
            scale,
            ball_radius: BALL_RADIUS * scale,
            paddle_width: PADDLE_WIDTH * scale,
            paddle_height: PADDLE_HEIGHT * scale,
            paddle_step: PADDLE_STEP * scale,
            brick_width: brick_width * scale,
            brick_height: BRICK_HEIGHT * scale,
            brick_padding: BRICK_PADDING * scale,
            brick_offset: Vec2::new(BRICK_OFFSET_X, BRICK_OFFSET_Y) * scale,
        }
    }

    /// Top-left pixel of the brick at (row, column)
    #[inline]
    pub fn brick_origin(&self, row: u32, column: u32) -> Vec2 {
        Vec2::new(
            column as f32 * (self.brick_width + self.brick_padding),
            row as f32 * (self.brick_height + self.brick_padding),
        ) + self.brick_offset
    }

    /// Where fresh balls appear
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - BALL_START_LIFT * self.scale)
    }

    /// Velocity of a fresh ball
    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(BALL_START_DX, BALL_START_DY)
    }

    /// Paddle x that centres it in the playfield
    pub fn paddle_center_x(&self) -> f32 {
        (self.width - self.paddle_width) / 2.0
    }

    /// Largest legal paddle x
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        (self.width - self.paddle_width).max(0.0)
    }

    pub fn hud_font_px(&self) -> f32 {
        HUD_FONT_PX * self.scale
    }

    pub fn score_anchor(&self) -> Vec2 {
        Vec2::new(SCORE_TEXT_X, HUD_BASELINE) * self.scale
    }

    pub fn lives_anchor(&self) -> Vec2 {
        Vec2::new(self.width - LIVES_TEXT_INSET * self.scale, HUD_BASELINE * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout_matches_defaults() {
        let layout = Layout::reference(5);
        assert_eq!(layout.width, 480.0);
        assert_eq!(layout.height, 320.0);
        assert_eq!(layout.brick_width, BRICK_WIDTH);
        assert_eq!(layout.brick_origin(0, 0), Vec2::new(30.0, 30.0));
        assert_eq!(layout.brick_origin(2, 4), Vec2::new(4.0 * 85.0 + 30.0, 2.0 * 30.0 + 30.0));
        assert_eq!(layout.ball_start(), Vec2::new(240.0, 290.0));
        assert_eq!(layout.paddle_center_x(), (480.0 - 75.0) / 2.0);
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        // Wide window: height is the limit
        let wide = Layout::fit(1920.0, 640.0, 5);
        assert_eq!(wide.height, 640.0);
        assert_eq!(wide.width, 960.0);
        assert_eq!(wide.scale, 2.0);
        assert_eq!(wide.ball_radius, 20.0);

        // Tall window: width is the limit
        let tall = Layout::fit(240.0, 900.0, 5);
        assert_eq!(tall.width, 240.0);
        assert_eq!(tall.height, 160.0);
        assert_eq!(tall.paddle_width, 37.5);
    }

    #[test]
    fn test_many_columns_shrink_bricks() {
        let layout = Layout::reference(10);
        let last = layout.brick_origin(0, 9);
        assert!(last.x + layout.brick_width <= layout.width - BRICK_OFFSET_X + 0.001);
        assert!(layout.brick_width < BRICK_WIDTH);
    }
}
