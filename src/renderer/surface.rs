//! Drawing surface abstraction

use glam::Vec2;

/// RGBA colour, components in 0.0 - 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.0;
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({}, {}, {}, {})", channel(r), channel(g), channel(b), a.clamp(0.0, 1.0))
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = Color::rgb(0.9, 0.2, 0.2);
    pub const PADDLE: Color = Color::rgb(0.2, 0.4, 0.9);
    pub const BRICK: Color = Color::rgb(0.2, 0.7, 0.3);
    /// Special bricks stand out in gold
    pub const BRICK_SPECIAL: Color = Color::rgb(0.95, 0.75, 0.1);
    pub const HUD_TEXT: Color = Color::rgb(0.0, 0.0, 0.0);
}

/// 2D drawing primitives the render step needs
pub trait Surface {
    /// Erase the whole `width` x `height` area
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw `text` with its baseline starting at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_css(), "rgba(255, 0, 128, 1)");
        assert_eq!(Color([2.0, -1.0, 0.0, 0.5]).to_css(), "rgba(255, 0, 0, 0.5)");
    }
}
