//! Collision tests between balls, playfield edges, the paddle and bricks
//!
//! All tests are axis-aligned: walls and the bottom edge are checked against
//! the ball's next position, bricks against its current centre.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// What the bottom edge did to a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomContact {
    /// Ball is not reaching the bottom edge this frame
    None,
    /// Paddle was under the ball
    Caught,
    /// Ball fell past the paddle
    Missed,
}

/// Reflect off the side walls; returns true on a bounce
pub fn reflect_side_walls(ball: &mut Ball, width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    if next_x < ball.radius || next_x > width - ball.radius {
        ball.vel.x = -ball.vel.x;
        return true;
    }
    false
}

/// Reflect off the top edge; returns true on a bounce
pub fn reflect_top_wall(ball: &mut Ball) -> bool {
    if ball.pos.y + ball.vel.y < ball.radius {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Resolve the bottom edge: the paddle catches the ball if its centre is
/// within the paddle's span, otherwise the ball is lost
pub fn resolve_bottom(ball: &mut Ball, paddle: &Paddle, height: f32) -> BottomContact {
    if ball.pos.y + ball.vel.y <= height - ball.radius {
        return BottomContact::None;
    }
    if paddle.spans(ball.pos.x) {
        ball.vel.y = -ball.vel.y;
        BottomContact::Caught
    } else {
        BottomContact::Missed
    }
}

/// Whether `point` lies strictly inside the rectangle at `origin` with `size`
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}
