//! Per-frame simulation step
//!
//! Advances every ball by one frame, resolves walls, paddle and bricks, and
//! settles score, lives and the session phase.

use glam::Vec2;

use super::collision::{BottomContact, point_in_rect, reflect_side_walls, reflect_top_wall, resolve_bottom};
use super::state::{Ball, GameEvent, GamePhase, GameState};
use crate::consts::SPAWN_COUNT;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Move paddle left by one step
    pub left: bool,
    /// Move paddle right by one step
    pub right: bool,
    /// Absolute horizontal drag since the last frame (touch-drag mode)
    pub drag_dx: f32,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_terminal() {
        return;
    }
    state.events.clear();

    // Brick coordinates must be current before any hit test
    let layout = state.layout;
    state.bricks.update_positions(&layout);

    // Paddle
    if input.right {
        state.paddle.shift(state.paddle.step, &layout);
    }
    if input.left {
        state.paddle.shift(-state.paddle.step, &layout);
    }
    if input.drag_dx != 0.0 {
        state.paddle.shift(input.drag_dx, &layout);
    }

    // Walls, paddle, bottom edge
    let mut lost = vec![false; state.balls.len()];
    for (i, ball) in state.balls.iter_mut().enumerate() {
        let mut bounced = reflect_side_walls(ball, layout.width);
        bounced |= reflect_top_wall(ball);
        if bounced {
            state.events.push(GameEvent::WallBounce);
        }

        match resolve_bottom(ball, &state.paddle, layout.height) {
            BottomContact::Caught => state.events.push(GameEvent::PaddleCatch),
            BottomContact::Missed => lost[i] = true,
            BottomContact::None => {}
        }

        ball.pos = ball.next_pos();
    }

    let mut index = 0;
    state.balls.retain(|_| {
        let keep = !lost[index];
        index += 1;
        keep
    });
    for _ in lost.iter().filter(|&&l| l) {
        log::debug!("Ball lost");
        state.events.push(GameEvent::BallLost);
    }

    // Bricks (spawned balls are deferred until the pass is done)
    let brick_size = Vec2::new(layout.brick_width, layout.brick_height);
    let mut spawn_at: Vec<Vec2> = Vec::new();
    for ball in &mut state.balls {
        for brick in state.bricks.bricks.iter_mut().filter(|b| b.alive) {
            if !point_in_rect(ball.pos, Vec2::new(brick.x, brick.y), brick_size) {
                continue;
            }
            ball.vel.y = -ball.vel.y;
            brick.alive = false;
            state.score += 1;
            log::debug!(
                "Brick ({}, {}) destroyed{}, score {}",
                brick.row,
                brick.column,
                if brick.special { " (special)" } else { "" },
                state.score
            );
            state.events.push(GameEvent::BrickDestroyed {
                row: brick.row,
                column: brick.column,
                special: brick.special,
            });
            if brick.special {
                spawn_at.push(brick.center(brick_size.x, brick_size.y));
            }
        }
    }

    for pos in spawn_at {
        for _ in 0..SPAWN_COUNT {
            let vel = state.random_spawn_velocity();
            state.balls.push(Ball::new(pos, vel, layout.ball_radius));
        }
        state.events.push(GameEvent::BallsSpawned { count: SPAWN_COUNT });
    }

    // Terminal checks
    if state.score >= state.bricks.total() {
        log::info!("All {} bricks destroyed, session won", state.bricks.total());
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        return;
    }

    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        if state.lives == 0 {
            log::info!("Out of lives, session lost with score {}", state.score);
            state.phase = GamePhase::Lost;
            state.events.push(GameEvent::Lost);
        } else {
            log::info!("Life lost, {} remaining", state.lives);
            state.respawn();
        }
    }
}
