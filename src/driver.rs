//! Frame driver
//!
//! One `Session::frame` call per display refresh: sample input, advance the
//! simulation one step, draw. A win or loss delivers a blocking notification
//! and resets the session in place.

use crate::input::InputTracker;
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{GameState, Layout, Outcome, tick};

/// Receives the end-of-session notification.
///
/// Implementations may block (e.g. `window.alert`); the session is reset
/// only after `notify` returns.
pub trait Notifier {
    fn notify(&mut self, outcome: Outcome);
}

/// Notifier that only logs
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, outcome: Outcome) {
        log::info!("{}", outcome.message());
    }
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Session still running
    Continue,
    /// Session ended with this outcome and has been reset
    Ended(Outcome),
}

/// How the previous session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub score: u32,
    pub frames: u64,
}

/// A running game: state plus the input it is driven by
#[derive(Debug)]
pub struct Session {
    pub state: GameState,
    pub input: InputTracker,
    frames: u64,
    last_summary: Option<SessionSummary>,
}

impl Session {
    /// Session at the reference playfield size
    pub fn new(settings: Settings) -> Self {
        let layout = Layout::reference(settings.columns);
        Self::with_layout(settings, layout)
    }

    /// Session sized for a `width` x `height` display area
    pub fn with_surface_size(settings: Settings, width: f32, height: f32) -> Self {
        let layout = Layout::fit(width, height, settings.columns);
        Self::with_layout(settings, layout)
    }

    pub fn with_layout(settings: Settings, layout: Layout) -> Self {
        let input = InputTracker::new(settings.input_mode);
        Self {
            state: GameState::with_layout(settings, layout),
            input,
            frames: 0,
            last_summary: None,
        }
    }

    /// Frames run in the current session
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Summary of the most recently finished session
    pub fn last_summary(&self) -> Option<&SessionSummary> {
        self.last_summary.as_ref()
    }

    /// Run one physics step and one render step
    pub fn frame(&mut self, surface: &mut impl Surface, notifier: &mut impl Notifier) -> FrameStatus {
        let input = self.input.sample();
        tick(&mut self.state, &input);
        render(&self.state, surface);
        self.frames += 1;

        match self.state.phase.outcome() {
            None => FrameStatus::Continue,
            Some(outcome) => {
                log::info!(
                    "Session {} ended ({:?}) after {} frames, score {}",
                    self.state.session,
                    outcome,
                    self.frames,
                    self.state.score
                );
                self.last_summary = Some(SessionSummary {
                    outcome,
                    score: self.state.score,
                    frames: self.frames,
                });
                notifier.notify(outcome);
                self.reset();
                FrameStatus::Ended(outcome)
            }
        }
    }

    /// Throw away the current session and start a new one
    pub fn reset(&mut self) {
        self.state.reset();
        self.input.release_all();
        self.frames = 0;
    }

    /// Display area changed; keep the fixed aspect ratio
    pub fn resize(&mut self, width: f32, height: f32) {
        let layout = Layout::fit(width, height, self.state.settings.columns);
        self.state.resize(layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::renderer::DisplayList;
    use crate::sim::{Ball, GamePhase};
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<Outcome>);

    impl Notifier for Recorder {
        fn notify(&mut self, outcome: Outcome) {
            self.0.push(outcome);
        }
    }

    fn session() -> Session {
        Session::new(Settings {
            seed: Some(42),
            special_chance: 0.0,
            ..Settings::default()
        })
    }

    #[test]
    fn test_frame_ticks_and_draws() {
        let mut session = session();
        let mut list = DisplayList::new();
        let mut notifier = Recorder::default();

        assert_eq!(session.frame(&mut list, &mut notifier), FrameStatus::Continue);
        assert_eq!(session.frames(), 1);
        assert_eq!(session.state.balls[0].pos, Vec2::new(242.0, 288.0));
        assert_eq!(list.circles().count(), 1);
        assert!(notifier.0.is_empty());
    }

    #[test]
    fn test_held_key_moves_paddle_each_frame() {
        let mut session = session();
        let start = session.state.paddle.x;
        session.input.key_down(Key::Left);
        let mut list = DisplayList::new();
        session.frame(&mut list, &mut LogNotifier);
        session.frame(&mut list, &mut LogNotifier);
        assert_eq!(session.state.paddle.x, start - 14.0);
    }

    #[test]
    fn test_loss_notifies_once_then_resets() {
        let mut session = session();
        session.state.lives = 1;
        session.state.paddle.x = 0.0;
        session.state.balls = vec![Ball::new(Vec2::new(400.0, 309.0), Vec2::new(0.0, 2.0), 10.0)];
        session.input.key_down(Key::Right);

        let mut list = DisplayList::new();
        let mut notifier = Recorder::default();
        let status = session.frame(&mut list, &mut notifier);

        assert_eq!(status, FrameStatus::Ended(Outcome::Lost));
        assert_eq!(notifier.0, vec![Outcome::Lost]);
        // Fresh session
        assert_eq!(session.state.phase, GamePhase::Playing);
        assert_eq!(session.state.lives, 3);
        assert_eq!(session.state.balls.len(), 1);
        assert_eq!(session.state.session, 2);
        assert_eq!(session.frames(), 0);
        assert!(!session.input.sample().right);

        assert_eq!(session.frame(&mut list, &mut notifier), FrameStatus::Continue);
        assert_eq!(notifier.0.len(), 1);
    }

    #[test]
    fn test_win_notifies() {
        let mut session = session();
        let total = session.state.bricks.total();
        for brick in session.state.bricks.bricks.iter_mut().skip(1) {
            brick.alive = false;
        }
        session.state.score = total - 1;
        let first = session.state.bricks.bricks[0].clone();
        session.state.balls = vec![Ball::new(Vec2::new(first.x + 1.0, first.y + 1.0), Vec2::ZERO, 10.0)];

        let mut notifier = Recorder::default();
        let status = session.frame(&mut DisplayList::new(), &mut notifier);
        assert_eq!(status, FrameStatus::Ended(Outcome::Won));
        assert_eq!(notifier.0, vec![Outcome::Won]);
        assert_eq!(session.state.score, 0);
        assert_eq!(
            session.last_summary(),
            Some(&SessionSummary {
                outcome: Outcome::Won,
                score: total,
                frames: 1,
            })
        );
    }

    #[test]
    fn test_resize_keeps_aspect() {
        let mut session = session();
        session.resize(1000.0, 320.0);
        assert_eq!(session.state.layout.width, 480.0);
        session.resize(960.0, 2000.0);
        assert_eq!(session.state.layout.height, 640.0);
        assert_eq!(session.state.paddle.width, 150.0);
    }

    #[test]
    fn test_sized_session() {
        let session = Session::with_surface_size(Settings::default(), 720.0, 480.0);
        assert_eq!(session.state.layout.scale, 1.5);
        assert_eq!(session.state.balls[0].radius, 15.0);
    }

    #[test]
    fn test_constructors_share_setup() {
        let settings = Settings {
            seed: Some(3),
            input_mode: crate::input::InputMode::TouchDrag,
            ..Settings::default()
        };
        let reference = Session::new(settings.clone());
        let sized = Session::with_surface_size(settings, 480.0, 320.0);
        assert_eq!(reference.state.layout, sized.state.layout);
        assert_eq!(reference.state.bricks.bricks, sized.state.bricks.bricks);
        assert_eq!(reference.frames(), 0);
        assert!(sized.last_summary().is_none());

        // Touch-drag mode reaches the input tracker
        let mut sized = sized;
        sized.input.touch_start(100.0, 480.0);
        sized.input.touch_move(120.0);
        assert_eq!(sized.input.sample().drag_dx, 20.0);
    }
}
