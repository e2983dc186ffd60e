//! Keyboard and touch input tracking
//!
//! Event handlers only ever write the pressed flags or the drag delta here;
//! the frame driver samples them once per frame into a `TickInput`.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// How touches drive the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Touching a half of the surface holds that direction
    #[default]
    Keys,
    /// Horizontal drag distance is added straight to the paddle position
    TouchDrag,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Keys => "keys",
            InputMode::TouchDrag => "touch_drag",
        }
    }
}

/// Directional keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM key name; anything that isn't a horizontal arrow is ignored
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Current pressed/drag state
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    mode: InputMode,
    left: bool,
    right: bool,
    /// Last touch x while a drag is in progress
    anchor: Option<f32>,
    /// Drag distance not yet consumed by a frame
    pending_dx: f32,
}

impl InputTracker {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
        }
    }

    /// Touch began at `x` on a surface `surface_width` wide
    pub fn touch_start(&mut self, x: f32, surface_width: f32) {
        match self.mode {
            InputMode::Keys => {
                if x < surface_width / 2.0 {
                    self.left = true;
                } else {
                    self.right = true;
                }
            }
            InputMode::TouchDrag => self.anchor = Some(x),
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.mode != InputMode::TouchDrag {
            return;
        }
        if let Some(anchor) = self.anchor {
            self.pending_dx += x - anchor;
        }
        self.anchor = Some(x);
    }

    pub fn touch_end(&mut self) {
        match self.mode {
            InputMode::Keys => {
                self.left = false;
                self.right = false;
            }
            InputMode::TouchDrag => self.anchor = None,
        }
    }

    /// Forget every held direction and pending drag
    pub fn release_all(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Snapshot for one frame; consumes the pending drag distance
    pub fn sample(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            drag_dx: std::mem::take(&mut self.pending_dx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Right"), Some(Key::Right));
        assert_eq!(Key::from_name("ArrowUp"), None);
        assert_eq!(Key::from_name(" "), None);
    }

    #[test]
    fn test_keys_press_and_release() {
        let mut input = InputTracker::new(InputMode::Keys);
        input.key_down(Key::Right);
        assert_eq!(input.sample(), TickInput { left: false, right: true, drag_dx: 0.0 });
        // Held keys persist across frames
        assert!(input.sample().right);
        input.key_up(Key::Right);
        assert_eq!(input.sample(), TickInput::default());
    }

    #[test]
    fn test_touch_halves_in_key_mode() {
        let mut input = InputTracker::new(InputMode::Keys);
        input.touch_start(100.0, 480.0);
        assert!(input.sample().left);
        input.touch_end();
        input.touch_start(300.0, 480.0);
        let sample = input.sample();
        assert!(sample.right && !sample.left);
        input.touch_end();
        assert_eq!(input.sample(), TickInput::default());
    }

    #[test]
    fn test_drag_accumulates_and_is_consumed() {
        let mut input = InputTracker::new(InputMode::TouchDrag);
        input.touch_start(100.0, 480.0);
        input.touch_move(110.0);
        input.touch_move(125.0);
        assert_eq!(input.sample().drag_dx, 25.0);
        assert_eq!(input.sample().drag_dx, 0.0);

        input.touch_move(120.0);
        assert_eq!(input.sample().drag_dx, -5.0);
        input.touch_end();
        input.touch_move(200.0);
        // A move without an anchor only re-anchors
        assert_eq!(input.sample().drag_dx, 0.0);
    }

    #[test]
    fn test_drag_mode_ignores_halves() {
        let mut input = InputTracker::new(InputMode::TouchDrag);
        input.touch_start(10.0, 480.0);
        let sample = input.sample();
        assert!(!sample.left && !sample.right);
    }

    #[test]
    fn test_key_mode_ignores_drag() {
        let mut input = InputTracker::new(InputMode::Keys);
        input.touch_start(300.0, 480.0);
        input.touch_move(400.0);
        assert_eq!(input.sample().drag_dx, 0.0);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputTracker::new(InputMode::TouchDrag);
        input.key_down(Key::Left);
        input.touch_start(0.0, 480.0);
        input.touch_move(50.0);
        input.release_all();
        assert_eq!(input.sample(), TickInput::default());
        // Mode survives the release
        input.touch_start(100.0, 480.0);
        input.touch_move(130.0);
        assert_eq!(input.sample().drag_dx, 30.0);
    }
}
