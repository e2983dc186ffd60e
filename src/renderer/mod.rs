//! Rendering module
//!
//! The game draws through the `Surface` trait: a canvas in the browser, a
//! recorded `DisplayList` in tests and the headless runner.

pub mod display_list;
pub mod scene;
pub mod surface;

pub use display_list::{DisplayList, DrawCommand};
pub use scene::render;
pub use surface::{Color, Surface, colors};
