//! Platform abstraction layer
//!
//! Browser bindings for the drawing surface and the game-over notification.
//! Event wiring and the animation-frame loop live in the binary.

#[cfg(target_arch = "wasm32")]
pub mod web;
