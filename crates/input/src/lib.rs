//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the five held controls and turns the
//! press stream into per-tick [`crate::types::TickInput`] level state, including
//! on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use puyo_drop_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, map_key, should_quit, Control};
