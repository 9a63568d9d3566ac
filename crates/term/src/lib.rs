//! Terminal rendering for the pair-drop board.
//!
//! Renders a [`core::GameSnapshot`] into a character framebuffer, then flushes
//! only the changed runs to the terminal. No widget toolkit involved.
//!
//! Board cells are drawn two columns wide to compensate for the usual terminal
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use puyo_drop_core as core;
pub use puyo_drop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
