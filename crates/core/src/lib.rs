//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board/piece state machine of a falling-pair puzzle
//! game. It has **zero dependencies** on rendering, input devices or I/O:
//!
//! - **Deterministic**: same seed and same inputs produce the same game
//! - **Testable**: every rule is reachable through plain function calls
//! - **Portable**: any host that can supply held keys and a clock can drive it
//! - **Allocation-free ticks**: events are buffered in a fixed-size `ArrayVec`
//!
//! # Module Structure
//!
//! - [`board`]: 6x12 grid plus per-column landing rows
//! - [`piece`]: the falling pair and its orientation geometry
//! - [`movement`]: shift legality and rotation kick resolution
//! - [`fall`]: speed selection, motion integration and landing detection
//! - [`game_state`]: the session and its Control / Falling / GameOver phases
//! - [`rng`]: seeded color generation
//! - [`snapshot`]: copyable, render-ready view of a session
//!
//! # Example
//!
//! ```
//! use puyo_drop_core::GameState;
//! use puyo_drop_types::{GameAction, Phase, TickInput};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! assert!(game.apply_action(GameAction::MoveLeft, 0));
//! assert!(game.apply_action(GameAction::RotateCw, 0));
//!
//! let held = TickInput { soft_drop: true, ..TickInput::IDLE };
//! let mut now = 0;
//! while game.phase() == Phase::Control {
//!     now += 16;
//!     game.tick(now, 16, held).unwrap();
//! }
//! assert_eq!(game.cells_locked(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod fall;
pub mod game_state;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use puyo_drop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::BoardError;
pub use fall::FallSpeed;
pub use game_state::{GameState, EVENT_CAPACITY};
pub use movement::{can_shift, resolve_rotation};
pub use piece::{secondary_column_for, FallingCell, Piece};
pub use rng::{ColorSource, SimpleRng};
pub use snapshot::{CellSnapshot, GameSnapshot};
