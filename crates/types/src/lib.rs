//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the core state machine, the terminal view and the host loop alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 6 (indexed 0-5, left to right)
//! - **Rows**: 12 (indexed 0-11, top to bottom)
//! - **Spawn column**: 2 (also the column watched for game over)
//!
//! # Units and Timing
//!
//! Vertical positions are continuous "units"; one cell is `CELL_SIZE` units tall.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the terminal host (~60 FPS) |
//! | `FALL_SPEED` | 80 | Normal gravity, units per second |
//! | `SOFT_DROP_SPEED` | 500 | Soft drop and settling speed, units per second |
//! | `SHIFT_DEBOUNCE_MS` | 100 | Minimum gap between accepted shifts |
//! | `ROTATE_DEBOUNCE_MS` | 400 | Minimum gap between accepted rotations |
//!
//! # Examples
//!
//! ```
//! use puyo_drop_types::{Orientation, PuyoColor, Spin, BOARD_COLUMNS, BOARD_ROWS};
//!
//! let color = PuyoColor::from_str("blue").unwrap();
//! assert_eq!(color, PuyoColor::Blue);
//!
//! let o = Orientation::Top.rotate(Spin::Clockwise);
//! assert_eq!(o, Orientation::Right);
//! assert_eq!(o.opposite(), Orientation::Left);
//!
//! assert_eq!(BOARD_COLUMNS, 6);
//! assert_eq!(BOARD_ROWS, 12);
//! ```

/// Board width in cells (6 columns)
pub const BOARD_COLUMNS: u8 = 6;

/// Board height in cells (12 rows)
pub const BOARD_ROWS: u8 = 12;

/// Size of one square cell in position units
pub const CELL_SIZE: f32 = 30.0;

/// Column where every new pair appears (third column)
pub const SPAWN_COLUMN: u8 = 2;

/// Column whose stack height decides game over
pub const GAME_OVER_COLUMN: u8 = SPAWN_COLUMN;

/// Normal gravity in units per second
pub const FALL_SPEED: f32 = 80.0;

/// Soft drop speed in units per second (also used by a settling cell)
pub const SOFT_DROP_SPEED: f32 = 500.0;

/// Minimum interval between two accepted horizontal shifts
pub const SHIFT_DEBOUNCE_MS: u32 = 100;

/// Minimum interval between two accepted rotations while the key is held
pub const ROTATE_DEBOUNCE_MS: u32 = 400;

/// Number of distinct cell colors
pub const COLOR_COUNT: u8 = 5;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a pressed key counts as held when the terminal sends no release event.
///
/// Kept below `SHIFT_DEBOUNCE_MS` so a single tap shifts exactly once.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 90;

/// The five cell colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuyoColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl PuyoColor {
    /// All colors in index order
    pub const ALL: [PuyoColor; COLOR_COUNT as usize] = [
        PuyoColor::Red,
        PuyoColor::Green,
        PuyoColor::Blue,
        PuyoColor::Yellow,
        PuyoColor::Purple,
    ];

    /// Color for a zero-based index, `None` past `COLOR_COUNT`
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Zero-based index of this color
    pub fn index(&self) -> u8 {
        match self {
            PuyoColor::Red => 0,
            PuyoColor::Green => 1,
            PuyoColor::Blue => 2,
            PuyoColor::Yellow => 3,
            PuyoColor::Purple => 4,
        }
    }

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_drop_types::PuyoColor;
    ///
    /// assert_eq!(PuyoColor::from_str("RED"), Some(PuyoColor::Red));
    /// assert_eq!(PuyoColor::from_str("p"), Some(PuyoColor::Purple));
    /// assert_eq!(PuyoColor::from_str("orange"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(PuyoColor::Red),
            "green" | "g" => Some(PuyoColor::Green),
            "blue" | "b" => Some(PuyoColor::Blue),
            "yellow" | "y" => Some(PuyoColor::Yellow),
            "purple" | "p" => Some(PuyoColor::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PuyoColor::Red => "red",
            PuyoColor::Green => "green",
            PuyoColor::Blue => "blue",
            PuyoColor::Yellow => "yellow",
            PuyoColor::Purple => "purple",
        }
    }
}

/// Rotation sense of a pair rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    Anticlockwise,
}

/// Position of the secondary cell relative to the primary cell
///
/// - **Top**: directly above (spawn orientation)
/// - **Right**: one column to the right
/// - **Bottom**: directly below
/// - **Left**: one column to the left
///
/// The clockwise cycle goes: Top → Right → Bottom → Left → Top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Top,
    Right,
    Bottom,
    Left,
}

impl Orientation {
    /// Next orientation clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_drop_types::Orientation;
    ///
    /// assert_eq!(Orientation::Top.clockwise(), Orientation::Right);
    /// assert_eq!(Orientation::Left.clockwise(), Orientation::Top);
    /// ```
    pub fn clockwise(&self) -> Self {
        match self {
            Orientation::Top => Orientation::Right,
            Orientation::Right => Orientation::Bottom,
            Orientation::Bottom => Orientation::Left,
            Orientation::Left => Orientation::Top,
        }
    }

    /// Next orientation anticlockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_drop_types::Orientation;
    ///
    /// assert_eq!(Orientation::Top.anticlockwise(), Orientation::Left);
    /// assert_eq!(Orientation::Right.anticlockwise(), Orientation::Top);
    /// ```
    pub fn anticlockwise(&self) -> Self {
        match self {
            Orientation::Top => Orientation::Left,
            Orientation::Left => Orientation::Bottom,
            Orientation::Bottom => Orientation::Right,
            Orientation::Right => Orientation::Top,
        }
    }

    /// Rotate one step in the given sense
    pub fn rotate(&self, spin: Spin) -> Self {
        match spin {
            Spin::Clockwise => self.clockwise(),
            Spin::Anticlockwise => self.anticlockwise(),
        }
    }

    /// The orientation half a turn away
    pub fn opposite(&self) -> Self {
        match self {
            Orientation::Top => Orientation::Bottom,
            Orientation::Bottom => Orientation::Top,
            Orientation::Right => Orientation::Left,
            Orientation::Left => Orientation::Right,
        }
    }

    /// True for Top and Bottom, where both cells share a column
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Top | Orientation::Bottom)
    }

    /// Column offset of the secondary cell from the primary
    pub fn column_offset(&self) -> i8 {
        match self {
            Orientation::Top | Orientation::Bottom => 0,
            Orientation::Right => 1,
            Orientation::Left => -1,
        }
    }

    /// Vertical offset of the secondary cell, in cells (negative is up)
    pub fn row_offset(&self) -> i8 {
        match self {
            Orientation::Top => -1,
            Orientation::Bottom => 1,
            Orientation::Right | Orientation::Left => 0,
        }
    }

    /// Clockwise index, Top = 0
    pub fn index(&self) -> u8 {
        match self {
            Orientation::Top => 0,
            Orientation::Right => 1,
            Orientation::Bottom => 2,
            Orientation::Left => 3,
        }
    }

    /// Parse orientation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "top" | "t", "right" | "r", "bottom" | "b", "left" | "l"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" | "t" => Some(Orientation::Top),
            "right" | "r" => Some(Orientation::Right),
            "bottom" | "b" => Some(Orientation::Bottom),
            "left" | "l" => Some(Orientation::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Right => "right",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
        }
    }
}

/// Horizontal shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta: -1 for left, +1 for right
    pub fn delta(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Which half of a pair a cell is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairCell {
    Primary,
    Secondary,
}

impl PairCell {
    /// The other half of the pair
    pub fn other(&self) -> Self {
        match self {
            PairCell::Primary => PairCell::Secondary,
            PairCell::Secondary => PairCell::Primary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PairCell::Primary => "primary",
            PairCell::Secondary => "secondary",
        }
    }
}

/// Game phase
///
/// - **Control**: the pair falls together and can be shifted and rotated
/// - **Falling**: one cell has locked, the other settles alone at speed
/// - **GameOver**: terminal, the board is frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Control,
    Falling,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Control => "control",
            Phase::Falling => "falling",
            Phase::GameOver => "game_over",
        }
    }
}

/// One-shot game actions, used by tests, benches and scripted hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the pair one column left
    MoveLeft,
    /// Shift the pair one column right
    MoveRight,
    /// Rotate the pair clockwise
    RotateCw,
    /// Rotate the pair anticlockwise
    RotateCcw,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_drop_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}

/// Level state of the controls for one tick
///
/// Every field is "held this tick"; debouncing happens in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub soft_drop: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
}

impl TickInput {
    /// No key held
    pub const IDLE: TickInput = TickInput {
        left: false,
        right: false,
        soft_drop: false,
        rotate_cw: false,
        rotate_ccw: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Core-side events emitted by the session for the host.
///
/// Drained with `GameState::take_events` after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A cell settled into the board
    Locked {
        cell: PairCell,
        column: u8,
        row: u8,
        color: PuyoColor,
    },
    /// A new pair entered at `column`
    Spawned {
        primary: PuyoColor,
        secondary: PuyoColor,
        column: u8,
    },
    /// The watched column overflowed; nothing moves after this
    GameOver,
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(PuyoColor)`: locked cell of that color
pub type Cell = Option<PuyoColor>;
