//! Piece module - the falling pair and its orientation geometry
//!
//! A piece is a primary cell plus an optional secondary cell. While both are
//! airborne the secondary's position is derived from the orientation; once one
//! of them locks it is moved out of the piece and the other keeps falling on
//! its own.

use crate::board::Board;
use crate::movement;
use crate::types::{Direction, Orientation, PairCell, PuyoColor, Spin};

/// One falling cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingCell {
    pub color: PuyoColor,
    pub column: i8,
    /// Top edge in position units; row `r` starts at `r * cell_size`
    pub y: f32,
    /// Current vertical speed in units per second
    pub velocity: f32,
}

impl FallingCell {
    pub fn new(color: PuyoColor, column: i8, y: f32) -> Self {
        Self {
            color,
            column,
            y,
            velocity: 0.0,
        }
    }
}

/// Column of the secondary cell for a given orientation
pub fn secondary_column_for(orientation: Orientation, primary_column: i8) -> i8 {
    primary_column + orientation.column_offset()
}

/// The active falling pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    primary: Option<FallingCell>,
    secondary: Option<FallingCell>,
    orientation: Orientation,
    /// The cell still airborne once the pair has split
    active: PairCell,
}

impl Piece {
    /// Create a new pair at `spawn_column`, orientation Top.
    ///
    /// The secondary starts one cell above the primary so the pair enters the
    /// board together.
    pub fn spawn(primary: PuyoColor, secondary: PuyoColor, spawn_column: i8, cell_size: f32) -> Self {
        Self {
            primary: Some(FallingCell::new(primary, spawn_column, 0.0)),
            secondary: Some(FallingCell::new(secondary, spawn_column, -cell_size)),
            orientation: Orientation::Top,
            active: PairCell::Primary,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn primary(&self) -> Option<&FallingCell> {
        self.primary.as_ref()
    }

    pub fn secondary(&self) -> Option<&FallingCell> {
        self.secondary.as_ref()
    }

    pub fn cell(&self, which: PairCell) -> Option<&FallingCell> {
        match which {
            PairCell::Primary => self.primary.as_ref(),
            PairCell::Secondary => self.secondary.as_ref(),
        }
    }

    pub fn cell_mut(&mut self, which: PairCell) -> Option<&mut FallingCell> {
        match which {
            PairCell::Primary => self.primary.as_mut(),
            PairCell::Secondary => self.secondary.as_mut(),
        }
    }

    /// Move a cell out of the piece (it is about to lock into the board)
    pub fn take(&mut self, which: PairCell) -> Option<FallingCell> {
        let taken = match which {
            PairCell::Primary => self.primary.take(),
            PairCell::Secondary => self.secondary.take(),
        };
        if taken.is_some() {
            self.active = which.other();
        }
        taken
    }

    /// The cell the fall controller follows once the pair has split
    pub fn active(&self) -> PairCell {
        self.active
    }

    /// Both halves are still airborne
    pub fn is_paired(&self) -> bool {
        self.primary.is_some() && self.secondary.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Airborne cells with their labels, primary first
    pub fn cells(&self) -> impl Iterator<Item = (PairCell, &FallingCell)> {
        self.primary
            .as_ref()
            .map(|c| (PairCell::Primary, c))
            .into_iter()
            .chain(self.secondary.as_ref().map(|c| (PairCell::Secondary, c)))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut FallingCell> {
        self.primary.iter_mut().chain(self.secondary.iter_mut())
    }

    /// Leftmost and rightmost airborne column
    pub fn column_span(&self) -> Option<(i8, i8)> {
        self.cells().fold(None, |span, (_, cell)| match span {
            None => Some((cell.column, cell.column)),
            Some((lo, hi)) => Some((lo.min(cell.column), hi.max(cell.column))),
        })
    }

    /// Shift every airborne cell one column. Legality is checked by the caller.
    pub fn shift(&mut self, direction: Direction) {
        let delta = direction.delta();
        for cell in self.cells_mut() {
            cell.column += delta;
        }
    }

    /// Set every airborne cell's speed
    pub fn set_velocity(&mut self, velocity: f32) {
        for cell in self.cells_mut() {
            cell.velocity = velocity;
        }
    }

    /// Rotate the pair one step, kicking half a turn when the swing is blocked.
    ///
    /// Returns the resulting orientation. Only a paired piece rotates; a lone
    /// cell keeps its orientation.
    pub fn rotate(&mut self, spin: Spin, board: &Board, cell_size: f32) -> Orientation {
        if !self.is_paired() {
            return self.orientation;
        }
        let target = movement::resolve_rotation(self, board, spin, cell_size);
        self.set_orientation(target, cell_size);
        target
    }

    /// Place the secondary according to `orientation`, relative to the primary
    pub(crate) fn set_orientation(&mut self, orientation: Orientation, cell_size: f32) {
        self.orientation = orientation;
        if let (Some(primary), Some(secondary)) = (self.primary.as_ref(), self.secondary.as_mut()) {
            secondary.column = secondary_column_for(orientation, primary.column);
            secondary.y = primary.y + f32::from(orientation.row_offset()) * cell_size;
        }
    }
}
