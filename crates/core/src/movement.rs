//! Movement validation - is a shift or a rotation swing legal right now?
//!
//! A cell at vertical position `y` may enter column `c` only while the stack
//! in `c` is still below it, i.e. `height_of(c) * cell_size >= y`.

use crate::board::Board;
use crate::piece::{secondary_column_for, Piece};
use crate::types::{Direction, Orientation, Spin};

/// Can a cell whose top edge is at `y` stand in `column`?
fn column_admits(board: &Board, column: i8, y: f32, cell_size: f32) -> bool {
    match board.height_of(column) {
        Ok(height) => f32::from(height) * cell_size >= y,
        Err(_) => false,
    }
}

/// Check whether every airborne cell of `piece` can move one column in `direction`.
///
/// Never mutates.
pub fn can_shift(piece: &Piece, board: &Board, direction: Direction, cell_size: f32) -> bool {
    let delta = direction.delta();

    let Some((lo, hi)) = piece.column_span() else {
        return false;
    };
    if lo + delta < 0 || hi + delta >= board.columns() as i8 {
        return false;
    }

    piece
        .cells()
        .all(|(_, cell)| column_admits(board, cell.column + delta, cell.y, cell_size))
}

/// Decide where a rotation of `piece` ends up.
///
/// From Right or Left the swing is always free. From Top or Bottom the
/// destination column must admit the primary; if it does not, the pair kicks
/// half a turn to the opposite orientation, which keeps both cells in the
/// primary's column.
pub fn resolve_rotation(piece: &Piece, board: &Board, spin: Spin, cell_size: f32) -> Orientation {
    let current = piece.orientation();
    let target = current.rotate(spin);

    if !current.is_vertical() {
        return target;
    }

    let Some(primary) = piece.primary() else {
        return current;
    };
    let dest = secondary_column_for(target, primary.column);
    if column_admits(board, dest, primary.y, cell_size) {
        target
    } else {
        current.opposite()
    }
}
