//! Board module - the settled grid and per-column stack heights
//!
//! The board is a 6x12 grid where each cell is empty or holds a locked color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (column, row) where column ranges 0..5 (left to right) and row
//! ranges 0..11 (top to bottom).
//!
//! Alongside the grid, `heights[c]` holds the next free landing row of column
//! `c`: 11 for an empty column, one less per locked cell, -1 once the column is
//! full. Every query in the hot path reads `heights`; the grid is only written.

use crate::error::BoardError;
use crate::types::{Cell, PuyoColor, BOARD_COLUMNS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_COLUMNS as usize) * (BOARD_ROWS as usize);

/// Landing row of an empty column
const FLOOR_ROW: i8 = BOARD_ROWS as i8 - 1;

/// The game board - 6 columns x 12 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Cell; BOARD_SIZE],
    /// Next free landing row per column
    heights: [i8; BOARD_COLUMNS as usize],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            heights: [FLOOR_ROW; BOARD_COLUMNS as usize],
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(column: i8, row: i8) -> Option<usize> {
        if column < 0 || column >= BOARD_COLUMNS as i8 || row < 0 || row >= BOARD_ROWS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLUMNS as usize) + (column as usize))
    }

    #[inline(always)]
    fn column_index(column: i8) -> Result<usize, BoardError> {
        if column < 0 || column >= BOARD_COLUMNS as i8 {
            return Err(BoardError::OutOfRange { column });
        }
        Ok(column as usize)
    }

    pub fn columns(&self) -> u8 {
        BOARD_COLUMNS
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at (column, row), `None` if out of bounds
    pub fn get(&self, column: i8, row: i8) -> Option<Cell> {
        Self::index(column, row).map(|idx| self.cells[idx])
    }

    /// Check if (column, row) is inside the board and holds a locked cell
    pub fn is_occupied(&self, column: i8, row: i8) -> bool {
        matches!(self.get(column, row), Some(Some(_)))
    }

    /// Next free landing row of `column`
    #[inline]
    pub fn height_of(&self, column: i8) -> Result<i8, BoardError> {
        Self::column_index(column).map(|c| self.heights[c])
    }

    /// True once the stack in `column` has reached above the top row
    pub fn is_column_full(&self, column: i8) -> Result<bool, BoardError> {
        self.height_of(column).map(|h| h < 0)
    }

    /// Lock a cell of `color` at (column, row).
    ///
    /// `row` must be the column's current landing row. The board is left
    /// untouched on error.
    pub fn lock(&mut self, column: i8, row: i8, color: PuyoColor) -> Result<(), BoardError> {
        let c = Self::column_index(column)?;
        let expected = self.heights[c];
        if expected < 0 {
            return Err(BoardError::ColumnFull { column: c as u8 });
        }
        if row != expected {
            return Err(BoardError::InvariantViolation {
                column: c as u8,
                expected,
                actual: row,
            });
        }

        // row == expected is within 0..ROWS here
        let idx = (row as usize) * (BOARD_COLUMNS as usize) + c;
        self.cells[idx] = Some(color);
        self.heights[c] -= 1;
        Ok(())
    }

    /// Per-column landing rows
    pub fn heights(&self) -> &[i8; BOARD_COLUMNS as usize] {
        &self.heights
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of locked cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Recompute a column's landing row by scanning the grid.
    ///
    /// Slow path for consistency checks; must always equal `height_of`.
    pub fn scan_height(&self, column: i8) -> Result<i8, BoardError> {
        Self::column_index(column)?;
        let mut row = FLOOR_ROW;
        while row >= 0 && self.is_occupied(column, row) {
            row -= 1;
        }
        Ok(row)
    }

    /// Write the grid as color indices (0 = empty, 1..=5 = color index + 1)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize]) {
        let width = BOARD_COLUMNS as usize;
        for (row, line) in out.iter_mut().enumerate() {
            for (column, value) in line.iter_mut().enumerate() {
                *value = match self.cells[row * width + column] {
                    Some(color) => color.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Build a board by locking one column at a time, bottom up.
    ///
    /// Each string lists a column's colors from the floor upward using the
    /// single-letter names accepted by `PuyoColor::from_str`.
    #[cfg(test)]
    pub fn from_columns(columns: &[&str]) -> Self {
        let mut board = Self::new();
        for (c, stack) in columns.iter().enumerate() {
            for ch in stack.chars() {
                let color = PuyoColor::from_str(&ch.to_string()).unwrap();
                let row = board.height_of(c as i8).unwrap();
                board.lock(c as i8, row, color).unwrap();
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(5, 0), Some(5));
        assert_eq!(Board::index(0, 1), Some(6));
        assert_eq!(Board::index(5, 11), Some(71));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(6, 0), None);
        assert_eq!(Board::index(0, 12), None);
    }

    #[test]
    fn test_lock_writes_flat_array_and_height() {
        let mut board = Board::new();
        board.lock(2, 11, PuyoColor::Red).unwrap();

        assert_eq!(board.cells[11 * 6 + 2], Some(PuyoColor::Red));
        assert_eq!(board.heights[2], 10);
        assert_eq!(board.scan_height(2), Ok(10));
    }

    #[test]
    fn test_lock_error_leaves_board_untouched() {
        let mut board = Board::from_columns(&["rg"]);
        let before = board.clone();

        assert_eq!(
            board.lock(0, 11, PuyoColor::Blue),
            Err(BoardError::InvariantViolation {
                column: 0,
                expected: 9,
                actual: 11
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_columns_stacks_bottom_up() {
        let board = Board::from_columns(&["", "rb"]);
        assert_eq!(board.get(1, 11), Some(Some(PuyoColor::Red)));
        assert_eq!(board.get(1, 10), Some(Some(PuyoColor::Blue)));
        assert_eq!(board.height_of(0), Ok(11));
        assert_eq!(board.height_of(1), Ok(9));
    }

    #[test]
    fn test_write_u8_grid() {
        let board = Board::from_columns(&["p"]);
        let mut grid = [[0u8; 6]; 12];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[11][0], PuyoColor::Purple.index() + 1);
        assert_eq!(grid[11][1], 0);
    }
}
