//! Fall controller - speed selection, motion and landing for single cells.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::piece::FallingCell;

/// Vertical speed mode for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallSpeed {
    /// Normal gravity
    Normal,
    /// Player is holding soft drop
    SoftDrop,
    /// A lone cell settling after its partner locked; ignores input
    Forced,
}

impl FallSpeed {
    /// Speed mode of a player-controlled pair
    pub fn for_input(soft_drop: bool) -> Self {
        if soft_drop {
            FallSpeed::SoftDrop
        } else {
            FallSpeed::Normal
        }
    }

    /// Units per second for this mode
    pub fn velocity(&self, config: &GameConfig) -> f32 {
        match self {
            FallSpeed::Normal => config.fall_speed,
            FallSpeed::SoftDrop | FallSpeed::Forced => config.soft_drop_speed,
        }
    }
}

/// Integrate the cell's own velocity over `elapsed_ms`
#[inline]
pub fn advance(cell: &mut FallingCell, elapsed_ms: u32) {
    cell.y += cell.velocity * (elapsed_ms as f32) / 1000.0;
}

/// Landing coordinate of `column`: the top edge of its next free row
pub fn landing_threshold(board: &Board, column: i8, cell_size: f32) -> Result<f32, BoardError> {
    board.height_of(column).map(|h| f32::from(h) * cell_size)
}

/// Detect a landing.
///
/// When the cell has reached its column's threshold it is clamped onto it,
/// stopped, and the landing row is returned. The board is not touched; the
/// caller decides whether the lock can happen.
pub fn settle(cell: &mut FallingCell, board: &Board, cell_size: f32) -> Result<Option<i8>, BoardError> {
    let threshold = landing_threshold(board, cell.column, cell_size)?;
    if cell.y < threshold {
        return Ok(None);
    }
    cell.y = threshold;
    cell.velocity = 0.0;
    board.height_of(cell.column).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PuyoColor;

    #[test]
    fn test_speed_modes() {
        let config = GameConfig::default();
        assert_eq!(FallSpeed::for_input(false), FallSpeed::Normal);
        assert_eq!(FallSpeed::for_input(true), FallSpeed::SoftDrop);
        assert_eq!(FallSpeed::Normal.velocity(&config), 80.0);
        assert_eq!(FallSpeed::SoftDrop.velocity(&config), 500.0);
        assert_eq!(FallSpeed::Forced.velocity(&config), 500.0);
    }

    #[test]
    fn test_advance_scales_by_elapsed_time() {
        let mut cell = FallingCell::new(PuyoColor::Red, 0, 0.0);
        cell.velocity = 80.0;
        advance(&mut cell, 500);
        assert_eq!(cell.y, 40.0);
    }

    #[test]
    fn test_settle_clamps_and_stops() {
        let board = Board::new();
        let mut cell = FallingCell::new(PuyoColor::Red, 1, 329.0);
        cell.velocity = 80.0;
        assert_eq!(settle(&mut cell, &board, 30.0), Ok(None));
        assert_eq!(cell.velocity, 80.0);

        cell.y = 334.0;
        assert_eq!(settle(&mut cell, &board, 30.0), Ok(Some(11)));
        assert_eq!(cell.y, 330.0);
        assert_eq!(cell.velocity, 0.0);
    }

    #[test]
    fn test_landing_threshold_follows_stack() {
        let mut board = Board::new();
        assert_eq!(landing_threshold(&board, 4, 30.0), Ok(330.0));

        board.lock(4, 11, PuyoColor::Blue).unwrap();
        assert_eq!(landing_threshold(&board, 4, 30.0), Ok(300.0));

        // settle lands on the raised threshold
        let mut cell = FallingCell::new(PuyoColor::Red, 4, 305.0);
        assert_eq!(settle(&mut cell, &board, 30.0), Ok(Some(10)));
        assert_eq!(cell.y, 300.0);
    }

    #[test]
    fn test_settle_out_of_range_column() {
        let board = Board::new();
        let mut cell = FallingCell::new(PuyoColor::Red, 6, 0.0);
        assert_eq!(
            settle(&mut cell, &board, 30.0),
            Err(BoardError::OutOfRange { column: 6 })
        );
    }
}
