use crate::piece::FallingCell;
use crate::types::{Orientation, PairCell, Phase, PuyoColor, BOARD_COLUMNS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSnapshot {
    pub which: PairCell,
    pub color: PuyoColor,
    pub column: i8,
    pub y: f32,
}

impl CellSnapshot {
    pub fn from_cell(which: PairCell, cell: &FallingCell) -> Self {
        Self {
            which,
            color: cell.color,
            column: cell.column,
            y: cell.y,
        }
    }

    /// Board row the cell currently overlaps most, given the cell size
    pub fn display_row(&self, cell_size: f32) -> i8 {
        (self.y / cell_size).round() as i8
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Color indices, 0 = empty, otherwise `PuyoColor::index() + 1`
    pub board: [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
    pub heights: [i8; BOARD_COLUMNS as usize],
    pub primary: Option<CellSnapshot>,
    pub secondary: Option<CellSnapshot>,
    pub orientation: Orientation,
    pub next_pair: (PuyoColor, PuyoColor),
    pub phase: Phase,
    pub cell_size: f32,
    pub pieces_spawned: u32,
    pub cells_locked: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];
        self.heights = [BOARD_ROWS as i8 - 1; BOARD_COLUMNS as usize];
        self.primary = None;
        self.secondary = None;
        self.orientation = Orientation::Top;
        self.next_pair = (PuyoColor::Red, PuyoColor::Red);
        self.phase = Phase::Control;
        self.pieces_spawned = 0;
        self.cells_locked = 0;
        self.seed = 0;
    }

    /// Airborne cells, primary first
    pub fn falling_cells(&self) -> impl Iterator<Item = &CellSnapshot> {
        self.primary.iter().chain(self.secondary.iter())
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            heights: [0; BOARD_COLUMNS as usize],
            primary: None,
            secondary: None,
            orientation: Orientation::Top,
            next_pair: (PuyoColor::Red, PuyoColor::Red),
            phase: Phase::Control,
            cell_size: crate::types::CELL_SIZE,
            pieces_spawned: 0,
            cells_locked: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
