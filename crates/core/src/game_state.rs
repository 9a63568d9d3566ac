//! Game state module - the owned game session
//!
//! Ties together board, piece, color source and the fall controller, and runs
//! the phase machine:
//!
//! - **Control**: the pair falls together; shifts and rotations are accepted.
//!   When the primary lands it locks and the secondary settles alone; when the
//!   secondary lands first (Bottom orientation, or a side orientation over a
//!   higher stack) it locks and the primary settles alone.
//! - **Falling**: the remaining cell drops at the forced speed, no input.
//!   When it locks a new pair spawns and the phase returns to Control.
//! - **GameOver**: entered when the watched column fills up, or when a cell
//!   lands on a column with no free row. Nothing moves afterwards.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::fall::{self, FallSpeed};
use crate::movement;
use crate::piece::{FallingCell, Piece};
use crate::rng::ColorSource;
use crate::snapshot::{CellSnapshot, GameSnapshot};
use crate::types::{CoreEvent, Direction, GameAction, PairCell, Phase, Spin, TickInput};

/// Events buffered between two `take_events` calls; the oldest go first
pub const EVENT_CAPACITY: usize = 16;

/// True when `window_ms` has passed since the last accepted action
#[inline]
fn debounce_elapsed(last_ms: Option<u64>, now_ms: u64, window_ms: u32) -> bool {
    match last_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= u64::from(window_ms),
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    piece: Option<Piece>,
    phase: Phase,
    colors: ColorSource,
    /// Timestamp of the last accepted shift
    last_shift_ms: Option<u64>,
    /// Timestamp of the last accepted rotation
    last_rotate_ms: Option<u64>,
    pieces_spawned: u32,
    cells_locked: u32,
    started: bool,
    /// Lock/spawn/game-over events not yet taken by the host
    events: ArrayVec<CoreEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new session with default tuning and the given color seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Start from a pre-built board (puzzle setups, tests)
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            colors: ColorSource::new(config.seed),
            config,
            board,
            piece: None,
            phase: Phase::Control,
            last_shift_ms: None,
            last_rotate_ms: None,
            pieces_spawned: 0,
            cells_locked: 0,
            started: false,
            events: ArrayVec::new(),
        }
    }

    /// Start the game and spawn the first pair
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn cells_locked(&self) -> u32 {
        self.cells_locked
    }

    /// Take all events emitted since the last call
    pub fn take_events(&mut self) -> ArrayVec<CoreEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Buffer an event, evicting the oldest when the host has not drained them
    fn push_event(&mut self, event: CoreEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.heights = *self.board.heights();
        out.primary = self
            .piece
            .as_ref()
            .and_then(|p| p.primary())
            .map(|c| CellSnapshot::from_cell(PairCell::Primary, c));
        out.secondary = self
            .piece
            .as_ref()
            .and_then(|p| p.secondary())
            .map(|c| CellSnapshot::from_cell(PairCell::Secondary, c));
        out.orientation = self
            .piece
            .as_ref()
            .map(|p| p.orientation())
            .unwrap_or(out.orientation);
        out.next_pair = self.colors.peek_pair();
        out.phase = self.phase;
        out.cell_size = self.config.cell_size;
        out.pieces_spawned = self.pieces_spawned;
        out.cells_locked = self.cells_locked;
        out.seed = self.colors.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new pair at the spawn column and return to Control
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let (primary, secondary) = self.colors.next_pair();
        let column = self.config.spawn_column;
        let mut piece = Piece::spawn(primary, secondary, column as i8, self.config.cell_size);
        piece.set_velocity(self.config.fall_speed);

        self.piece = Some(piece);
        self.phase = Phase::Control;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.push_event(CoreEvent::Spawned {
            primary,
            secondary,
            column,
        });
        true
    }

    /// Shift the pair one column, subject to debounce and legality
    pub(crate) fn try_shift(&mut self, direction: Direction, now_ms: u64) -> bool {
        if self.phase != Phase::Control
            || !debounce_elapsed(self.last_shift_ms, now_ms, self.config.shift_debounce_ms)
        {
            return false;
        }
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        if !movement::can_shift(piece, &self.board, direction, self.config.cell_size) {
            return false;
        }

        piece.shift(direction);
        self.last_shift_ms = Some(now_ms);
        true
    }

    /// Rotate the pair one step (or kick half a turn), subject to debounce
    pub(crate) fn try_rotate(&mut self, spin: Spin, now_ms: u64) -> bool {
        if self.phase != Phase::Control
            || !debounce_elapsed(self.last_rotate_ms, now_ms, self.config.rotate_debounce_ms)
        {
            return false;
        }
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        if !piece.is_paired() {
            return false;
        }

        piece.rotate(spin, &self.board, self.config.cell_size);
        self.last_rotate_ms = Some(now_ms);
        true
    }

    /// Check whether the given airborne cell has landed and lock it if so
    fn land(&mut self, which: PairCell) -> Result<bool, BoardError> {
        let cell_size = self.config.cell_size;
        let Some(piece) = self.piece.as_mut() else {
            return Ok(false);
        };
        let Some(cell) = piece.cell_mut(which) else {
            return Ok(false);
        };
        let Some(row) = fall::settle(cell, &self.board, cell_size)? else {
            return Ok(false);
        };
        let Some(cell) = piece.take(which) else {
            return Ok(false);
        };

        self.lock_cell(which, cell, row)?;
        Ok(true)
    }

    /// Move a landed cell into the board, then run the loss check
    fn lock_cell(&mut self, which: PairCell, cell: FallingCell, row: i8) -> Result<(), BoardError> {
        if self.board.is_column_full(cell.column)? {
            // Nowhere to put it: the stack already reaches the top row.
            self.enter_game_over();
            return Ok(());
        }

        self.board.lock(cell.column, row, cell.color)?;
        self.cells_locked = self.cells_locked.wrapping_add(1);
        self.push_event(CoreEvent::Locked {
            cell: which,
            column: cell.column as u8,
            row: row as u8,
            color: cell.color,
        });

        if self.board.is_column_full(self.config.game_over_column as i8)? {
            self.enter_game_over();
        }
        Ok(())
    }

    fn enter_game_over(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = Phase::GameOver;
        self.piece = None;
        self.push_event(CoreEvent::GameOver);
    }

    /// Main game tick.
    ///
    /// `now_ms` is the host's elapsed wall-clock time (debounce reference),
    /// `elapsed_ms` the time since the previous tick (motion). Returns true
    /// when a cell locked during this tick.
    pub fn tick(&mut self, now_ms: u64, elapsed_ms: u32, input: TickInput) -> Result<bool, BoardError> {
        if !self.started {
            return Ok(false);
        }

        match self.phase {
            Phase::Control => self.tick_control(now_ms, elapsed_ms, input),
            Phase::Falling => self.tick_falling(elapsed_ms),
            Phase::GameOver => Ok(false),
        }
    }

    fn tick_control(&mut self, now_ms: u64, elapsed_ms: u32, input: TickInput) -> Result<bool, BoardError> {
        // Left wins when both are held; right still gets a chance if left is blocked.
        let shifted = input.left && self.try_shift(Direction::Left, now_ms);
        if !shifted && input.right {
            self.try_shift(Direction::Right, now_ms);
        }

        let velocity = FallSpeed::for_input(input.soft_drop).velocity(&self.config);

        let rotated = input.rotate_cw && self.try_rotate(Spin::Clockwise, now_ms);
        if !rotated && input.rotate_ccw {
            self.try_rotate(Spin::Anticlockwise, now_ms);
        }

        let Some(piece) = self.piece.as_mut() else {
            return Ok(false);
        };
        piece.set_velocity(velocity);
        for cell in piece.cells_mut() {
            fall::advance(cell, elapsed_ms);
        }

        if self.land(PairCell::Primary)? {
            if self.phase == Phase::Control {
                self.phase = Phase::Falling;
            }
            return Ok(true);
        }

        // Only while still in Control, so a cell never locks twice in one tick.
        if self.phase == Phase::Control && self.land(PairCell::Secondary)? {
            if self.phase == Phase::Control {
                self.phase = Phase::Falling;
            }
            return Ok(true);
        }

        Ok(false)
    }

    fn tick_falling(&mut self, elapsed_ms: u32) -> Result<bool, BoardError> {
        let forced = FallSpeed::Forced.velocity(&self.config);
        let Some(piece) = self.piece.as_mut() else {
            return Ok(false);
        };
        let which = piece.active();
        let Some(cell) = piece.cell_mut(which) else {
            return Ok(false);
        };
        cell.velocity = forced;
        fall::advance(cell, elapsed_ms);

        if !self.land(which)? {
            return Ok(false);
        }
        if self.phase == Phase::GameOver {
            return Ok(true);
        }

        self.piece = None;
        self.spawn_piece();
        Ok(true)
    }

    /// Apply a one-shot action at `now_ms`.
    ///
    /// Goes through the same debounce and legality checks as held input.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(Direction::Left, now_ms),
            GameAction::MoveRight => self.try_shift(Direction::Right, now_ms),
            GameAction::RotateCw => self.try_rotate(Spin::Clockwise, now_ms),
            GameAction::RotateCcw => self.try_rotate(Spin::Anticlockwise, now_ms),
        }
    }

    /// Check if the pair could shift one column right now (ignores debounce)
    pub fn can_shift(&self, direction: Direction) -> bool {
        match self.piece.as_ref() {
            Some(piece) if self.phase == Phase::Control => {
                movement::can_shift(piece, &self.board, direction, self.config.cell_size)
            }
            _ => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
