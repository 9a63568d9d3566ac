//! Session tuning. Board dimensions are compile-time constants; everything
//! here can differ per session.

use crate::types::{
    CELL_SIZE, FALL_SPEED, GAME_OVER_COLUMN, ROTATE_DEBOUNCE_MS, SHIFT_DEBOUNCE_MS,
    SOFT_DROP_SPEED, SPAWN_COLUMN,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Seed for the color generator
    pub seed: u32,
    /// Size of one cell in position units
    pub cell_size: f32,
    /// Column new pairs appear in
    pub spawn_column: u8,
    /// Column whose overflow ends the game
    pub game_over_column: u8,
    /// Normal gravity, units per second
    pub fall_speed: f32,
    /// Soft drop and settling speed, units per second
    pub soft_drop_speed: f32,
    pub shift_debounce_ms: u32,
    pub rotate_debounce_ms: u32,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            cell_size: CELL_SIZE,
            spawn_column: SPAWN_COLUMN,
            game_over_column: GAME_OVER_COLUMN,
            fall_speed: FALL_SPEED,
            soft_drop_speed: SOFT_DROP_SPEED,
            shift_debounce_ms: SHIFT_DEBOUNCE_MS,
            rotate_debounce_ms: ROTATE_DEBOUNCE_MS,
        }
    }
}
