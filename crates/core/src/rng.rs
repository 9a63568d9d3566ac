//! RNG module - deterministic color generation
//!
//! Each cell color is drawn uniformly from the five colors. A small LCG keeps
//! sessions reproducible from a seed, which the tests and benches rely on.

use crate::types::{PuyoColor, COLOR_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High 16 bits only.
        (self.next_u32() >> 16) % max
    }

    /// Current state, usable as a seed to replay the rest of the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of cell colors for new pairs
#[derive(Debug, Clone)]
pub struct ColorSource {
    rng: SimpleRng,
}

impl ColorSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one color
    pub fn next_color(&mut self) -> PuyoColor {
        let index = self.rng.next_range(COLOR_COUNT as u32) as u8;
        PuyoColor::from_index(index).unwrap_or(PuyoColor::Red)
    }

    /// Draw the (primary, secondary) colors of the next pair
    pub fn next_pair(&mut self) -> (PuyoColor, PuyoColor) {
        let primary = self.next_color();
        let secondary = self.next_color();
        (primary, secondary)
    }

    /// Preview the next pair without consuming it
    pub fn peek_pair(&self) -> (PuyoColor, PuyoColor) {
        self.clone().next_pair()
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        Self::new(1)
    }
}
