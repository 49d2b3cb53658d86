use rand::Rng;

use super::state::Position;

/// Square tile space the snakes live in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    tile_count: i32,
}

impl Grid {
    pub fn new(tile_count: i32) -> Self {
        Self { tile_count }
    }

    pub fn tile_count(&self) -> i32 {
        self.tile_count
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        (self.tile_count.max(0) as usize).pow(2)
    }

    /// Check if a position is within the grid bounds
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.tile_count && pos.y >= 0 && pos.y < self.tile_count
    }

    /// Uniformly sample a cell; callers re-sample to avoid occupied cells
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(0..self.tile_count),
            rng.gen_range(0..self.tile_count),
        )
    }
}
