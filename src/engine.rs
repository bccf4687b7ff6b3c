mod bounded_scan;
mod sparse;

pub use bounded_scan::BoundedScanEngine;
pub use sparse::SparseEngine;

use crate::SparseGrid;

/// Transition function of Conway's Game of Life (B3/S23) on an unbounded plane.
pub trait Engine {
    /// Computes the generation that follows `grid`.
    ///
    /// Must be a pure function of `grid`: equal inputs give equal outputs.
    fn next_generation(&self, grid: &SparseGrid) -> SparseGrid;

    /// Short human-readable name, used in logs and benchmarks.
    fn name(&self) -> &'static str;
}

/// Standard survival/birth rule given the current state and the number of alive neighbors.
#[inline]
pub fn next_state(alive: bool, alive_neighbors: u8) -> bool {
    matches!((alive, alive_neighbors), (true, 2 | 3) | (false, 3))
}
