use super::{next_state, Engine};
use crate::SparseGrid;
use ahash::{AHashMap, AHashSet};

/// Engine whose work is proportional to the population rather than to the area.
///
/// Only alive cells and the dead cells bordering them are ever looked at.
#[derive(Clone, Copy, Debug, Default)]
pub struct SparseEngine;

impl Engine for SparseEngine {
    fn next_generation(&self, grid: &SparseGrid) -> SparseGrid {
        let mut next = AHashSet::with_capacity(grid.population());
        // dead cell -> number of alive cells bordering it
        let mut birth_candidates: AHashMap<_, u8> = AHashMap::new();

        for cell in grid.iter() {
            let mut alive_neighbors = 0;
            for neighbor in cell.neighbors() {
                if grid.contains(neighbor) {
                    alive_neighbors += 1;
                } else {
                    *birth_candidates.entry(neighbor).or_insert(0) += 1;
                }
            }
            if next_state(true, alive_neighbors) {
                next.insert(cell);
            }
        }

        for (cell, alive_neighbors) in birth_candidates {
            if next_state(false, alive_neighbors) {
                next.insert(cell);
            }
        }

        SparseGrid::from_set(next)
    }

    fn name(&self) -> &'static str {
        "sparse"
    }
}
