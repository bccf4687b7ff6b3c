use super::{next_state, Engine};
use crate::{Coord, SparseGrid};

/// Reference engine that visits every cell of the bounding box grown by one.
///
/// Its cost is proportional to the area of the pattern; it exists to
/// cross-check [`SparseEngine`](super::SparseEngine).
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundedScanEngine;

impl BoundedScanEngine {
    fn count_neibs(grid: &SparseGrid, cell: Coord) -> u8 {
        cell.neighbors().filter(|&n| grid.contains(n)).count() as u8
    }
}

impl Engine for BoundedScanEngine {
    fn next_generation(&self, grid: &SparseGrid) -> SparseGrid {
        let Some(bounds) = grid.bounding_box() else {
            return SparseGrid::new();
        };
        let area = bounds.expanded(1);

        let mut next = Vec::new();
        for y in area.min.y..=area.max.y {
            for x in area.min.x..=area.max.x {
                let cell = Coord::new(x, y);
                if next_state(grid.contains(cell), Self::count_neibs(grid, cell)) {
                    next.push(cell);
                }
            }
        }
        next.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "bounded-scan"
    }
}
