use ahash::AHashSet;
use std::{fmt, sync::Arc};

/// Offsets of the 8-connected Moore neighborhood.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cell coordinate on the infinite plane. `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shifted copy. Wraps around at the limits of `i64`, so a shift past
    /// `i64::MAX` reappears near `i64::MIN`.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Shifted copy, `None` if it falls outside the `i64` range.
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The cells surrounding this one: 8 of them, fewer at the limits of `i64`.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        MOORE_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Inclusive axis-aligned box of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Number of columns, saturating at `u64::MAX`.
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of rows, saturating at `u64::MAX`.
    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Middle cell, rounded towards zero.
    pub fn center(&self) -> Coord {
        let mid = |a: i64, b: i64| ((i128::from(a) + i128::from(b)) / 2) as i64;
        Coord::new(mid(self.min.x, self.max.x), mid(self.min.y, self.max.y))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x)
            && (self.min.y..=self.max.y).contains(&coord.y)
    }

    /// Grows the box by `margin` cells on every side, stopping at the limits of `i64`.
    pub fn expanded(&self, margin: i64) -> Self {
        Self {
            min: Coord::new(
                self.min.x.saturating_sub(margin),
                self.min.y.saturating_sub(margin),
            ),
            max: Coord::new(
                self.max.x.saturating_add(margin),
                self.max.y.saturating_add(margin),
            ),
        }
    }
}

/// Set of alive cells with no bound on the coordinate range.
///
/// The set is shared behind an `Arc`: cloning a grid is cheap and every
/// edit returns a new grid, leaving snapshots held elsewhere untouched.
#[derive(Clone, Default)]
pub struct SparseGrid {
    cells: Arc<AHashSet<Coord>>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_set(cells: AHashSet<Coord>) -> Self {
        Self {
            cells: Arc::new(cells),
        }
    }

    /// Builds a grid from `(x, y)` pairs; duplicates collapse.
    pub fn from_cells(cells: &[(i64, i64)]) -> Self {
        cells.iter().copied().map(Coord::from).collect()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns the grid with `coord` alive.
    ///
    /// If the cell is already alive the result shares storage with `self`.
    pub fn with_set(&self, coord: Coord) -> Self {
        if self.contains(coord) {
            return self.clone();
        }
        let mut cells = AHashSet::clone(&self.cells);
        cells.insert(coord);
        Self::from_set(cells)
    }

    /// Returns the grid with `coord` dead.
    ///
    /// If the cell is already dead the result shares storage with `self`.
    pub fn with_cleared(&self, coord: Coord) -> Self {
        if !self.contains(coord) {
            return self.clone();
        }
        let mut cells = AHashSet::clone(&self.cells);
        cells.remove(&coord);
        Self::from_set(cells)
    }

    /// All alive cells in row-major order (`y`, then `x`).
    pub fn live_coordinates(&self) -> Vec<Coord> {
        let mut coords = self.iter().collect::<Vec<_>>();
        coords.sort_unstable_by_key(|c| (c.y, c.x));
        coords
    }

    /// Alive cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest box holding every alive cell, `None` for an empty grid.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut cells = self.iter();
        let first = cells.next()?;
        let bounds = cells.fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, c| Bounds {
                min: Coord::new(b.min.x.min(c.x), b.min.y.min(c.y)),
                max: Coord::new(b.max.x.max(c.x), b.max.y.max(c.y)),
            },
        );
        Some(bounds)
    }

    /// Copy of the grid shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        self.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// True when both grids share the same storage.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.cells, &b.cells)
    }
}

impl PartialEq for SparseGrid {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
            || (self.population() == other.population()
                && self.iter().all(|c| other.contains(c)))
    }
}

impl Eq for SparseGrid {}

impl fmt::Debug for SparseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.live_coordinates().iter().map(|c| (c.x, c.y)))
            .finish()
    }
}

impl FromIterator<Coord> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut cells = AHashSet::new();
        for coord in iter {
            cells.insert(coord);
        }
        Self::from_set(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear() {
        let grid = SparseGrid::new();
        assert!(grid.is_empty());

        let grid = grid.with_set(Coord::new(-3, 7));
        assert!(grid.contains(Coord::new(-3, 7)));
        assert!(!grid.contains(Coord::new(3, 7)));
        assert_eq!(grid.population(), 1);

        let grid = grid.with_cleared(Coord::new(-3, 7));
        assert!(grid.is_empty());
    }

    #[test]
    fn unchanged_edits_share_storage() {
        let grid = SparseGrid::from_cells(&[(0, 0), (1, 1)]);
        assert!(SparseGrid::ptr_eq(&grid, &grid.with_set(Coord::new(0, 0))));
        assert!(SparseGrid::ptr_eq(&grid, &grid.with_cleared(Coord::new(5, 5))));
        assert!(!SparseGrid::ptr_eq(&grid, &grid.with_set(Coord::new(5, 5))));
    }

    #[test]
    fn edits_leave_the_receiver_untouched() {
        let before = SparseGrid::from_cells(&[(0, 0)]);
        let after = before.with_set(Coord::new(1, 0)).with_cleared(Coord::new(0, 0));
        assert_eq!(before, SparseGrid::from_cells(&[(0, 0)]));
        assert_eq!(after, SparseGrid::from_cells(&[(1, 0)]));
    }

    #[test]
    fn live_coordinates_are_row_major() {
        let grid = SparseGrid::from_cells(&[(2, 1), (-1, 1), (5, -4), (0, 0), (0, 0)]);
        assert_eq!(
            grid.live_coordinates(),
            vec![
                Coord::new(5, -4),
                Coord::new(0, 0),
                Coord::new(-1, 1),
                Coord::new(2, 1)
            ]
        );
    }

    #[test]
    fn bounding_box() {
        assert_eq!(SparseGrid::new().bounding_box(), None);
        let b = SparseGrid::from_cells(&[(-2, 3), (4, -1), (0, 0)])
            .bounding_box()
            .unwrap();
        assert_eq!(b.min, Coord::new(-2, -1));
        assert_eq!(b.max, Coord::new(4, 3));
        assert_eq!((b.width(), b.height()), (7, 5));
        assert_eq!(b.center(), Coord::new(1, 1));
        assert!(b.contains(Coord::new(0, 0)));
        assert!(!b.expanded(1).contains(Coord::new(6, 0)));
        assert!(b.expanded(1).contains(Coord::new(5, 4)));
    }

    #[test]
    fn neighbors_exclude_center() {
        let center = Coord::new(-10, 10);
        let neighbors = center.neighbors().collect::<Vec<_>>();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        assert!(neighbors
            .iter()
            .all(|n| (n.x - center.x).abs() <= 1 && (n.y - center.y).abs() <= 1));
    }

    #[test]
    fn far_coordinates_are_valid() {
        let far = Coord::new(i64::MAX - 1, i64::MIN + 1);
        let grid = SparseGrid::new().with_set(far);
        assert!(grid.contains(far));
        assert_eq!(far.neighbors().count(), 8);
    }

    #[test]
    fn neighbors_stop_at_range_limits() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        let neighbors = corner.neighbors().collect::<Vec<_>>();
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.iter().all(|n| n.x > 0 && n.y < 0));
    }

    #[test]
    fn bounds_of_distant_cells() {
        let grid = SparseGrid::from_cells(&[(i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]);
        let b = grid.bounding_box().unwrap();
        assert_eq!((b.width(), b.height()), (u64::MAX, u64::MAX));
        assert_eq!(b.center(), Coord::new(0, 0));
        assert_eq!(b.expanded(1), b);
    }
}
