use crate::{Coord, DefaultEngine, Engine, SparseGrid};
use tracing::{debug, trace};

/// Linear timeline of generations with a cursor.
///
/// Index 0 holds the seed. Everything up to the cursor is settled; snapshots
/// past the cursor were computed by earlier forward steps and are replayed
/// instead of being recomputed. Editing the current generation discards them.
pub struct GenerationHistory<E: Engine = DefaultEngine> {
    engine: E,
    generations: Vec<SparseGrid>,
    cursor: usize,
}

impl GenerationHistory {
    pub fn new() -> Self {
        Self::with_engine(DefaultEngine::default())
    }
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::len_without_is_empty)]
impl<E: Engine> GenerationHistory<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            generations: vec![SparseGrid::new()],
            cursor: 0,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &SparseGrid {
        &self.generations[self.cursor]
    }

    /// Index of the current generation.
    pub fn generation_index(&self) -> usize {
        self.cursor
    }

    /// Number of stored generations; never zero.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Number of alive cells in the current generation.
    pub fn population(&self) -> usize {
        self.current().population()
    }

    /// Whether [`advance`](Self::advance) would replay a stored snapshot.
    pub fn has_cached_future(&self) -> bool {
        self.cursor + 1 < self.generations.len()
    }

    /// Moves one generation forward.
    ///
    /// An extinct generation cannot evolve, so this is a no-op returning
    /// `false` when the current grid is empty.
    pub fn advance(&mut self) -> bool {
        if self.current().is_empty() {
            trace!(generation = self.cursor, "extinct, not advancing");
            return false;
        }
        if !self.has_cached_future() {
            let next = self.engine.next_generation(self.current());
            debug!(
                generation = self.cursor + 1,
                population = next.population(),
                engine = self.engine.name(),
                "computed generation"
            );
            self.generations.push(next);
        } else {
            debug!(generation = self.cursor + 1, "replaying cached generation");
        }
        self.cursor += 1;
        true
    }

    /// Advances up to `n` times, stopping early on extinction.
    ///
    /// Returns the number of generations actually stepped.
    pub fn advance_by(&mut self, n: usize) -> usize {
        (0..n).take_while(|_| self.advance()).count()
    }

    /// Moves one generation back, keeping the future for replay.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Replaces the current generation and drops every generation after it.
    pub fn edit(&mut self, grid: SparseGrid) {
        let discarded = self.generations.len() - self.cursor - 1;
        if discarded > 0 {
            debug!(
                generation = self.cursor,
                discarded, "edit truncated cached future"
            );
        }
        self.generations.truncate(self.cursor + 1);
        self.generations[self.cursor] = grid;
    }

    /// Makes the cell alive. Returns `false` (and keeps the future) if it already was.
    pub fn paint_cell(&mut self, x: i64, y: i64) -> bool {
        let coord = Coord::new(x, y);
        if self.current().contains(coord) {
            trace!(x, y, "cell already alive");
            return false;
        }
        let next = self.current().with_set(coord);
        self.edit(next);
        true
    }

    /// Kills the cell. Returns `false` (and keeps the future) if it already was dead.
    pub fn erase_cell(&mut self, x: i64, y: i64) -> bool {
        let coord = Coord::new(x, y);
        if !self.current().contains(coord) {
            trace!(x, y, "cell already dead");
            return false;
        }
        let next = self.current().with_cleared(coord);
        self.edit(next);
        true
    }

    /// Back to a single empty generation.
    pub fn reset(&mut self) {
        debug!(discarded = self.generations.len(), "history reset");
        self.generations.clear();
        self.generations.push(SparseGrid::new());
        self.cursor = 0;
    }

    /// Starts a fresh timeline from `grid`.
    pub fn seed(&mut self, grid: SparseGrid) {
        self.reset();
        self.edit(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Delegates to the default engine and counts invocations.
    #[derive(Default)]
    struct CountingEngine {
        calls: Cell<usize>,
    }

    impl Engine for CountingEngine {
        fn next_generation(&self, grid: &SparseGrid) -> SparseGrid {
            self.calls.set(self.calls.get() + 1);
            DefaultEngine::default().next_generation(grid)
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn blinker() -> SparseGrid {
        SparseGrid::from_cells(&[(0, 0), (1, 0), (2, 0)])
    }

    fn glider() -> SparseGrid {
        SparseGrid::from_cells(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    #[test]
    fn starts_with_one_empty_generation() {
        let history = GenerationHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.generation_index(), 0);
        assert!(history.current().is_empty());
        assert!(!history.has_cached_future());
    }

    #[test]
    fn advance_on_empty_is_noop() {
        let mut history = GenerationHistory::new();
        assert!(!history.advance());
        assert_eq!(history.len(), 1);
        assert_eq!(history.generation_index(), 0);
    }

    #[test]
    fn advance_stops_after_extinction() {
        let mut history = GenerationHistory::new();
        history.paint_cell(0, 0);
        assert!(history.advance());
        assert!(history.current().is_empty());
        assert!(!history.advance());
        assert_eq!((history.len(), history.generation_index()), (2, 1));
    }

    #[test]
    fn length_grows_by_one_per_advance() {
        let mut history = GenerationHistory::new();
        history.edit(glider());
        for n in 1..=12 {
            assert!(history.advance());
            assert_eq!(history.len(), n + 1);
            assert_eq!(history.generation_index(), n);
        }
        assert_eq!(*history.current(), glider().translated(3, 3));
    }

    #[test]
    fn replay_does_not_recompute() {
        let mut history = GenerationHistory::with_engine(CountingEngine::default());
        history.edit(glider());
        assert_eq!(history.advance_by(5), 5);
        assert_eq!(history.engine().calls.get(), 5);

        let fifth = history.current().clone();
        for _ in 0..3 {
            assert!(history.retreat());
        }
        assert_eq!(history.len(), 6);
        assert!(history.has_cached_future());
        assert_eq!(history.advance_by(3), 3);

        assert_eq!(history.engine().calls.get(), 5);
        assert!(SparseGrid::ptr_eq(history.current(), &fifth));
    }

    #[test]
    fn retreat_at_start_is_noop() {
        let mut history = GenerationHistory::new();
        history.edit(blinker());
        assert!(!history.retreat());
        assert_eq!(history.generation_index(), 0);
    }

    #[test]
    fn edit_truncates_future() {
        let mut history = GenerationHistory::new();
        history.edit(blinker());
        history.advance_by(4);
        history.retreat();
        history.retreat();
        assert_eq!(history.generation_index(), 2);
        assert_eq!(history.len(), 5);

        let g = SparseGrid::from_cells(&[(9, 9), (10, 9), (9, 10), (10, 10)]);
        history.edit(g.clone());
        assert_eq!(history.len(), 3);
        assert_eq!(*history.current(), g);
        assert!(!history.has_cached_future());
    }

    #[test]
    fn edit_keeps_earlier_generations() {
        let mut history = GenerationHistory::new();
        history.edit(blinker());
        history.advance();
        history.paint_cell(50, 50);
        history.retreat();
        assert_eq!(*history.current(), blinker());
    }

    #[test]
    fn redundant_paint_and_erase_keep_future() {
        let mut history = GenerationHistory::new();
        history.edit(blinker());
        history.advance_by(3);
        history.retreat();
        assert_eq!(history.len(), 4);

        let alive = history.current().live_coordinates()[0];
        assert!(!history.paint_cell(alive.x, alive.y));
        assert!(!history.erase_cell(1000, -1000));
        assert_eq!(history.len(), 4);

        assert!(history.erase_cell(alive.x, alive.y));
        assert_eq!(history.len(), 3);
        assert!(!history.current().contains(alive));
        assert!(history.paint_cell(alive.x, alive.y));
        assert!(history.current().contains(alive));
    }

    #[test]
    fn reset_discards_everything() {
        let mut history = GenerationHistory::new();
        history.edit(glider());
        history.advance_by(7);
        history.reset();
        assert_eq!(history.len(), 1);
        assert_eq!(history.generation_index(), 0);
        assert!(history.current().is_empty());
    }

    #[test]
    fn seed_starts_fresh_timeline() {
        let mut history = GenerationHistory::new();
        history.edit(glider());
        history.advance_by(3);
        history.seed(blinker());
        assert_eq!(history.len(), 1);
        assert_eq!(history.population(), 3);
        assert_eq!(*history.current(), blinker());
    }

    #[test]
    fn advance_by_stops_early() {
        let mut history = GenerationHistory::new();
        history.edit(SparseGrid::from_cells(&[(0, 0), (1, 0)]));
        assert_eq!(history.advance_by(10), 1);
        assert_eq!(history.len(), 2);
    }
}
