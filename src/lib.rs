mod engine;
mod grid;
mod gui;
mod history;
mod utils;

pub use engine::{next_state, BoundedScanEngine, Engine, SparseEngine};
pub use grid::{Bounds, Coord, SparseGrid, MOORE_OFFSETS};
pub use gui::{App, Config, Viewport};
pub use history::GenerationHistory;
pub use utils::{parse_rle, random_soup, NiceInt, ParseRleError, Pattern, PATTERNS};

pub type DefaultEngine = SparseEngine;
