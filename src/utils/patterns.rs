use super::{parse_rle, ParseRleError};
use crate::SparseGrid;

/// Named starting pattern stored as RLE.
pub struct Pattern {
    pub name: &'static str,
    pub rle: &'static str,
}

impl Pattern {
    pub fn grid(&self) -> Result<SparseGrid, ParseRleError> {
        parse_rle(self.rle)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rle: "x = 3, y = 3, rule = B3/S23\nbob$2bo$3o!",
    },
    Pattern {
        name: "Blinker",
        rle: "x = 3, y = 1, rule = B3/S23\n3o!",
    },
    Pattern {
        name: "Lightweight spaceship",
        rle: "x = 5, y = 4, rule = B3/S23\nbo2bo$o4b$o3bo$4o!",
    },
    Pattern {
        name: "R-pentomino",
        rle: "x = 3, y = 3, rule = B3/S23\nb2o$2o$bo!",
    },
    Pattern {
        name: "Diehard",
        rle: "x = 8, y = 3, rule = B3/S23\n6bob$2o6b$bo3b3o!",
    },
    Pattern {
        name: "Acorn",
        rle: "x = 7, y = 3, rule = B3/S23\nbo5b$3bo3b$2o2b3o!",
    },
    Pattern {
        name: "Gosper glider gun",
        rle: "#N Gosper glider gun\n\
              x = 36, y = 9, rule = B3/S23\n\
              24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\n\
              2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
    },
];
