use super::Config;
use crate::{Bounds, Coord};

/// Maps canvas pixels to cells and back.
///
/// `offset_x`, `offset_y` is the pan offset in pixels: the canvas pixel
/// `(px, py)` shows the plane point `(px + offset_x, py + offset_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub cell_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.,
            offset_y: 0.,
            cell_size: Config::CELL_SIZE,
        }
    }
}

impl Viewport {
    /// Cell under a canvas pixel. Uses floor division so that pixels left of
    /// or above the origin land in negative cells.
    pub fn cell_at(&self, px: f64, py: f64) -> Coord {
        Coord::new(
            ((px + self.offset_x) / self.cell_size).floor() as i64,
            ((py + self.offset_y) / self.cell_size).floor() as i64,
        )
    }

    /// Canvas position of the top left corner of a cell.
    pub fn cell_origin(&self, coord: Coord) -> (f64, f64) {
        (
            coord.x as f64 * self.cell_size - self.offset_x,
            coord.y as f64 * self.cell_size - self.offset_y,
        )
    }

    /// Cells at least partially visible on a `width`x`height` canvas.
    pub fn visible_cells(&self, width: f64, height: f64) -> Bounds {
        Bounds {
            min: self.cell_at(0., 0.),
            max: self.cell_at(width, height),
        }
    }

    /// Moves the content along with a pointer drag of `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x -= dx;
        self.offset_y -= dy;
    }

    /// Multiplies the cell size by `factor`, keeping the plane point under
    /// the canvas pixel `(px, py)` in place.
    pub fn zoom_at(&mut self, factor: f64, px: f64, py: f64) {
        let cell_size =
            (self.cell_size * factor).clamp(Config::MIN_CELL_SIZE, Config::MAX_CELL_SIZE);
        let scale = cell_size / self.cell_size;
        self.offset_x = (px + self.offset_x) * scale - px;
        self.offset_y = (py + self.offset_y) * scale - py;
        self.cell_size = cell_size;
    }

    /// Pans so that `coord` sits in the middle of a `width`x`height` canvas.
    pub fn center_on(&mut self, coord: Coord, width: f64, height: f64) {
        self.offset_x = (coord.x as f64 + 0.5) * self.cell_size - width / 2.;
        self.offset_y = (coord.y as f64 + 0.5) * self.cell_size - height / 2.;
    }
}
