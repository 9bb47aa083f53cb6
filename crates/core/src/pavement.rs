//! Pavement module - static safe tiles on the border rows

use tui_frogger_types::glyph;

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pavement {
    x: i16,
    y: i16,
}

impl Pavement {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Re-stamp the pavement glyph over whatever is in the cell.
    pub fn update(&self, grid: &mut Grid) {
        grid.set_tile(self.x, self.y, glyph::PAVEMENT);
    }

    pub fn position(&self) -> (i16, i16) {
        (self.x, self.y)
    }
}
