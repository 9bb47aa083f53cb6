//! Grid module - the shared tile buffer
//!
//! The grid is a `width x height` array of glyphs, one per cell, stored as a
//! flat row-major `Vec<char>`. It is the single source of truth for what
//! occupies where: entities only hold coordinates into it.
//!
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). Coordinates are signed so callers can probe
//! candidate positions just off the edge; every accessor treats those as out
//! of bounds instead of panicking.
//!
//! Writes are immediate overwrites. There is no double buffering, so the
//! order in which entities write within a tick decides what the next reader
//! sees.

use tui_frogger_types::glyph;

/// Largest width or height a grid may have so that `i16` coordinates plus a
/// one-cell step never overflow.
pub const MAX_GRID_SIDE: u16 = i16::MAX as u16;

/// The tile grid - flat array storage, row-major order (y * width + x)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    tiles: Vec<char>,
}

impl Grid {
    /// Create a grid filled with the background glyph.
    ///
    /// Sides larger than [`MAX_GRID_SIDE`] are clamped.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.min(MAX_GRID_SIDE);
        let height = height.min(MAX_GRID_SIDE);
        Self {
            width,
            height,
            tiles: vec![glyph::BACKGROUND; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// True iff x is outside [0, width) or y is outside [0, height).
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || y < 0 || x as i32 >= self.width as i32 || y as i32 >= self.height as i32
    }

    /// Get the glyph at (x, y).
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<char> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Overwrite the glyph at (x, y).
    /// Out-of-bounds writes are ignored and return false.
    pub fn set_tile(&mut self, x: i16, y: i16, ch: char) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = ch;
                true
            }
            None => false,
        }
    }

    /// Reset (x, y) to the background glyph.
    pub fn clear_tile(&mut self, x: i16, y: i16) -> bool {
        self.set_tile(x, y, glyph::BACKGROUND)
    }

    /// True iff (x, y) is in bounds and currently holds `ch`.
    pub fn is_collision(&self, x: i16, y: i16, ch: char) -> bool {
        self.get(x, y) == Some(ch)
    }

    /// True iff (x, y) holds any glyph from the hazard set.
    pub fn is_hazard(&self, x: i16, y: i16) -> bool {
        self.get(x, y).is_some_and(glyph::is_hazard)
    }

    /// Read-only view of every tile, row-major.
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    /// Read-only view of one row.
    pub fn row(&self, y: i16) -> Option<&[char]> {
        if y < 0 || y as i32 >= self.height as i32 {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.tiles[start..start + self.width as usize])
    }

    /// Number of cells currently holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.tiles.iter().filter(|&&t| t == ch).count()
    }
}
