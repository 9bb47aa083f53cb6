//! Car module - a moving obstacle bound to one lane row
//!
//! A car moves one cell along x every `cadence` ticks and wraps around to
//! the edge opposite its direction of travel when it would leave the grid.

use tui_frogger_types::{glyph, Direction, MAX_CADENCE, MIN_CADENCE};

use crate::error::ConfigError;
use crate::grid::Grid;

/// Number of ticks a car waits between one-cell moves. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cadence(u8);

impl Cadence {
    pub const FASTEST: Cadence = Cadence(MIN_CADENCE);
    pub const SLOWEST: Cadence = Cadence(MAX_CADENCE);

    pub fn new(ticks: u8) -> Result<Self, ConfigError> {
        if ticks == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        Ok(Self(ticks))
    }

    pub fn ticks(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    x: i16,
    y: i16,
    speed: i16,
    cadence: Cadence,
    frames: u8,
    /// Column the car reappears at after leaving the grid.
    respawn_x: i16,
}

impl Car {
    pub fn new(x: i16, y: i16, direction: Direction, cadence: Cadence, grid_width: u16) -> Self {
        let respawn_x = match direction {
            Direction::Right => 0,
            Direction::Left => grid_width.saturating_sub(1) as i16,
        };
        Self {
            x,
            y,
            speed: direction.speed(),
            cadence,
            frames: 0,
            respawn_x,
        }
    }

    /// Advance one tick.
    ///
    /// The previous cell is cleared unconditionally before the glyph is
    /// written at the resolved position, which may be the same cell.
    pub fn update(&mut self, grid: &mut Grid) {
        let (prev_x, prev_y) = (self.x, self.y);

        self.frames += 1;
        if self.frames >= self.cadence.ticks() {
            self.x += self.speed;
            if grid.is_out_of_bounds(self.x, self.y) {
                self.x = self.respawn_x;
            }
            self.frames = 0;
        }

        grid.clear_tile(prev_x, prev_y);
        grid.set_tile(self.x, self.y, glyph::CAR);
    }

    pub fn position(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    pub fn speed(&self) -> i16 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        if self.speed < 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn respawn_x(&self) -> i16 {
        self.respawn_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fastest() -> Cadence {
        Cadence::FASTEST
    }

    #[test]
    fn zero_cadence_rejected() {
        assert_eq!(Cadence::new(0), Err(ConfigError::ZeroCadence));
        assert_eq!(Cadence::new(3).map(Cadence::ticks), Ok(3));
    }

    #[test]
    fn moves_one_cell_per_cadence() {
        let mut grid = Grid::new(10, 3);
        let mut car = Car::new(2, 1, Direction::Right, Cadence::new(3).unwrap(), 10);

        car.update(&mut grid);
        car.update(&mut grid);
        assert_eq!(car.position(), (2, 1));
        assert!(grid.is_collision(2, 1, glyph::CAR));

        car.update(&mut grid);
        assert_eq!(car.position(), (3, 1));
        assert!(grid.is_collision(3, 1, glyph::CAR));
        assert!(!grid.is_collision(2, 1, glyph::CAR));
    }

    #[test]
    fn wraps_right_edge_to_zero() {
        let mut grid = Grid::new(10, 3);
        let mut car = Car::new(9, 1, Direction::Right, fastest(), 10);
        car.update(&mut grid);
        assert_eq!(car.position(), (0, 1));
        assert_eq!(grid.count(glyph::CAR), 1);
    }

    #[test]
    fn wraps_left_edge_to_last_column() {
        let mut grid = Grid::new(10, 3);
        let mut car = Car::new(0, 1, Direction::Left, fastest(), 10);
        assert_eq!(car.respawn_x(), 9);
        car.update(&mut grid);
        assert_eq!(car.position(), (9, 1));
        assert_eq!(grid.count(glyph::CAR), 1);
    }

    #[test]
    fn stationary_tick_keeps_glyph() {
        let mut grid = Grid::new(5, 3);
        let mut car = Car::new(1, 1, Direction::Left, Cadence::SLOWEST, 5);
        car.update(&mut grid);
        assert_eq!(car.position(), (1, 1));
        assert!(grid.is_collision(1, 1, glyph::CAR));
    }
}
