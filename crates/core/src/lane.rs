//! Lane module - one row of same-direction, same-cadence cars

use arrayvec::ArrayVec;
use log::debug;
use rand::Rng;

use tui_frogger_types::{Direction, MAX_CADENCE, MAX_CARS_PER_LANE, MIN_CADENCE, MIN_CAR_SPACING};

use crate::car::{Cadence, Car};
use crate::error::ConfigError;
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    row: i16,
    cadence: Cadence,
    direction: Direction,
    width: u16,
    cars: ArrayVec<Car, MAX_CARS_PER_LANE>,
}

impl Lane {
    /// Build a lane with `car_count` cars spread evenly across the row.
    ///
    /// Car `i` starts at column `(grid_width / car_count) * i`. Cars must
    /// start at least [`MIN_CAR_SPACING`] columns apart, otherwise a car would
    /// erase the neighbour that just moved into its old cell.
    pub fn new(
        row: i16,
        car_count: usize,
        cadence: Cadence,
        direction: Direction,
        grid_width: u16,
    ) -> Result<Self, ConfigError> {
        if car_count == 0 {
            return Err(ConfigError::NoCars);
        }
        if car_count > MAX_CARS_PER_LANE || car_count > grid_width as usize {
            return Err(ConfigError::TooManyCars {
                cars: car_count,
                width: grid_width,
                capacity: MAX_CARS_PER_LANE,
            });
        }

        let space = grid_width as usize / car_count;
        if space < MIN_CAR_SPACING as usize {
            return Err(ConfigError::CarsTooClose {
                cars: car_count,
                width: grid_width,
                min_spacing: MIN_CAR_SPACING,
            });
        }

        let cars = (0..car_count)
            .map(|i| Car::new((space * i) as i16, row, direction, cadence, grid_width))
            .collect();

        Ok(Self {
            row,
            cadence,
            direction,
            width: grid_width,
            cars,
        })
    }

    /// Build a lane whose cadence and direction are drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(
        row: i16,
        car_count: usize,
        rng: &mut R,
        grid_width: u16,
    ) -> Result<Self, ConfigError> {
        let cadence = Cadence::new(rng.gen_range(MIN_CADENCE..=MAX_CADENCE))?;
        let direction = if rng.gen_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        };
        debug!(
            "lane row={} cadence={} direction={:?} cars={}",
            row,
            cadence.ticks(),
            direction,
            car_count
        );
        Self::new(row, car_count, cadence, direction, grid_width)
    }

    /// Update every car in index order.
    pub fn update(&mut self, grid: &mut Grid) {
        for car in &mut self.cars {
            car.update(grid);
        }
    }

    pub fn row(&self) -> i16 {
        self.row
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Grid width the cars were laid out for.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }
}
