//! Session configuration.
//!
//! `GameConfig::default()` reproduces the reference field: a 32x12 grid,
//! `height / 2 - 1` lanes of 5 cars, 3 lives, spawn at the bottom centre.

use tui_frogger_types::{
    DEFAULT_CARS_PER_LANE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, END_PAUSE_TICKS,
    END_TICKS_PER_SECOND, MAX_CARS_PER_LANE, MIN_CAR_SPACING, STARTING_LIVES, TICKS_PER_SECOND,
};

use crate::error::ConfigError;
use crate::grid::MAX_GRID_SIDE;
use crate::infrastructure::{lane_rows, MIN_FIELD_HEIGHT};

/// Narrowest grid that can hold a spawn column and one car.
pub const MIN_FIELD_WIDTH: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// `None` picks `height / 2 - 1` (at least 1).
    pub lanes: Option<u16>,
    pub cars_per_lane: u8,
    pub lives: u8,
    /// `None` spawns at `(width / 2, height - 1)`.
    pub spawn: Option<(i16, i16)>,
    pub ticks_per_second: u32,
    pub end_ticks_per_second: u32,
    pub end_pause_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}

impl GameConfig {
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            lanes: None,
            cars_per_lane: DEFAULT_CARS_PER_LANE,
            lives: STARTING_LIVES,
            spawn: None,
            ticks_per_second: TICKS_PER_SECOND,
            end_ticks_per_second: END_TICKS_PER_SECOND,
            end_pause_ticks: END_PAUSE_TICKS,
        }
    }

    pub fn lane_count(&self) -> u16 {
        self.lanes
            .unwrap_or_else(|| (self.height / 2).saturating_sub(1).max(1))
    }

    pub fn spawn_point(&self) -> (i16, i16) {
        self.spawn.unwrap_or((
            (self.width / 2) as i16,
            self.height.saturating_sub(1) as i16,
        ))
    }

    /// Check every construction precondition without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_FIELD_WIDTH || self.height < MIN_FIELD_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_FIELD_WIDTH,
                min_height: MIN_FIELD_HEIGHT,
            });
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_SIDE,
            });
        }

        let cars = self.cars_per_lane as usize;
        if cars == 0 {
            return Err(ConfigError::NoCars);
        }
        if cars > MAX_CARS_PER_LANE || cars > self.width as usize {
            return Err(ConfigError::TooManyCars {
                cars,
                width: self.width,
                capacity: MAX_CARS_PER_LANE,
            });
        }
        if self.width as usize / cars < MIN_CAR_SPACING as usize {
            return Err(ConfigError::CarsTooClose {
                cars,
                width: self.width,
                min_spacing: MIN_CAR_SPACING,
            });
        }

        let lanes = self.lane_count();
        if lanes == 0 {
            return Err(ConfigError::NoLanes);
        }
        let interior_rows = self.height - 2;
        if lanes > interior_rows {
            return Err(ConfigError::TooManyLanes {
                lanes,
                interior_rows,
            });
        }

        let (x, y) = self.spawn_point();
        if x < 0 || y < 0 || x as i32 >= self.width as i32 || y as i32 >= self.height as i32 {
            return Err(ConfigError::SpawnOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.ticks_per_second == 0 || self.end_ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Rows the lanes will occupy for this configuration.
    pub fn lane_rows(&self) -> Result<Vec<i16>, ConfigError> {
        self.validate()?;
        lane_rows(&crate::grid::Grid::new(self.width, self.height), self.lane_count())
    }
}
