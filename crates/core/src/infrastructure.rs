//! Infrastructure module - the full obstacle field
//!
//! Pavement lines the top and bottom rows; lanes of cars occupy evenly
//! spaced interior rows. Obstacles are updated before borders so the
//! pavement is always the last writer on the border rows.

use log::debug;
use rand::Rng;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::lane::Lane;
use crate::pavement::Pavement;

/// Smallest grid height that leaves one interior row between the borders.
pub const MIN_FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infrastructure {
    lanes: Vec<Lane>,
    pavements: Vec<Pavement>,
}

impl Infrastructure {
    /// Lay out pavements and `lane_count` randomly configured lanes.
    pub fn new<R: Rng + ?Sized>(
        grid: &Grid,
        lane_count: u16,
        cars_per_lane: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let rows = lane_rows(grid, lane_count)?;
        let lanes = rows
            .into_iter()
            .map(|row| Lane::random(row, cars_per_lane, &mut *rng, grid.width()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_lanes(grid, lanes)
    }

    /// Build from pre-configured lanes. Every lane must sit on an interior row
    /// and must have been laid out for this grid's width.
    pub fn from_lanes(grid: &Grid, lanes: Vec<Lane>) -> Result<Self, ConfigError> {
        if grid.height() < MIN_FIELD_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                width: grid.width(),
                height: grid.height(),
                min_width: 1,
                min_height: MIN_FIELD_HEIGHT,
            });
        }
        if lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }

        let last_interior = grid.height() as i16 - 2;
        if let Some(lane) = lanes
            .iter()
            .find(|lane| lane.row() < 1 || lane.row() > last_interior)
        {
            return Err(ConfigError::LaneOutsideInterior {
                row: lane.row(),
                last_interior,
            });
        }
        if let Some(lane) = lanes.iter().find(|lane| lane.width() != grid.width()) {
            return Err(ConfigError::LaneWidthMismatch {
                row: lane.row(),
                lane_width: lane.width(),
                grid_width: grid.width(),
            });
        }

        let bottom = grid.height() as i16 - 1;
        let columns = grid.width().saturating_sub(1) as i16;
        let mut pavements = Vec::with_capacity(columns as usize * 2);
        for x in 0..columns {
            pavements.push(Pavement::new(x, 0));
            pavements.push(Pavement::new(x, bottom));
        }

        debug!(
            "infrastructure: {} lanes, {} pavement tiles",
            lanes.len(),
            pavements.len()
        );
        Ok(Self { lanes, pavements })
    }

    /// Obstacle phase: every lane, in row order.
    pub fn update_obstacles(&mut self, grid: &mut Grid) {
        for lane in &mut self.lanes {
            lane.update(grid);
        }
    }

    /// Border phase: every pavement tile.
    pub fn update_borders(&self, grid: &mut Grid) {
        for pavement in &self.pavements {
            pavement.update(grid);
        }
    }

    /// Obstacles first, then borders.
    pub fn update(&mut self, grid: &mut Grid) {
        self.update_obstacles(grid);
        self.update_borders(grid);
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn pavements(&self) -> &[Pavement] {
        &self.pavements
    }
}

/// Interior rows for `lane_count` lanes, spaced `(height - 2) / lane_count`
/// apart starting at row 1.
pub fn lane_rows(grid: &Grid, lane_count: u16) -> Result<Vec<i16>, ConfigError> {
    if grid.height() < MIN_FIELD_HEIGHT {
        return Err(ConfigError::GridTooSmall {
            width: grid.width(),
            height: grid.height(),
            min_width: 1,
            min_height: MIN_FIELD_HEIGHT,
        });
    }
    if lane_count == 0 {
        return Err(ConfigError::NoLanes);
    }

    let interior_rows = grid.height() - 2;
    if lane_count > interior_rows {
        return Err(ConfigError::TooManyLanes {
            lanes: lane_count,
            interior_rows,
        });
    }

    let space = interior_rows / lane_count;
    Ok((0..lane_count).map(|i| (1 + space * i) as i16).collect())
}
