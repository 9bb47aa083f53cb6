//! Construction-time errors.
//!
//! Every variant is a rejected precondition. Once a [`crate::Game`] exists,
//! ticking it cannot fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min_width}x{min_height}, got {width}x{height}")]
    GridTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("grid {width}x{height} exceeds the addressable range of {max} cells per side")]
    GridTooLarge { width: u16, height: u16, max: u16 },

    #[error("an infrastructure needs at least one lane")]
    NoLanes,

    #[error("{lanes} lanes do not fit in {interior_rows} interior rows")]
    TooManyLanes { lanes: u16, interior_rows: u16 },

    #[error("a lane needs at least one car")]
    NoCars,

    #[error("{cars} cars do not fit in a lane {width} cells wide (capacity {capacity})")]
    TooManyCars {
        cars: usize,
        width: u16,
        capacity: usize,
    },

    #[error("{cars} cars in a lane {width} cells wide are closer than {min_spacing} cells apart")]
    CarsTooClose {
        cars: usize,
        width: u16,
        min_spacing: u16,
    },

    #[error("cadence must be at least 1 tick per move")]
    ZeroCadence,

    #[error("lane row {row} is outside the interior rows 1..={last_interior}")]
    LaneOutsideInterior { row: i16, last_interior: i16 },

    #[error("lane on row {row} was laid out for width {lane_width}, grid is {grid_width} wide")]
    LaneWidthMismatch {
        row: i16,
        lane_width: u16,
        grid_width: u16,
    },

    #[error("spawn ({x}, {y}) is outside the {width}x{height} grid")]
    SpawnOutOfBounds {
        x: i16,
        y: i16,
        width: u16,
        height: u16,
    },

    #[error("the player needs at least one life")]
    NoLives,

    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
}
