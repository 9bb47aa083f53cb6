//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Glyphs
//!
//! Every grid cell holds exactly one glyph:
//!
//! | Glyph | Constant | Meaning |
//! |-------|----------|---------|
//! | `' '` | [`glyph::BACKGROUND`] | Empty road |
//! | `'C'` | [`glyph::CAR`] | Moving obstacle |
//! | `'.'` | [`glyph::PAVEMENT`] | Safe border tile |
//! | `'@'` | [`glyph::PLAYER`] | The frog |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Simulation rate during play |
//! | `END_TICKS_PER_SECOND` | 1 | Rate of the end-of-session pause |
//! | `END_PAUSE_TICKS` | 4 | Slow ticks shown before exit |
//! | `MAX_CADENCE` | 10 | Slowest lane: one move every 10 ticks |
//!
//! # Examples
//!
//! ```
//! use tui_frogger_types::{glyph, Input, UpdatePhase};
//!
//! let input = Input::from_str("up").unwrap();
//! assert_eq!(input.delta(), (0, -1));
//!
//! assert!(glyph::is_hazard(glyph::CAR));
//! assert!(!glyph::is_hazard(glyph::PAVEMENT));
//!
//! assert_eq!(UpdatePhase::ORDER[0], UpdatePhase::Obstacles);
//! ```

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: u16 = 12;

/// Row the player has to reach to win
pub const WIN_ROW: i16 = 0;

/// Lives the player starts with
pub const STARTING_LIVES: u8 = 3;

/// Obstacles seeded into every lane
pub const DEFAULT_CARS_PER_LANE: u8 = 5;

/// Upper bound on cars a single lane can hold
pub const MAX_CARS_PER_LANE: usize = 32;

/// Minimum starting gap between neighbouring cars in a lane
pub const MIN_CAR_SPACING: u16 = 2;

/// Fastest lane cadence (move every tick)
pub const MIN_CADENCE: u8 = 1;

/// Slowest lane cadence (move every 10 ticks)
pub const MAX_CADENCE: u8 = 10;

/// Simulation rate during play
pub const TICKS_PER_SECOND: u32 = 60;

/// Rate of the end-of-session pause
pub const END_TICKS_PER_SECOND: u32 = 1;

/// Number of slow ticks the end banner stays on screen
pub const END_PAUSE_TICKS: u32 = 4;

/// Tile glyphs and the hazard set.
pub mod glyph {
    /// Empty cell.
    pub const BACKGROUND: char = ' ';
    /// Moving obstacle.
    pub const CAR: char = 'C';
    /// Static safe border tile.
    pub const PAVEMENT: char = '.';
    /// Player token.
    pub const PLAYER: char = '@';

    /// Glyphs that cost the player a life on contact.
    pub const HAZARDS: [char; 1] = [CAR];

    /// Check whether a glyph belongs to the hazard set.
    pub fn is_hazard(ch: char) -> bool {
        HAZARDS.contains(&ch)
    }
}

/// Discrete per-tick signal from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
    Quit,
}

impl Input {
    /// Parse input from string (case-insensitive)
    ///
    /// ```
    /// use tui_frogger_types::Input;
    ///
    /// assert_eq!(Input::from_str("LEFT"), Some(Input::Left));
    /// assert_eq!(Input::from_str("quit"), Some(Input::Quit));
    /// assert_eq!(Input::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Input::Up),
            "down" => Some(Input::Down),
            "left" => Some(Input::Left),
            "right" => Some(Input::Right),
            "none" => Some(Input::None),
            "quit" => Some(Input::Quit),
            _ => None,
        }
    }

    /// Movement delta `(dx, dy)`; non-directional signals do not move.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Input::Up => (0, -1),
            Input::Down => (0, 1),
            Input::Left => (-1, 0),
            Input::Right => (1, 0),
            Input::None | Input::Quit => (0, 0),
        }
    }

    pub fn is_directional(self) -> bool {
        matches!(self, Input::Up | Input::Down | Input::Left | Input::Right)
    }
}

/// Horizontal travel direction shared by every car in a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed cells per move.
    pub fn speed(self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Build a direction from the sign of a speed value.
    pub fn from_speed(speed: i16) -> Option<Self> {
        match speed.signum() {
            1 => Some(Direction::Right),
            -1 => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Per-tick update phases, in the order they must run.
///
/// Obstacles move first so the player collides against this tick's
/// positions; borders are stamped after obstacles so pavement rows never
/// keep a stray car glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdatePhase {
    Obstacles,
    Borders,
    Player,
}

impl UpdatePhase {
    /// The only valid phase sequence for one tick.
    pub const ORDER: [UpdatePhase; 3] = [
        UpdatePhase::Obstacles,
        UpdatePhase::Borders,
        UpdatePhase::Player,
    ];
}

/// Terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}
