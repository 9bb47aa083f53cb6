//! Core simulation - pure, deterministic, and testable
//!
//! This crate contains the grid simulation and collision model. It has
//! **zero dependencies** on terminals, input devices or clocks:
//!
//! - **Single source of truth**: the [`Grid`] records what occupies every
//!   cell; entities hold only coordinates and read-before-write.
//! - **Explicit ownership**: [`Game`] owns the grid and lends it to each
//!   component for its phase of the tick.
//! - **Injectable randomness**: lane cadence and direction are drawn from a
//!   caller-supplied [`rand::Rng`], so seeded sessions are reproducible.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile buffer with bounds and collision queries
//! - [`car`]: a wrapping obstacle moving every `cadence` ticks
//! - [`lane`]: a row of cars sharing cadence and direction
//! - [`pavement`]: border safe tiles
//! - [`infrastructure`]: lanes plus pavements, the whole obstacle field
//! - [`player`]: the controlled token, its lives and win latch
//! - [`game`]: one tick = obstacles, borders, player
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_frogger_core::{Game, GameConfig};
//! use tui_frogger_core::types::Input;
//!
//! let config = GameConfig::with_size(20, 10);
//! let mut game = Game::new(&config, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! game.update(Input::Up);
//! assert_eq!(game.tick_count(), 1);
//! assert!(!game.player_wins());
//! ```

pub mod car;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod infrastructure;
pub mod lane;
pub mod pavement;
pub mod player;
pub mod snapshot;

pub use tui_frogger_types as types;

pub use car::{Cadence, Car};
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;
pub use grid::Grid;
pub use infrastructure::Infrastructure;
pub use lane::Lane;
pub use pavement::Pavement;
pub use player::{Player, PlayerStep};
pub use snapshot::GameSnapshot;
