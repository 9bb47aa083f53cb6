//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! a core snapshot into a simple framebuffer that is flushed to the terminal
//! with crossterm, and provides the fixed-rate [`Ticker`] that paces the
//! session loop.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Only re-emit cells that changed between frames
//! - Allow wider-than-tall tiles (e.g. 2 columns per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod ticker;

pub use tui_frogger_core as core;
pub use tui_frogger_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, FieldOrigin, GameView, Viewport, LOSE_BANNER, WIN_BANNER};
pub use renderer::{encode_diff_into, encode_full_into, Renderer, TerminalRenderer};
pub use ticker::{FramePacer, Ticker};
