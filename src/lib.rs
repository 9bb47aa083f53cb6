//! TUI Frogger (workspace facade crate).
//!
//! Re-exports the member crates under stable paths
//! (`tui_frogger::{core,input,term,types}`) and hosts the session loop that
//! ties the simulation to its terminal collaborators.

pub mod logging;
pub mod session;

pub use tui_frogger_core as core;
pub use tui_frogger_input as input;
pub use tui_frogger_term as term;
pub use tui_frogger_types as types;
