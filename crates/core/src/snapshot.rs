use tui_frogger_types::Outcome;

use crate::grid::Grid;

/// Read-only view of one tick, handed to the renderer after all mutation
/// for the tick has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot<'a> {
    pub grid: &'a Grid,
    pub lives: u8,
    pub tick: u64,
    pub outcome: Option<Outcome>,
}

impl<'a> GameSnapshot<'a> {
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn tiles(&self) -> &'a [char] {
        self.grid.tiles()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
