//! Game module - wires the obstacle field and the player into one tick
//!
//! The game owns the grid and lends it to each component in turn. The
//! order is fixed by [`UpdatePhase::ORDER`]: obstacles, then borders, then
//! the player. Reordering changes collision outcomes, e.g. a car moving into
//! the player after the player's check would go unnoticed for a tick.

use log::{info, trace};
use rand::Rng;

use tui_frogger_types::{Input, Outcome, UpdatePhase};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::infrastructure::Infrastructure;
use crate::player::{Player, PlayerStep};
use crate::snapshot::GameSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    infrastructure: Infrastructure,
    player: Player,
    tick: u64,
    last_step: Option<PlayerStep>,
}

impl Game {
    /// Build a session from `config`, drawing lane parameters from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.width, config.height);
        let infrastructure = Infrastructure::new(
            &grid,
            config.lane_count(),
            config.cars_per_lane as usize,
            rng,
        )?;
        let (spawn_x, spawn_y) = config.spawn_point();
        let player = Player::new(spawn_x, spawn_y, config.lives);

        info!(
            "new game {}x{}, {} lanes, spawn ({}, {})",
            config.width,
            config.height,
            infrastructure.lanes().len(),
            spawn_x,
            spawn_y
        );
        Ok(Self::from_parts(grid, infrastructure, player))
    }

    /// Assemble a game from already-built components.
    pub fn from_parts(grid: Grid, infrastructure: Infrastructure, player: Player) -> Self {
        Self {
            grid,
            infrastructure,
            player,
            tick: 0,
            last_step: None,
        }
    }

    /// Advance one tick.
    pub fn update(&mut self, input: Input) {
        for phase in UpdatePhase::ORDER {
            self.run_phase(phase, input);
        }
        self.tick += 1;
        trace!(
            "tick {} player={:?} step={:?}",
            self.tick,
            self.player.position(),
            self.last_step
        );
    }

    fn run_phase(&mut self, phase: UpdatePhase, input: Input) {
        match phase {
            UpdatePhase::Obstacles => self.infrastructure.update_obstacles(&mut self.grid),
            UpdatePhase::Borders => self.infrastructure.update_borders(&mut self.grid),
            UpdatePhase::Player => {
                self.last_step = Some(self.player.update(input, &mut self.grid));
            }
        }
    }

    pub fn player_wins(&self) -> bool {
        self.player.has_won()
    }

    pub fn player_loses(&self) -> bool {
        self.player.has_lost()
    }

    /// Terminal state, if any. A win is reported ahead of a loss.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player_wins() {
            Some(Outcome::Won)
        } else if self.player_loses() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            grid: &self.grid,
            lives: self.player.lives(),
            tick: self.tick,
            outcome: self.outcome(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn infrastructure(&self) -> &Infrastructure {
        &self.infrastructure
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// What the player did on the most recent tick.
    pub fn last_step(&self) -> Option<PlayerStep> {
        self.last_step
    }
}
