//! Player module - the controlled token
//!
//! Each tick the player runs a fixed sequence of checks against the grid:
//!
//! 1. If a hazard already occupies the player's cell (a car drove into it
//!    during the obstacle phase), respawn and stop.
//! 2. If the player stands on the win row, latch `won`.
//! 3. Apply the directional input to get a candidate cell.
//! 4. Discard the candidate if it is off the grid.
//! 5. If the candidate holds a hazard, respawn.
//! 6. Clear the old cell and write the player glyph at the final cell.
//!
//! `won` is never cleared and `lives` never drops below zero.

use log::{debug, info};

use tui_frogger_types::{glyph, Input, WIN_ROW};

use crate::grid::Grid;

/// What a single [`Player::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStep {
    /// No directional input.
    Stayed,
    /// Moved one cell.
    Moved,
    /// Input would have left the grid.
    Blocked,
    /// Hit a hazard and went back to spawn.
    Respawned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    x: i16,
    y: i16,
    spawn_x: i16,
    spawn_y: i16,
    won: bool,
    lives: u8,
}

impl Player {
    pub fn new(spawn_x: i16, spawn_y: i16, lives: u8) -> Self {
        Self {
            x: spawn_x,
            y: spawn_y,
            spawn_x,
            spawn_y,
            won: false,
            lives,
        }
    }

    /// Run one tick of the player state machine.
    pub fn update(&mut self, input: Input, grid: &mut Grid) -> PlayerStep {
        if grid.is_hazard(self.x, self.y) {
            grid.clear_tile(self.x, self.y);
            self.respawn();
            grid.set_tile(self.x, self.y, glyph::PLAYER);
            return PlayerStep::Respawned;
        }

        if self.y == WIN_ROW && !self.won {
            self.won = true;
            info!("player reached the win row at x={}", self.x);
        }

        let (prev_x, prev_y) = (self.x, self.y);
        let (dx, dy) = input.delta();
        let mut step = if input.is_directional() {
            PlayerStep::Moved
        } else {
            PlayerStep::Stayed
        };

        self.x += dx;
        self.y += dy;

        if grid.is_out_of_bounds(self.x, self.y) {
            self.x = prev_x;
            self.y = prev_y;
            step = PlayerStep::Blocked;
        }

        if grid.is_hazard(self.x, self.y) {
            self.respawn();
            step = PlayerStep::Respawned;
        }

        grid.clear_tile(prev_x, prev_y);
        grid.set_tile(self.x, self.y, glyph::PLAYER);
        step
    }

    /// Return to spawn and lose a life. Does not touch the win latch.
    pub fn respawn(&mut self) {
        self.x = self.spawn_x;
        self.y = self.spawn_y;
        self.lives = self.lives.saturating_sub(1);
        debug!("player respawned, {} lives left", self.lives);
        if self.lives == 0 {
            info!("player is out of lives");
        }
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn has_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn position(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    pub fn spawn(&self) -> (i16, i16) {
        (self.spawn_x, self.spawn_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_in_all_directions() {
        let mut grid = Grid::new(5, 5);
        let mut p = Player::new(2, 2, 3);

        assert_eq!(p.update(Input::Up, &mut grid), PlayerStep::Moved);
        assert_eq!(p.position(), (2, 1));
        assert_eq!(p.update(Input::Down, &mut grid), PlayerStep::Moved);
        assert_eq!(p.update(Input::Left, &mut grid), PlayerStep::Moved);
        assert_eq!(p.position(), (1, 2));
        assert_eq!(p.update(Input::Right, &mut grid), PlayerStep::Moved);
        assert_eq!(p.position(), (2, 2));
        assert_eq!(p.update(Input::None, &mut grid), PlayerStep::Stayed);
        assert_eq!(p.update(Input::Quit, &mut grid), PlayerStep::Stayed);
        assert_eq!(p.position(), (2, 2));
    }

    #[test]
    fn move_leaves_no_trail() {
        let mut grid = Grid::new(5, 5);
        let mut p = Player::new(2, 4, 3);
        for _ in 0..3 {
            p.update(Input::Up, &mut grid);
        }
        assert_eq!(grid.count(glyph::PLAYER), 1);
        assert!(grid.is_collision(2, 1, glyph::PLAYER));
    }

    #[test]
    fn edges_block_movement() {
        let mut grid = Grid::new(3, 3);
        let mut p = Player::new(0, 2, 3);
        assert_eq!(p.update(Input::Left, &mut grid), PlayerStep::Blocked);
        assert_eq!(p.update(Input::Down, &mut grid), PlayerStep::Blocked);
        assert_eq!(p.position(), (0, 2));
        assert_eq!(p.lives(), 3);
    }

    #[test]
    fn stepping_onto_car_respawns() {
        let mut grid = Grid::new(5, 5);
        let mut p = Player::new(2, 4, 3);
        grid.set_tile(2, 3, glyph::CAR);

        assert_eq!(p.update(Input::Up, &mut grid), PlayerStep::Respawned);
        assert_eq!(p.position(), (2, 4));
        assert_eq!(p.lives(), 2);
        assert!(grid.is_collision(2, 3, glyph::CAR));
        assert!(grid.is_collision(2, 4, glyph::PLAYER));
    }

    #[test]
    fn car_on_player_cell_skips_input_and_win_check() {
        let mut grid = Grid::new(5, 5);
        let mut p = Player::new(2, 4, 3);
        p.update(Input::Up, &mut grid);
        grid.set_tile(2, 3, glyph::CAR);

        assert_eq!(p.update(Input::Left, &mut grid), PlayerStep::Respawned);
        assert_eq!(p.position(), (2, 4));
        assert_eq!(p.lives(), 2);
        assert_eq!(grid.get(2, 3), Some(glyph::BACKGROUND));
        assert!(!p.has_won());
    }

    #[test]
    fn win_latches() {
        let mut grid = Grid::new(3, 3);
        let mut p = Player::new(1, 1, 3);
        p.update(Input::Up, &mut grid);
        assert!(!p.has_won());
        p.update(Input::Down, &mut grid);
        assert!(p.has_won());
        p.update(Input::Down, &mut grid);
        assert!(p.has_won());
    }

    #[test]
    fn lives_saturate_at_zero() {
        let mut p = Player::new(0, 0, 1);
        p.respawn();
        assert!(p.has_lost());
        p.respawn();
        assert_eq!(p.lives(), 0);
        assert!(p.has_lost());
    }

    #[test]
    fn respawn_keeps_win() {
        let mut grid = Grid::new(3, 3);
        let mut p = Player::new(1, 0, 3);
        p.update(Input::None, &mut grid);
        assert!(p.has_won());
        p.respawn();
        assert!(p.has_won());
    }
}
