//! Player tests - respawn accounting, win latch, loss terminal

use tui_frogger::core::{Grid, Player, PlayerStep};
use tui_frogger::types::{glyph, Input};

#[test]
fn test_respawn_when_car_enters_player_cell() {
    let mut grid = Grid::new(20, 10);
    let mut player = Player::new(10, 9, 3);
    player.update(Input::Up, &mut grid);
    player.update(Input::Up, &mut grid);
    assert_eq!(player.position(), (10, 7));

    // A car drives into the player during the obstacle phase.
    grid.set_tile(10, 7, glyph::CAR);

    assert_eq!(player.update(Input::Up, &mut grid), PlayerStep::Respawned);
    assert_eq!(player.lives(), 2);
    assert_eq!(player.position(), player.spawn());
    assert!(grid.is_collision(10, 9, glyph::PLAYER));
}

#[test]
fn test_respawn_when_player_steps_into_car() {
    let mut grid = Grid::new(20, 10);
    let mut player = Player::new(10, 9, 3);
    grid.set_tile(11, 9, glyph::CAR);

    assert_eq!(player.update(Input::Right, &mut grid), PlayerStep::Respawned);
    assert_eq!(player.lives(), 2);
    assert_eq!(player.position(), (10, 9));
    assert!(grid.is_collision(11, 9, glyph::CAR));
}

#[test]
fn test_one_life_per_collision_tick() {
    let mut grid = Grid::new(20, 10);
    let mut player = Player::new(10, 9, 3);
    player.update(Input::Up, &mut grid);

    // Hazard both on the current cell and on the cell the input targets.
    grid.set_tile(10, 8, glyph::CAR);
    grid.set_tile(10, 7, glyph::CAR);

    player.update(Input::Up, &mut grid);
    assert_eq!(player.lives(), 2);
    assert_eq!(player.position(), (10, 9));
}

#[test]
fn test_blocked_at_every_edge() {
    let mut grid = Grid::new(3, 3);
    let mut corner = Player::new(0, 0, 3);
    assert_eq!(corner.update(Input::Up, &mut grid), PlayerStep::Blocked);
    assert_eq!(corner.update(Input::Left, &mut grid), PlayerStep::Blocked);

    let mut other = Player::new(2, 2, 3);
    assert_eq!(other.update(Input::Down, &mut grid), PlayerStep::Blocked);
    assert_eq!(other.update(Input::Right, &mut grid), PlayerStep::Blocked);
    assert_eq!(other.position(), (2, 2));
}

#[test]
fn test_win_latch_survives_moving_away() {
    let mut grid = Grid::new(5, 5);
    let mut player = Player::new(2, 1, 3);
    player.update(Input::Up, &mut grid);
    player.update(Input::Down, &mut grid);
    assert!(player.has_won());
    for _ in 0..5 {
        player.update(Input::Down, &mut grid);
    }
    assert!(player.has_won());
}

#[test]
fn test_loss_is_terminal() {
    let mut grid = Grid::new(5, 5);
    let mut player = Player::new(2, 4, 3);
    for _ in 0..3 {
        grid.set_tile(2, 3, glyph::CAR);
        player.update(Input::Up, &mut grid);
    }
    assert_eq!(player.lives(), 0);
    assert!(player.has_lost());

    grid.set_tile(2, 3, glyph::CAR);
    player.update(Input::Up, &mut grid);
    assert_eq!(player.lives(), 0);
    assert!(player.has_lost());
}

#[test]
fn test_spawn_column_is_respected() {
    let player = Player::new(3, 8, 3);
    assert_eq!(player.position(), (3, 8));
    assert_eq!(player.spawn(), (3, 8));
}
