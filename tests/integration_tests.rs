//! Integration tests for the tick protocol and the session loop

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_frogger::core::{Cadence, Car, Game, GameConfig, Grid, Infrastructure, Lane, Player};
use tui_frogger::input::ScriptedInput;
use tui_frogger::session::{Session, SessionEnd};
use tui_frogger::term::{FramePacer, FrameBuffer, GameView, Renderer, Viewport};
use tui_frogger::types::{glyph, Direction, Input, Outcome};

#[derive(Default)]
struct CountingPacer {
    waits: u32,
    rates: Vec<u32>,
}

impl FramePacer for CountingPacer {
    fn wait(&mut self) {
        self.waits += 1;
    }

    fn set_rate(&mut self, ticks_per_second: u32) {
        self.rates.push(ticks_per_second);
    }
}

#[derive(Default)]
struct MemoryRenderer {
    frames: u32,
    last_rows: Vec<String>,
}

impl Renderer for MemoryRenderer {
    fn viewport(&self) -> Viewport {
        Viewport::new(40, 16)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.frames += 1;
        self.last_rows = (0..fb.height()).map(|y| fb.row_string(y)).collect();
        Ok(())
    }
}

fn single_car_game(cadence: Cadence, lane_row: i16, player: Player) -> Game {
    let grid = Grid::new(20, 10);
    let lane = Lane::new(lane_row, 1, cadence, Direction::Right, 20).unwrap();
    let infra = Infrastructure::from_lanes(&grid, vec![lane]).unwrap();
    Game::from_parts(grid, infra, player)
}

#[test]
fn test_player_crosses_empty_field() {
    let mut grid = Grid::new(20, 10);
    let mut player = Player::new(10, 9, 3);

    for tick in 1..=9 {
        player.update(Input::Up, &mut grid);
        assert!(!player.has_won(), "win is checked before the move (tick {})", tick);
    }
    assert_eq!(player.position(), (10, 0));

    player.update(Input::None, &mut grid);
    assert!(player.has_won());
    assert_eq!(player.lives(), 3);
}

#[test]
fn test_car_moving_into_stationary_player_is_detected() {
    let mut grid = Grid::new(20, 10);
    let mut car = Car::new(5, 5, Direction::Right, Cadence::FASTEST, 20);
    let mut player = Player::new(6, 5, 3);
    player.update(Input::None, &mut grid);

    car.update(&mut grid);
    assert_eq!(car.position(), (6, 5));
    assert!(grid.is_collision(6, 5, glyph::CAR));

    player.update(Input::None, &mut grid);
    assert_eq!(player.lives(), 2);
    assert_eq!(player.position(), player.spawn());
}

#[test]
fn test_obstacles_update_before_player() {
    // The car reaches the player's cell on the very first tick; the hit must
    // be seen in the same tick.
    let mut game = single_car_game(Cadence::FASTEST, 5, Player::new(1, 5, 3));
    game.update(Input::None);
    assert_eq!(game.player().lives(), 2);
}

#[test]
fn test_densest_lane_cars_still_hit() {
    // Five cars two cells apart on a ten-wide field: after one move every car
    // must still own a visible cell.
    let grid = Grid::new(10, 10);
    let lane = Lane::new(3, 5, Cadence::FASTEST, Direction::Right, 10).unwrap();
    let infra = Infrastructure::from_lanes(&grid, vec![lane]).unwrap();
    let mut game = Game::from_parts(grid, infra, Player::new(3, 4, 3));

    game.update(Input::Up);
    let lane_row = game.grid().row(3).unwrap();
    assert_eq!(lane_row.iter().filter(|&&c| c == glyph::CAR).count(), 5);
    assert_eq!(game.player().lives(), 2);
    assert_eq!(game.player().position(), (3, 4));
}

#[test]
fn test_borders_drawn_after_obstacles() {
    let cfg = GameConfig::with_size(20, 10);
    let mut game = Game::new(&cfg, &mut StdRng::seed_from_u64(5)).unwrap();
    for _ in 0..120 {
        game.update(Input::None);
        let top = game.grid().row(0).unwrap();
        assert!(top[..19].iter().all(|&c| c == glyph::PAVEMENT));
        assert_eq!(top[19], glyph::BACKGROUND);
    }
}

#[test]
fn test_player_always_in_bounds() {
    let cfg = GameConfig::default();
    let mut game = Game::new(&cfg, &mut StdRng::seed_from_u64(99)).unwrap();
    let moves = [Input::Left, Input::Up, Input::Right, Input::Down, Input::Up];
    for i in 0..2_000 {
        game.update(moves[i % moves.len()]);
        let (x, y) = game.player().position();
        assert!(!game.grid().is_out_of_bounds(x, y));
        if game.player_loses() {
            break;
        }
    }
}

#[test]
fn test_loss_persists_across_ticks() {
    let mut game = single_car_game(Cadence::FASTEST, 5, Player::new(1, 5, 1));
    game.update(Input::None);
    assert!(game.player_loses());
    assert_eq!(game.outcome(), Some(Outcome::Lost));
    for _ in 0..10 {
        game.update(Input::Up);
        assert!(game.player_loses());
    }
}

#[test]
fn test_session_quit_skips_update() {
    let cfg = GameConfig::with_size(20, 10);
    let mut game = Game::new(&cfg, &mut StdRng::seed_from_u64(2)).unwrap();
    let mut input = ScriptedInput::new([Input::Quit]);
    let mut renderer = MemoryRenderer::default();
    let mut pacer = CountingPacer::default();

    let end = Session {
        input: &mut input,
        renderer: &mut renderer,
        pacer: &mut pacer,
        view: GameView::default(),
    }
    .run(&mut game, &cfg)
    .unwrap();

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(game.tick_count(), 0);
    assert_eq!(renderer.frames, 0);
}

#[test]
fn test_session_win_then_slow_pause() {
    let cfg = GameConfig::with_size(20, 10);
    let mut game = single_car_game(Cadence::SLOWEST, 1, Player::new(19, 9, 3));
    let mut input = ScriptedInput::new([Input::Up; 9]);
    let mut renderer = MemoryRenderer::default();
    let mut pacer = CountingPacer::default();

    let end = Session {
        input: &mut input,
        renderer: &mut renderer,
        pacer: &mut pacer,
        view: GameView::default(),
    }
    .run(&mut game, &cfg)
    .unwrap();

    assert_eq!(end, SessionEnd::Finished(Outcome::Won));
    assert_eq!(game.tick_count(), 10);
    assert_eq!(renderer.frames, 10);
    assert_eq!(pacer.rates, vec![cfg.end_ticks_per_second]);
    assert_eq!(pacer.waits, 10 + cfg.end_pause_ticks);
    assert!(renderer.last_rows.iter().any(|r| r.contains("Ribbit!")));
    assert!(renderer.last_rows.iter().any(|r| r.contains("You've won!!!")));
}

#[test]
fn test_session_loss_banner() {
    let cfg = GameConfig::with_size(20, 10);
    let mut game = single_car_game(Cadence::FASTEST, 1, Player::new(2, 2, 1));
    let mut input = ScriptedInput::new([Input::None, Input::Up]);
    let mut renderer = MemoryRenderer::default();
    let mut pacer = CountingPacer::default();

    let end = Session {
        input: &mut input,
        renderer: &mut renderer,
        pacer: &mut pacer,
        view: GameView::default(),
    }
    .run(&mut game, &cfg)
    .unwrap();

    assert_eq!(end, SessionEnd::Finished(Outcome::Lost));
    assert_eq!(game.tick_count(), 2);
    assert!(renderer.last_rows.iter().any(|r| r.contains("You lose.")));
}
