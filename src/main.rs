//! Terminal Frogger runner (default binary).
//!
//! Cross the road without getting hit. Arrow keys / WASD / HJKL move,
//! `q` or `Esc` quits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tui_frogger::core::{Game, GameConfig};
use tui_frogger::input::TerminalInput;
use tui_frogger::session::{Session, SessionEnd};
use tui_frogger::term::{GameView, TerminalRenderer, Ticker};
use tui_frogger::types::{
    Outcome, DEFAULT_CARS_PER_LANE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, STARTING_LIVES,
    TICKS_PER_SECOND,
};

/// Cross a road of wrapping traffic in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for lane speeds and directions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Field width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Field height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Number of lanes (defaults to height / 2 - 1)
    #[arg(long)]
    lanes: Option<u16>,

    /// Cars per lane
    #[arg(long, default_value_t = DEFAULT_CARS_PER_LANE)]
    cars: u8,

    /// Starting lives
    #[arg(long, default_value_t = STARTING_LIVES)]
    lives: u8,

    /// Simulation ticks per second
    #[arg(long, default_value_t = TICKS_PER_SECOND)]
    fps: u32,

    /// Draw every tile two columns wide
    #[arg(long)]
    wide: bool,

    /// Enable debug logging (only written with --log-file)
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            lanes: self.lanes,
            cars_per_lane: self.cars,
            lives: self.lives,
            ticks_per_second: self.fps,
            ..GameConfig::with_size(self.width, self.height)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tui_frogger::logging::init(args.verbose, args.log_file.as_deref())?;

    let config = args.config();
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut game = Game::new(&config, &mut rng).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config, args.wide);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        SessionEnd::Finished(Outcome::Won) => println!("You made it across."),
        SessionEnd::Finished(Outcome::Lost) => println!("Out of lives."),
        SessionEnd::Quit => {}
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut Game,
    config: &GameConfig,
    wide: bool,
) -> Result<SessionEnd> {
    let mut input = TerminalInput::new();
    let mut ticker = Ticker::new(config.ticks_per_second);
    let view = GameView::new(if wide { 2 } else { 1 });

    info!("starting session at {} ticks/s", config.ticks_per_second);
    Session {
        input: &mut input,
        renderer: term,
        pacer: &mut ticker,
        view,
    }
    .run(game, config)
}
