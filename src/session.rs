//! Session loop: pace, read input, tick, render, until quit, win or loss.
//!
//! The loop is generic over its three collaborators so it can run headless
//! in tests with a scripted input, an in-memory renderer and a no-op pacer.

use anyhow::Result;
use log::info;

use crate::core::{Game, GameConfig};
use crate::input::InputSource;
use crate::term::{FramePacer, FrameBuffer, GameView, Renderer};
use crate::types::{Input, Outcome};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Finished(Outcome),
}

pub struct Session<'a, I, R, P> {
    pub input: &'a mut I,
    pub renderer: &'a mut R,
    pub pacer: &'a mut P,
    pub view: GameView,
}

impl<I, R, P> Session<'_, I, R, P>
where
    I: InputSource,
    R: Renderer,
    P: FramePacer,
{
    /// Drive `game` until it ends or the player quits.
    ///
    /// A quit signal is honored before the tick's update runs. When the game
    /// ends, the final frame (with its banner) stays up for
    /// `config.end_pause_ticks` ticks at the slower end-of-session rate.
    pub fn run(&mut self, game: &mut Game, config: &GameConfig) -> Result<SessionEnd> {
        let mut fb = FrameBuffer::new(0, 0);

        loop {
            self.pacer.wait();

            let input = self.input.read()?;
            if input == Input::Quit {
                info!("quit after {} ticks", game.tick_count());
                return Ok(SessionEnd::Quit);
            }

            game.update(input);

            let viewport = self.renderer.viewport();
            self.view.render_into(&game.snapshot(), viewport, &mut fb);
            self.renderer.present(&mut fb)?;

            if let Some(outcome) = game.outcome() {
                info!("session over: {:?} after {} ticks", outcome, game.tick_count());
                self.pacer.set_rate(config.end_ticks_per_second);
                for _ in 0..config.end_pause_ticks {
                    self.pacer.wait();
                }
                return Ok(SessionEnd::Finished(outcome));
            }
        }
    }
}
