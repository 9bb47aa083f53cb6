//! Per-tick input sources.
//!
//! The session loop calls [`InputSource::read`] once per tick, before the
//! game updates. A `Quit` anywhere in the tick's events wins over movement.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::Input;

/// Produces exactly one signal per tick.
pub trait InputSource {
    fn read(&mut self) -> Result<Input>;
}

/// Reads whatever the terminal has buffered since the last tick, without
/// blocking.
#[derive(Debug, Default)]
pub struct TerminalInput {
    pending: Vec<Event>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn read(&mut self) -> Result<Input> {
        self.pending.clear();
        while event::poll(Duration::ZERO)? {
            self.pending.push(event::read()?);
        }
        Ok(fold_events(self.pending.iter()))
    }
}

/// Reduce one tick's worth of terminal events to a single signal.
///
/// Quit short-circuits; otherwise the most recent directional key counts.
/// Key releases are ignored; auto-repeat counts as another press.
pub fn fold_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Input {
    let mut input = Input::None;
    for ev in events {
        let Event::Key(key) = ev else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if should_quit(*key) {
            return Input::Quit;
        }
        if let Some(dir) = handle_key_event(*key) {
            input = dir;
        }
    }
    input
}

/// Replays a fixed sequence, then reports `None` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Input>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self) -> Result<Input> {
        Ok(self.script.pop_front().unwrap_or_default())
    }
}
