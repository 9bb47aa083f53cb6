//! Fixed-rate frame pacing.
//!
//! [`Ticker`] implements [`FramePacer::wait`], which blocks the calling
//! loop until the next tick boundary.
//! Deadlines advance by whole intervals so the long-run rate stays exact;
//! if the loop falls more than one interval behind, the schedule restarts
//! from now instead of bursting to catch up.

use std::thread;
use std::time::{Duration, Instant};

/// Blocks the session loop until the next tick boundary.
pub trait FramePacer {
    fn wait(&mut self);
    fn set_rate(&mut self, ticks_per_second: u32);
}

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// A ticker firing `ticks_per_second` times per second (minimum 1).
    pub fn new(ticks_per_second: u32) -> Self {
        let interval = interval_for(ticks_per_second);
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next boundary, measured at `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next + self.interval < now {
            self.next = now + self.interval;
        }
    }
}

impl FramePacer for Ticker {
    fn wait(&mut self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }

    /// Switch rate; the next tick is one new interval from now.
    fn set_rate(&mut self, ticks_per_second: u32) {
        self.interval = interval_for(ticks_per_second);
        self.next = Instant::now() + self.interval;
    }
}

fn interval_for(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
