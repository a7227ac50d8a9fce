//! Countdown before redirecting away from the "thanks" page.

use std::time::Duration;

/// Seconds shown when the page loads.
pub const DEFAULT_SECONDS: u32 = 7;

/// Delay between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Keep counting; display the remaining seconds.
    Remaining(u32),
    /// Counter reached zero: stop the interval and navigate.
    Redirect,
}

/// A counter decremented once per [`TICK_INTERVAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS)
    }
}

impl Countdown {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    #[must_use]
    pub fn remaining(self) -> u32 {
        self.remaining
    }

    /// Decrement the counter.
    pub fn tick(&mut self) -> Tick {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            Tick::Redirect
        } else {
            Tick::Remaining(self.remaining)
        }
    }
}
