//! Clock port — source of the current time.

use barbershop_domain::time::{self, Timestamp};

/// Provides the current time. Swapped for a manual clock in tests.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
