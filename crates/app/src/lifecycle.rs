//! Idempotent initialisation of page widgets.

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide "already initialised" flag.
///
/// Intended to live in a `static`; the first [`begin`](Self::begin) wins and
/// every later call is a no-op.
#[derive(Debug, Default)]
pub struct InitGuard {
    initialized: AtomicBool,
}

impl InitGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    /// Mark as initialised. Returns `true` only for the first caller.
    pub fn begin(&self, name: &str) -> bool {
        let first = !self.initialized.swap(true, Ordering::SeqCst);
        if !first {
            tracing::warn!(widget = name, "already initialised, skipping");
        }
        first
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }
}
