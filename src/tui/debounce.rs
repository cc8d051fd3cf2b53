//! Trailing-edge debounce for search input.

use std::time::{Duration, Instant};

/// Coalesces bursts of events into one trailing action.
///
/// Each [`schedule`](Self::schedule) pushes the deadline out by the window,
/// cancelling whatever was pending. [`fire`](Self::fire) reports true exactly
/// once, after the input has been quiet for the full window.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Records an input event at `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Whether an action is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending action without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true once when the pending deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
