//! Keystroke debouncing for the company lookup
//!
//! Each query change replaces the pending value and pushes the deadline out
//! by the full window; the event-loop tick polls for a settled query. This
//! guarantees at most one lookup request per burst of edits, for the final
//! value only.

use std::time::{Duration, Instant};

/// Debounce timer over the live query text
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::from_millis(window_ms),
            pending: None,
        }
    }

    /// Schedule a lookup for `query`, replacing any not-yet-settled value
    pub fn schedule(&mut self, query: String) {
        self.pending = Some(Pending {
            query,
            deadline: Instant::now() + self.window,
        });
    }

    /// Drop the pending value without firing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// True while a scheduled query has not settled yet
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the settled query, if its quiet period has elapsed
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
