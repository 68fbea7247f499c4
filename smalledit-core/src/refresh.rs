//! Trailing-edge debounce for gutter and status-bar refreshes
//!
//! The event loop calls [`RefreshCoordinator::notify_changed`] on every
//! keystroke, scroll or resize and [`RefreshCoordinator::poll`] whenever it
//! wakes up. Time is passed in explicitly so the loop owns the clock.

use std::time::{Duration, Instant};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);
pub const DEFAULT_QUIET_THRESHOLD: Duration = Duration::from_millis(45);

#[derive(Debug, Clone)]
pub struct RefreshCoordinator {
    delay: Duration,
    quiet_threshold: Duration,
    last_request: Option<Instant>,
    deadline: Option<Instant>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::with_timing(DEFAULT_DELAY, DEFAULT_QUIET_THRESHOLD)
    }

    pub fn with_timing(delay: Duration, quiet_threshold: Duration) -> Self {
        Self {
            delay,
            quiet_threshold,
            last_request: None,
            deadline: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the next [`poll`](Self::poll) could fire, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn notify_changed(&mut self, now: Instant) {
        self.last_request = Some(now);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
        }
    }

    /// Returns `true` exactly when the caller should recompute now.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let quiet_for = self
            .last_request
            .map_or(self.quiet_threshold, |last| now.saturating_duration_since(last));
        if quiet_for >= self.quiet_threshold {
            self.deadline = None;
            true
        } else {
            self.deadline = Some(now + self.delay);
            false
        }
    }
}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
