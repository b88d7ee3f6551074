//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides the concrete implementation of the scheduling
//! contract defined in `thunder-core`. A host loop gives its
//! `LoadingView` a [`StdTickScheduler`], polls it each iteration with
//! [`StdTickScheduler::take_due`], and calls `LoadingView::tick` for every
//! due deadline.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thunder_core::TickScheduler;

/// Scheduler keeping at most one pending tick deadline.
///
/// Scheduling replaces the previous deadline and notifies the registered
/// waker, so an idle host loop can sleep until work arrives.
pub struct StdTickScheduler {
    deadline: Option<Instant>,
    waker: Option<Arc<dyn Fn() + Send + Sync + 'static>>,
}

impl StdTickScheduler {
    pub fn new() -> Self {
        Self {
            deadline: None,
            waker: None,
        }
    }

    /// Returns the pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consumes the deadline if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Registers a waker invoked whenever a new tick is scheduled.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    /// Clears any registered waker.
    pub fn clear_waker(&mut self) {
        self.waker = None;
    }

    fn wake(&self) {
        if let Some(waker) = &self.waker {
            waker();
        }
    }
}

impl Default for StdTickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdTickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdTickScheduler")
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl TickScheduler for StdTickScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
        self.wake();
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Clock implementation backed by [`std::time`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl StdClock {
    pub fn now(&self) -> Instant {
        Instant::now()
    }

    pub fn elapsed_millis(&self, since: Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }

    /// Returns the elapsed time as a [`Duration`] for convenience.
    pub fn elapsed(&self, since: Instant) -> Duration {
        since.elapsed()
    }
}
