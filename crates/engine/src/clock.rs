//! Fixed-period frame scheduling.
//!
//! The clock's only state is the deadline of the next frame. Callers wait on
//! input for [`FrameClock::timeout`] and render when [`FrameClock::poll_due`]
//! fires, which re-arms the deadline.

use std::time::{Duration, Instant};

use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    /// A clock whose first frame is due immediately.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, next: now }
    }

    /// The default ~60 FPS clock.
    pub fn start() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64), Instant::now())
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next frame is due (zero if overdue).
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// True if a frame is due; re-arms the deadline when it is.
    ///
    /// A clock that fell more than a period behind (slow terminal, suspended
    /// process) skips the missed frames instead of bursting to catch up.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}
