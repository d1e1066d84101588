//! Logical clock that only moves when told to.

use super::{Clock, TimerEvent, TimerHandle, TimerQueue};

/// Deterministic clock for tests and scripted play.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: u64,
    queue: TimerQueue,
}

impl ManualClock {
    /// A clock at time zero with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward. Due events wait for [`Clock::poll_due`].
    pub fn advance(&mut self, units: u64) {
        self.now += units;
    }

    /// Number of live timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.queue.len()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now
    }

    fn schedule_repeating(&mut self, interval: u32, event: TimerEvent) -> TimerHandle {
        self.queue.schedule(self.now, interval, true, event)
    }

    fn schedule_once(&mut self, delay: u32, event: TimerEvent) -> TimerHandle {
        self.queue.schedule(self.now, delay, false, event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.cancel(handle);
    }

    fn poll_due(&mut self) -> Vec<TimerEvent> {
        self.queue.drain_due(self.now)
    }

    fn next_deadline(&self) -> Option<u64> {
        self.queue.next_deadline()
    }
}
