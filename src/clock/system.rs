//! Wall-clock implementation.

use std::time::{Duration, Instant};

use super::{Clock, TimerEvent, TimerHandle, TimerQueue};

/// Clock driven by [`Instant`], one unit per `unit` of real time.
///
/// Polling is up to the host's loop; [`SystemClock::time_until_next`] says
/// how long it may sleep.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
    unit: Duration,
    queue: TimerQueue,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// One unit per second.
    #[must_use]
    pub fn new() -> Self {
        Self::with_unit(Duration::from_secs(1))
    }

    /// Custom unit length. Zero is treated as one nanosecond.
    #[must_use]
    pub fn with_unit(unit: Duration) -> Self {
        Self {
            origin: Instant::now(),
            unit: unit.max(Duration::from_nanos(1)),
            queue: TimerQueue::default(),
        }
    }

    /// Length of one unit.
    #[must_use]
    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Real time left before the earliest timer is due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        let deadline = self.next_deadline()?;
        let due_at = self.unit.saturating_mul(u32::try_from(deadline).unwrap_or(u32::MAX));
        Some(due_at.saturating_sub(self.origin.elapsed()))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let elapsed = self.origin.elapsed().as_nanos() / self.unit.as_nanos();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }

    fn schedule_repeating(&mut self, interval: u32, event: TimerEvent) -> TimerHandle {
        let now = self.now();
        self.queue.schedule(now, interval, true, event)
    }

    fn schedule_once(&mut self, delay: u32, event: TimerEvent) -> TimerHandle {
        let now = self.now();
        self.queue.schedule(now, delay, false, event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.cancel(handle);
    }

    fn poll_due(&mut self) -> Vec<TimerEvent> {
        let now = self.now();
        self.queue.drain_due(now)
    }

    fn next_deadline(&self) -> Option<u64> {
        self.queue.next_deadline()
    }
}
