//! Scheduling seam between the round engine and real or simulated time.
//!
//! The engine never sleeps or spawns. It asks a [`Clock`] for two kinds of
//! timers:
//! - a repeating countdown tick, one unit apart
//! - a one-shot reveal delay after a selection
//!
//! Timers are plain data ([`TimerEvent`]). Whoever owns the engine polls the
//! clock and feeds due events back in, so the engine stays the only thing
//! that mutates its state.
//!
//! ## Example
//!
//! ```
//! use rps_quiz::clock::{Clock, ManualClock, TimerEvent};
//!
//! let mut clock = ManualClock::new();
//! let tick = clock.schedule_repeating(1, TimerEvent::Tick { round_id: 0 });
//!
//! clock.advance(2);
//! assert_eq!(clock.poll_due().len(), 2);
//!
//! clock.cancel(tick);
//! clock.advance(5);
//! assert!(clock.poll_due().is_empty());
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

use serde::{Deserialize, Serialize};

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a timer delivers when it fires.
///
/// Both variants name the round that scheduled them. A round that has
/// already ended ignores its leftovers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// One countdown unit elapsed.
    Tick { round_id: u64 },
    /// The reveal delay after a selection elapsed.
    Reveal { round_id: u64 },
}

impl TimerEvent {
    /// Round that scheduled this event.
    #[must_use]
    pub fn round_id(&self) -> u64 {
        match self {
            TimerEvent::Tick { round_id } | TimerEvent::Reveal { round_id } => *round_id,
        }
    }
}

/// A source of time that can run timers.
///
/// Durations are whole clock units. [`SystemClock`] maps one unit to a
/// wall-clock [`Duration`](std::time::Duration); [`ManualClock`] only moves
/// when told to.
pub trait Clock {
    /// Units elapsed since the clock was created.
    fn now(&self) -> u64;

    /// Fire `event` every `interval` units, starting `interval` from now.
    fn schedule_repeating(&mut self, interval: u32, event: TimerEvent) -> TimerHandle;

    /// Fire `event` once, `delay` units from now.
    fn schedule_once(&mut self, delay: u32, event: TimerEvent) -> TimerHandle;

    /// Stop a timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Take every event that has come due, in deadline order.
    ///
    /// A repeating timer that fell behind yields one event per missed
    /// interval, up to [`MAX_CATCH_UP`]; older intervals are skipped.
    fn poll_due(&mut self) -> Vec<TimerEvent>;

    /// Deadline of the earliest live timer.
    fn next_deadline(&self) -> Option<u64>;
}

/// Most events one repeating timer delivers from a single poll.
pub const MAX_CATCH_UP: u64 = 64;

#[derive(Clone, Debug)]
struct Timer {
    handle: TimerHandle,
    deadline: u64,
    interval: Option<u64>,
    event: TimerEvent,
}

/// Timer bookkeeping shared by the clock implementations.
#[derive(Clone, Debug, Default)]
struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerQueue {
    fn schedule(
        &mut self,
        now: u64,
        delay: u32,
        repeating: bool,
        event: TimerEvent,
    ) -> TimerHandle {
        // A zero interval would fire forever within a single poll.
        let delay = u64::from(delay.max(1));
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        self.timers.push(Timer {
            handle,
            deadline: now + delay,
            interval: repeating.then_some(delay),
            event,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    fn drain_due(&mut self, now: u64) -> Vec<TimerEvent> {
        for timer in &mut self.timers {
            let Some(interval) = timer.interval else {
                continue;
            };
            if timer.deadline <= now {
                let missed = (now - timer.deadline) / interval + 1;
                if missed > MAX_CATCH_UP {
                    timer.deadline += (missed - MAX_CATCH_UP) * interval;
                }
            }
        }

        let mut fired = Vec::new();

        loop {
            // Earliest deadline first; ties go to the older timer.
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.deadline <= now)
                .min_by_key(|(_, t)| (t.deadline, t.handle))
                .map(|(i, _)| i);

            let Some(index) = next else {
                break;
            };

            let timer = &mut self.timers[index];
            fired.push(timer.event);
            if let Some(interval) = timer.interval {
                timer.deadline += interval;
            } else {
                self.timers.swap_remove(index);
            }
        }

        fired
    }

    fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    fn len(&self) -> usize {
        self.timers.len()
    }
}
