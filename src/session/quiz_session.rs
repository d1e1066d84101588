//! Quiz session: one engine, one clock, the view's events.

use tracing::debug;

use crate::clock::{Clock, ManualClock};
use crate::core::{ConfigError, Move, QuizConfig, RoundSnapshot};
use crate::rules::RoundEngine;

/// A running quiz as the presentation layer sees it.
///
/// The host builds one per game screen and hands the view a reference.
#[derive(Clone, Debug)]
pub struct QuizSession<C: Clock> {
    engine: RoundEngine,
    clock: C,
}

impl<C: Clock> QuizSession<C> {
    /// Create a session. Time does not run until the view appears.
    pub fn new(config: QuizConfig, clock: C) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: RoundEngine::new(config)?,
            clock,
        })
    }

    /// Wrap an existing engine.
    pub fn with_engine(engine: RoundEngine, clock: C) -> Self {
        Self { engine, clock }
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Mutable access to the engine, for scripted rounds.
    pub fn engine_mut(&mut self) -> &mut RoundEngine {
        &mut self.engine
    }

    /// The clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// What to render right now.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    /// The game screen became visible.
    pub fn on_view_appeared(&mut self) {
        self.engine.start_ticking(&mut self.clock);
    }

    /// The game screen went away. No timer fires into the game after this.
    pub fn on_view_disappeared(&mut self) {
        self.engine.stop_ticking(&mut self.clock);
    }

    /// The player pressed a move button.
    ///
    /// Returns `false` if the press was ignored.
    pub fn on_move_selected(&mut self, choice: Move) -> bool {
        self.engine.select(choice, &mut self.clock)
    }

    /// The player asked for a new game from the final score dialog.
    pub fn on_restart_requested(&mut self) {
        self.engine.restart(&mut self.clock);
    }

    /// Deliver every due timer event to the engine.
    ///
    /// Returns the number of events dispatched.
    pub fn pump(&mut self) -> usize {
        let events = self.clock.poll_due();
        let count = events.len();
        for event in events {
            self.engine.handle_timer(event, &mut self.clock);
        }
        if count > 0 {
            debug!(count, now = self.clock.now(), "timer events dispatched");
        }
        count
    }
}

impl QuizSession<ManualClock> {
    /// Session on a fresh [`ManualClock`].
    pub fn manual(config: QuizConfig) -> Result<Self, ConfigError> {
        Self::new(config, ManualClock::new())
    }

    /// Let `units` of logical time pass, one unit at a time.
    pub fn advance_time(&mut self, units: u64) {
        for _ in 0..units {
            self.clock.advance(1);
            self.pump();
        }
    }
}
