//! # rps-quiz
//!
//! Round engine for a timed rock-paper-scissor quiz.
//!
//! Each round shows an opposing move and a target outcome (Win or Lose).
//! The player has a short countdown to pick the move that achieves the
//! target. A right answer scores +1, a wrong answer or a timeout -1, and
//! the game ends after a fixed number of rounds.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: `RoundEngine` is the only writer of
//!    `RoundState`. Views read snapshots and send events.
//!
//! 2. **Time is injected**: timers go through the `Clock` trait. Tests and
//!    replays use `ManualClock`; a real host uses `SystemClock`.
//!
//! 3. **Late input is harmless**: double presses, ticks after an answer and
//!    timers from a finished round are ignored, not errors.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, RNG, configuration, state
//! - `clock`: Scheduling trait and clock implementations
//! - `rules`: The round engine
//! - `session`: Presentation boundary owning engine and clock

pub mod core;
pub mod clock;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Move, Outcome, QuizConfig, QuizRng,
    RoundPhase, RoundSnapshot, RoundState,
    MAX_ROUNDS, REVEAL_SECONDS, ROUND_SECONDS,
};

pub use crate::clock::{Clock, ManualClock, SystemClock, TimerEvent, TimerHandle};

pub use crate::rules::RoundEngine;

pub use crate::session::QuizSession;
