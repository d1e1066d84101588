//! Core quiz types: moves, RNG, configuration, state.
//!
//! Nothing in here schedules anything; time enters through
//! [`crate::clock`] and rules live in [`crate::rules`].

pub mod moves;
pub mod rng;
pub mod config;
pub mod state;

pub use moves::{Move, Outcome};
pub use rng::QuizRng;
pub use config::{ConfigError, QuizConfig, MAX_ROUNDS, REVEAL_SECONDS, ROUND_SECONDS};
pub use state::{RoundPhase, RoundSnapshot, RoundState};
