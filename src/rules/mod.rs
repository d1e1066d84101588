//! Quiz rules.
//!
//! [`RoundEngine`] owns the game state, judges selections, keeps score
//! and drives round transitions. It schedules through a
//! [`Clock`](crate::clock::Clock) passed to each call and never holds one.

pub mod engine;

pub use engine::RoundEngine;
