//! Deterministic random number generation for rounds.
//!
//! A seeded [`QuizRng`] replays the same sequence of opposing moves and
//! starting targets, which is what lets tests and replays script a whole
//! game. Unseeded games draw their seed from OS entropy.
//!
//! ```
//! use rps_quiz::core::QuizRng;
//!
//! let mut a = QuizRng::new(7);
//! let mut b = QuizRng::new(7);
//! assert_eq!(a.random_move(), b.random_move());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::Move;

/// Deterministic RNG backing move and target generation.
///
/// Uses ChaCha8 for speed; the seed is kept so a game can report it.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A uniformly random move.
    pub fn random_move(&mut self) -> Move {
        Move::ALL[self.inner.gen_range(0..Move::ALL.len())]
    }

    /// A uniformly random move among the two that differ from `previous`.
    ///
    /// Picks an offset of 1 or 2 around the cycle, so it never loops.
    pub fn random_move_excluding(&mut self, previous: Move) -> Move {
        let offset = self.inner.gen_range(1..Move::ALL.len());
        Move::ALL[(previous.index() + offset) % Move::ALL.len()]
    }

    /// A fair coin flip.
    pub fn random_bool(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}
