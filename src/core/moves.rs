//! Moves and target outcomes.
//!
//! The three moves form a cycle: Rock beats Scissor, Scissor beats Paper,
//! Paper beats Rock. Every move therefore has exactly one winning counter
//! (the move that defeats it) and one losing counter (the move it defeats).

use serde::{Deserialize, Serialize};

/// A rock-paper-scissor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Paper,
    Rock,
    Scissor,
}

impl Move {
    /// All moves, in the order the game lays out its buttons.
    pub const ALL: [Move; 3] = [Move::Paper, Move::Rock, Move::Scissor];

    /// The move that defeats `self`.
    #[must_use]
    pub const fn winning_counter(self) -> Move {
        match self {
            Move::Paper => Move::Scissor,
            Move::Rock => Move::Paper,
            Move::Scissor => Move::Rock,
        }
    }

    /// The move that `self` defeats.
    #[must_use]
    pub const fn losing_counter(self) -> Move {
        match self {
            Move::Paper => Move::Rock,
            Move::Rock => Move::Scissor,
            Move::Scissor => Move::Paper,
        }
    }

    /// Does `self` defeat `other`?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.losing_counter() == other
    }

    /// Index into [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Paper => 0,
            Move::Rock => 1,
            Move::Scissor => 2,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Paper => "Paper",
            Move::Rock => "Rock",
            Move::Scissor => "Scissor",
        }
    }

    /// Glyph shown on the move's button.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Move::Paper => "✋",
            Move::Rock => "✊",
            Move::Scissor => "✌️",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The relationship the player must achieve against the opposing move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// The other outcome.
    #[must_use]
    pub const fn toggled(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }

    /// The single move that achieves this outcome against `opposing`.
    #[must_use]
    pub const fn counter_to(self, opposing: Move) -> Move {
        match self {
            Outcome::Win => opposing.winning_counter(),
            Outcome::Lose => opposing.losing_counter(),
        }
    }

    /// Does playing `player` against `opposing` achieve this outcome?
    #[must_use]
    pub fn is_satisfied_by(self, player: Move, opposing: Move) -> bool {
        self.counter_to(opposing) == player
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        }
    }

    /// Glyph shown next to the target.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Outcome::Win => "😎",
            Outcome::Lose => "😵‍💫",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
