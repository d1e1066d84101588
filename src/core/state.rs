//! Round state and the read-only snapshot handed to the presentation.
//!
//! ## RoundState
//!
//! The single mutable record of a game, owned by
//! [`RoundEngine`](crate::rules::RoundEngine). Callers only ever see it
//! through `&RoundState`.
//!
//! ## RoundSnapshot
//!
//! An owned copy of everything a view renders, detached from the engine.

use serde::{Deserialize, Serialize};

use super::moves::{Move, Outcome};

/// Where the current round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for a move; the countdown is running.
    AwaitingSelection,
    /// A move was judged; the result is shown until the reveal delay elapses.
    Revealing,
    /// All rounds played. Only a restart leaves this phase.
    GameOver,
}

/// Mutable game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// Move the player plays against this round.
    pub opposing_move: Move,

    /// Whether the player must beat or lose to `opposing_move`.
    pub target_outcome: Outcome,

    /// The player's move this round, set at most once.
    pub selected_move: Option<Move>,

    /// Countdown units left this round.
    pub time_remaining: u32,

    /// Completed rounds.
    pub question_count: u32,

    /// Running total: +1 per correct answer, -1 per wrong answer or timeout.
    pub score: i64,

    /// Judgment of the current round, once there is one.
    pub last_round_correct: Option<bool>,

    /// Lifecycle phase.
    pub phase: RoundPhase,

    /// Increases every time a round opens. Timer events carry it.
    pub round_id: u64,

    /// Score change held back until the round advances.
    pub pending_delta: i64,
}

impl RoundState {
    /// State for a fresh game, showing its first round.
    #[must_use]
    pub fn new(opposing_move: Move, target_outcome: Outcome, round_seconds: u32) -> Self {
        Self {
            opposing_move,
            target_outcome,
            selected_move: None,
            time_remaining: round_seconds,
            question_count: 0,
            score: 0,
            last_round_correct: None,
            phase: RoundPhase::AwaitingSelection,
            round_id: 0,
            pending_delta: 0,
        }
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Copy out the render inputs.
    #[must_use]
    pub fn snapshot(&self, round_seconds: u32) -> RoundSnapshot {
        RoundSnapshot {
            opposing_move: self.opposing_move,
            target_outcome: self.target_outcome,
            selected_move: self.selected_move,
            time_remaining: self.time_remaining,
            round_seconds,
            score: self.score,
            question_count: self.question_count,
            last_round_correct: self.last_round_correct,
            game_over: self.is_game_over(),
            phase: self.phase,
        }
    }
}

/// What a view needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub opposing_move: Move,
    pub target_outcome: Outcome,
    pub selected_move: Option<Move>,
    pub time_remaining: u32,
    pub round_seconds: u32,
    pub score: i64,
    pub question_count: u32,
    pub last_round_correct: Option<bool>,
    pub game_over: bool,
    pub phase: RoundPhase,
}

impl RoundSnapshot {
    /// Feedback line under the move buttons.
    #[must_use]
    pub fn feedback(&self) -> Option<&'static str> {
        self.last_round_correct.map(|correct| {
            if correct {
                "Great move!"
            } else {
                "Bad move :("
            }
        })
    }

    /// Remaining share of the countdown, in `0.0..=1.0`.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.round_seconds == 0 {
            0.0
        } else {
            f64::from(self.time_remaining) / f64::from(self.round_seconds)
        }
    }

    /// At or past the halfway point of the countdown.
    #[must_use]
    pub fn is_time_low(&self) -> bool {
        self.time_remaining <= self.round_seconds / 2
    }

    /// Can the move buttons still be pressed?
    #[must_use]
    pub fn accepts_selection(&self) -> bool {
        self.phase == RoundPhase::AwaitingSelection && self.selected_move.is_none()
    }
}
