//! Round engine: judging, scoring, and round transitions.
//!
//! Per round the engine moves through
//! `AwaitingSelection -> Revealing -> (next round | GameOver)`.
//! A timeout skips `Revealing` and advances straight away.
//!
//! Operations that arrive out of order (a second selection, a tick after
//! the player answered, anything after game over) are ignored rather than
//! rejected; the view may double-fire events and the rules must hold anyway.

use tracing::{debug, info, trace};

use crate::clock::{Clock, TimerEvent, TimerHandle};
use crate::core::{ConfigError, Move, Outcome, QuizConfig, QuizRng, RoundPhase, RoundSnapshot, RoundState};

/// Owns the game state and applies the quiz rules to it.
///
/// Scheduling side effects go through the `clock` argument of each
/// operation; the engine keeps the handles so it can cancel what it armed.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: QuizConfig,
    state: RoundState,
    rng: QuizRng,
    /// Whether a view is showing the game and time should run.
    ticking: bool,
    tick_timer: Option<TimerHandle>,
    reveal_timer: Option<TimerHandle>,
}

impl RoundEngine {
    /// Start a game with a random first round.
    ///
    /// Time does not run until [`RoundEngine::start_ticking`].
    pub fn new(config: QuizConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(QuizRng::from_entropy, QuizRng::new);
        let opposing = rng.random_move();
        let target = if rng.random_bool() { Outcome::Win } else { Outcome::Lose };
        let state = RoundState::new(opposing, target, config.round_seconds);

        debug!(seed = rng.seed(), %opposing, %target, "game created");

        Ok(Self {
            config,
            state,
            rng,
            ticking: false,
            tick_timer: None,
            reveal_timer: None,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Read-only view of the state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Owned copy of the render inputs.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.snapshot(self.config.round_seconds)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    /// Seed of the move generator, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether time is currently running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// The final score, once the game is over.
    #[must_use]
    pub fn final_score(&self) -> Option<i64> {
        self.state.is_game_over().then_some(self.state.score)
    }

    /// Replace the current round's opposing move and target.
    ///
    /// Meant for scripted play. Ignored unless a round is awaiting its
    /// selection.
    pub fn set_round(&mut self, opposing: Move, target: Outcome) {
        if self.state.phase != RoundPhase::AwaitingSelection || self.state.selected_move.is_some() {
            return;
        }
        self.state.opposing_move = opposing;
        self.state.target_outcome = target;
    }

    // === Round transitions ===

    /// Open the next round, counting the current one as completed.
    ///
    /// Completing the last round ends the game instead. Ignored once the
    /// game is over; only [`RoundEngine::restart`] leaves that phase.
    pub fn new_round(&mut self, clock: &mut impl Clock) {
        if self.state.is_game_over() {
            debug!(question_count = self.state.question_count, "new round ignored after game over");
            return;
        }

        self.state.question_count += 1;
        if self.state.question_count >= self.config.max_rounds {
            self.state.pending_delta = 0;
            self.state.phase = RoundPhase::GameOver;
            self.cancel_timers(clock);
            info!(
                score = self.state.score,
                rounds = self.state.question_count,
                "game over"
            );
            return;
        }

        self.open_round(clock);
    }

    fn open_round(&mut self, clock: &mut impl Clock) {
        self.cancel_timers(clock);

        let state = &mut self.state;
        state.opposing_move = self.rng.random_move_excluding(state.opposing_move);
        state.target_outcome = state.target_outcome.toggled();
        state.selected_move = None;
        state.last_round_correct = None;
        state.pending_delta = 0;
        state.time_remaining = self.config.round_seconds;
        state.phase = RoundPhase::AwaitingSelection;
        state.round_id += 1;

        debug!(
            round_id = state.round_id,
            question_count = state.question_count,
            opposing = %state.opposing_move,
            target = %state.target_outcome,
            "round opened"
        );

        if self.ticking {
            self.arm_tick(clock);
        }
    }

    /// Judge the player's move.
    ///
    /// Returns `false` if the selection was ignored because the round
    /// already has one or is not accepting input.
    pub fn select(&mut self, choice: Move, clock: &mut impl Clock) -> bool {
        if self.state.phase != RoundPhase::AwaitingSelection || self.state.selected_move.is_some() {
            debug!(%choice, phase = ?self.state.phase, "selection ignored");
            return false;
        }

        let correct = self
            .state
            .target_outcome
            .is_satisfied_by(choice, self.state.opposing_move);

        self.state.selected_move = Some(choice);
        self.state.last_round_correct = Some(correct);
        self.state.pending_delta = if correct { 1 } else { -1 };
        self.state.phase = RoundPhase::Revealing;

        debug!(round_id = self.state.round_id, %choice, correct, "move judged");

        if let Some(handle) = self.tick_timer.take() {
            clock.cancel(handle);
        }
        if self.ticking {
            self.arm_reveal(clock);
        }
        true
    }

    /// One countdown unit elapsed.
    ///
    /// Reaching zero without a selection counts as a wrong answer and
    /// advances immediately.
    pub fn on_tick(&mut self, clock: &mut impl Clock) {
        if self.state.phase != RoundPhase::AwaitingSelection || self.state.selected_move.is_some() {
            return;
        }

        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        trace!(round_id = self.state.round_id, remaining = self.state.time_remaining, "tick");

        if self.state.time_remaining == 0 {
            debug!(round_id = self.state.round_id, "round timed out");
            self.state.last_round_correct = Some(false);
            self.state.pending_delta = -1;
            self.advance(clock);
        }
    }

    /// Apply the held-back score change and move on.
    ///
    /// Ends the game once the configured number of rounds is complete,
    /// otherwise opens the next round.
    pub fn advance(&mut self, clock: &mut impl Clock) {
        if self.state.is_game_over() {
            return;
        }

        self.state.score += self.state.pending_delta;
        self.state.pending_delta = 0;
        self.new_round(clock);
    }

    /// Start a new game, keeping the move generator running.
    pub fn restart(&mut self, clock: &mut impl Clock) {
        info!(previous_score = self.state.score, "game restarted");
        self.state.score = 0;
        self.state.question_count = 0;
        self.open_round(clock);
    }

    // === Time ===

    /// The view appeared: let time run for the current phase.
    ///
    /// A reveal interrupted by [`RoundEngine::stop_ticking`] restarts with
    /// its full delay.
    pub fn start_ticking(&mut self, clock: &mut impl Clock) {
        if self.ticking {
            return;
        }
        self.ticking = true;

        match self.state.phase {
            RoundPhase::AwaitingSelection => self.arm_tick(clock),
            RoundPhase::Revealing => self.arm_reveal(clock),
            RoundPhase::GameOver => {}
        }
    }

    /// The view went away: cancel every timer so nothing fires into a
    /// torn-down game.
    pub fn stop_ticking(&mut self, clock: &mut impl Clock) {
        self.ticking = false;
        self.cancel_timers(clock);
    }

    /// Dispatch a fired timer.
    ///
    /// Events from an earlier round, or for a phase the round has left,
    /// are dropped.
    pub fn handle_timer(&mut self, event: TimerEvent, clock: &mut impl Clock) {
        if event.round_id() != self.state.round_id {
            debug!(?event, current = self.state.round_id, "stale timer ignored");
            return;
        }

        match event {
            TimerEvent::Tick { .. } => self.on_tick(clock),
            TimerEvent::Reveal { .. } => {
                if self.state.phase != RoundPhase::Revealing {
                    debug!(?event, phase = ?self.state.phase, "reveal ignored");
                    return;
                }
                self.reveal_timer = None;
                self.advance(clock);
            }
        }
    }

    fn arm_tick(&mut self, clock: &mut impl Clock) {
        if let Some(handle) = self.tick_timer.take() {
            clock.cancel(handle);
        }
        let event = TimerEvent::Tick { round_id: self.state.round_id };
        self.tick_timer = Some(clock.schedule_repeating(1, event));
    }

    fn arm_reveal(&mut self, clock: &mut impl Clock) {
        if let Some(handle) = self.reveal_timer.take() {
            clock.cancel(handle);
        }
        let event = TimerEvent::Reveal { round_id: self.state.round_id };
        self.reveal_timer = Some(clock.schedule_once(self.config.reveal_seconds, event));
    }

    fn cancel_timers(&mut self, clock: &mut impl Clock) {
        for handle in [self.tick_timer.take(), self.reveal_timer.take()].into_iter().flatten() {
            clock.cancel(handle);
        }
    }
}
