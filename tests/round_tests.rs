//! Round engine tests.
//!
//! These drive the engine directly, calling `select`, `on_tick` and
//! `advance` the way the timers would.

use rps_quiz::clock::ManualClock;
use rps_quiz::core::{Move, Outcome, QuizConfig, RoundPhase};
use rps_quiz::rules::RoundEngine;

fn engine(seed: u64) -> (RoundEngine, ManualClock) {
    let engine = RoundEngine::new(QuizConfig::default().with_seed(seed)).unwrap();
    (engine, ManualClock::new())
}

/// An engine whose game lasts long enough for many round openings.
fn long_engine(seed: u64) -> (RoundEngine, ManualClock) {
    let config = QuizConfig::default().with_seed(seed).with_max_rounds(u32::MAX);
    (RoundEngine::new(config).unwrap(), ManualClock::new())
}

/// Rock with a Win target is answered by Paper.
#[test]
fn test_rock_win_answered_by_paper() {
    let (mut engine, mut clock) = engine(1);
    engine.set_round(Move::Rock, Outcome::Win);

    assert_eq!(Move::Rock.winning_counter(), Move::Paper);
    engine.select(Move::Paper, &mut clock);
    assert_eq!(engine.state().last_round_correct, Some(true));

    let before = engine.state().score;
    engine.advance(&mut clock);
    assert_eq!(engine.state().score, before + 1);
}

/// Rock with a Lose target is answered by Scissor, so Paper is wrong.
#[test]
fn test_rock_lose_paper_is_wrong() {
    let (mut engine, mut clock) = engine(2);
    engine.set_round(Move::Rock, Outcome::Lose);

    assert_eq!(Move::Rock.losing_counter(), Move::Scissor);
    engine.select(Move::Paper, &mut clock);
    assert_eq!(engine.state().last_round_correct, Some(false));

    engine.advance(&mut clock);
    assert_eq!(engine.state().score, -1);
}

/// A timeout costs a point and opens the next round without a reveal.
#[test]
fn test_timeout_skips_reveal() {
    let (mut engine, mut clock) = engine(3);

    for _ in 0..9 {
        engine.on_tick(&mut clock);
    }
    assert_eq!(engine.state().time_remaining, 1);
    assert_eq!(engine.phase(), RoundPhase::AwaitingSelection);

    engine.on_tick(&mut clock);

    let state = engine.state();
    assert_eq!(state.score, -1);
    assert_eq!(state.question_count, 1);
    assert_eq!(state.phase, RoundPhase::AwaitingSelection);
    assert_eq!(state.selected_move, None);
    assert_eq!(state.time_remaining, 10);
}

/// The opposing move never repeats across 1000 new rounds.
#[test]
fn test_no_immediate_repeat() {
    let (mut engine, mut clock) = long_engine(4);

    for _ in 0..1000 {
        let before = engine.state().opposing_move;
        engine.new_round(&mut clock);
        assert_ne!(engine.state().opposing_move, before);
    }
}

/// The target outcome alternates every round.
#[test]
fn test_target_alternates() {
    let (mut engine, mut clock) = long_engine(5);
    let mut previous = engine.state().target_outcome;

    for _ in 0..50 {
        engine.new_round(&mut clock);
        let current = engine.state().target_outcome;
        assert_ne!(current, previous);
        previous = current;
    }
}

/// Both targets alternate through answered and timed-out rounds alike.
#[test]
fn test_target_alternates_through_advance() {
    let (mut engine, mut clock) = engine(6);
    let first = engine.state().target_outcome;

    engine.select(Move::Rock, &mut clock);
    engine.advance(&mut clock);
    assert_eq!(engine.state().target_outcome, first.toggled());

    for _ in 0..10 {
        engine.on_tick(&mut clock);
    }
    assert_eq!(engine.state().target_outcome, first);
}

/// A full game of ten rounds ends, then ignores input until restart.
#[test]
fn test_full_game() {
    let (mut engine, mut clock) = engine(7);
    let mut expected = 0i64;

    for round in 0..10u32 {
        assert_eq!(engine.state().question_count, round);
        let state = engine.state();
        let right = state.target_outcome.counter_to(state.opposing_move);

        // Alternate right and wrong answers.
        if round % 2 == 0 {
            engine.select(right, &mut clock);
            expected += 1;
        } else {
            engine.select(right.winning_counter(), &mut clock);
            expected -= 1;
        }
        engine.advance(&mut clock);
    }

    assert!(engine.state().is_game_over());
    assert_eq!(engine.state().question_count, 10);
    assert_eq!(engine.final_score(), Some(expected));

    assert!(!engine.select(Move::Paper, &mut clock));
    engine.on_tick(&mut clock);
    assert_eq!(engine.final_score(), Some(expected));

    engine.restart(&mut clock);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().question_count, 0);
    assert!(!engine.state().is_game_over());
    assert!(engine.select(Move::Paper, &mut clock));
}

/// The last round's answer still counts towards the final score.
#[test]
fn test_last_round_scored() {
    let config = QuizConfig::default().with_seed(8).with_max_rounds(1);
    let mut engine = RoundEngine::new(config).unwrap();
    let mut clock = ManualClock::new();

    engine.set_round(Move::Scissor, Outcome::Lose);
    engine.select(Move::Paper, &mut clock);
    engine.advance(&mut clock);

    assert_eq!(engine.final_score(), Some(1));
}

/// Same seed, same answers, same game.
#[test]
fn test_deterministic_replay() {
    let (mut a, mut clock_a) = engine(99);
    let (mut b, mut clock_b) = engine(99);

    for _ in 0..10 {
        assert_eq!(a.snapshot(), b.snapshot());
        a.select(Move::Rock, &mut clock_a);
        b.select(Move::Rock, &mut clock_b);
        a.advance(&mut clock_a);
        b.advance(&mut clock_b);
    }

    assert_eq!(a.final_score(), b.final_score());
}

/// Shorter configured rounds time out sooner.
#[test]
fn test_custom_round_length() {
    let config = QuizConfig::default().with_seed(10).with_round_seconds(3);
    let mut engine = RoundEngine::new(config).unwrap();
    let mut clock = ManualClock::new();

    assert_eq!(engine.state().time_remaining, 3);
    for _ in 0..3 {
        engine.on_tick(&mut clock);
    }
    assert_eq!(engine.state().question_count, 1);
    assert_eq!(engine.state().time_remaining, 3);
}

/// Opening rounds directly still ends the game at the round limit, and a
/// finished game stays finished until restart.
#[test]
fn test_new_round_respects_game_over() {
    let (mut engine, mut clock) = engine(11);

    for _ in 0..10 {
        engine.new_round(&mut clock);
    }
    assert!(engine.state().is_game_over());
    assert_eq!(engine.state().question_count, 10);

    engine.new_round(&mut clock);
    assert!(!engine.select(Move::Rock, &mut clock));
    engine.advance(&mut clock);

    assert!(engine.state().is_game_over());
    assert_eq!(engine.state().question_count, 10);
    assert_eq!(engine.final_score(), Some(0));

    engine.restart(&mut clock);
    assert!(engine.select(Move::Rock, &mut clock));
}
