//! Presentation boundary.
//!
//! A view renders [`QuizSession::snapshot`] and forwards its events:
//! move presses, appear/disappear and restart. The session owns the
//! engine and the clock, so there is no shared or global game state.
//!
//! ```
//! use rps_quiz::core::QuizConfig;
//! use rps_quiz::session::QuizSession;
//!
//! let mut session = QuizSession::manual(QuizConfig::default().with_seed(1)).unwrap();
//! session.on_view_appeared();
//! session.advance_time(10);
//!
//! // Nobody answered: the round timed out and cost a point.
//! assert_eq!(session.snapshot().score, -1);
//! assert_eq!(session.snapshot().question_count, 1);
//! ```

mod quiz_session;

pub use quiz_session::QuizSession;
