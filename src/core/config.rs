//! Quiz configuration.
//!
//! The stock game uses fixed timings: ten seconds to answer, a three
//! second reveal and ten rounds. `QuizConfig::default()` reproduces them;
//! hosts may override any of them through the builder methods.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds the player has to pick a move.
pub const ROUND_SECONDS: u32 = 10;

/// Seconds the judged answer stays on screen before the next round.
pub const REVEAL_SECONDS: u32 = 3;

/// Rounds in one game.
pub const MAX_ROUNDS: u32 = 10;

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("round_seconds must be at least 1")]
    ZeroRoundSeconds,

    #[error("reveal_seconds must be at least 1")]
    ZeroRevealSeconds,

    #[error("max_rounds must be at least 1")]
    ZeroMaxRounds,
}

/// Complete quiz configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Countdown length per round, in clock units.
    pub round_seconds: u32,

    /// Delay between a selection and the next round, in clock units.
    pub reveal_seconds: u32,

    /// Completed rounds after which the game ends.
    pub max_rounds: u32,

    /// RNG seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            reveal_seconds: REVEAL_SECONDS,
            max_rounds: MAX_ROUNDS,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Set the countdown length.
    #[must_use]
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds;
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_seconds(mut self, seconds: u32) -> Self {
        self.reveal_seconds = seconds;
        self
    }

    /// Set the number of rounds per game.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_seconds == 0 {
            return Err(ConfigError::ZeroRoundSeconds);
        }
        if self.reveal_seconds == 0 {
            return Err(ConfigError::ZeroRevealSeconds);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.round_seconds, 10);
        assert_eq!(config.reveal_seconds, 3);
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = QuizConfig::default()
            .with_round_seconds(5)
            .with_reveal_seconds(1)
            .with_max_rounds(3)
            .with_seed(123);

        assert_eq!(config.round_seconds, 5);
        assert_eq!(config.reveal_seconds, 1);
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            QuizConfig::default().with_round_seconds(0).validate(),
            Err(ConfigError::ZeroRoundSeconds)
        );
        assert_eq!(
            QuizConfig::default().with_reveal_seconds(0).validate(),
            Err(ConfigError::ZeroRevealSeconds)
        );
        assert_eq!(
            QuizConfig::default().with_max_rounds(0).validate(),
            Err(ConfigError::ZeroMaxRounds)
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ConfigError::ZeroMaxRounds.to_string(),
            "max_rounds must be at least 1"
        );
    }

    #[test]
    fn test_serialization() {
        let config = QuizConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_seed_defaults_when_missing() {
        let json = r#"{"round_seconds":10,"reveal_seconds":3,"max_rounds":10}"#;
        let config: QuizConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, QuizConfig::default());
    }
}
