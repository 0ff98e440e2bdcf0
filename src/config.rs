//! Game configuration
//!
//! Scoring constants and the challenge's difficulty sequence, fixed for the
//! lifetime of a challenge.

use crate::core::Difficulty;

/// Most incorrect guesses a round can allow; only 26 letters exist
pub const MAX_LIVES: u32 = 26;

/// Base points awarded for winning a round, by tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPoints {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl TierPoints {
    #[must_use]
    pub const fn for_tier(self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for TierPoints {
    fn default() -> Self {
        Self {
            easy: 100,
            medium: 200,
            hard: 500,
        }
    }
}

/// Rules governing a single round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRules {
    /// Incorrect guesses allowed before the round is lost
    pub max_incorrect: u32,
    pub points: TierPoints,
    /// Bonus per unused life on a win
    pub bonus_per_life: u32,
    /// Applied to a win when the descriptive hint was never revealed
    pub no_hint_multiplier: f64,
    /// Reveal one random letter for free when the round starts
    pub free_letter: bool,
}

impl RoundRules {
    /// Score for a won round
    ///
    /// `base + bonus_per_life * lives_remaining`, multiplied (and floored) by
    /// `no_hint_multiplier` when the hint was not used.
    ///
    /// # Examples
    /// ```
    /// use onchain_hangman::config::RoundRules;
    /// use onchain_hangman::core::Difficulty;
    ///
    /// let rules = RoundRules::default();
    /// assert_eq!(rules.round_score(Difficulty::Easy, 0, false), 240);
    /// assert_eq!(rules.round_score(Difficulty::Easy, 0, true), 160);
    /// ```
    #[must_use]
    pub fn round_score(&self, difficulty: Difficulty, incorrect: u32, hint_revealed: bool) -> u32 {
        let lives_remaining = self.max_incorrect.saturating_sub(incorrect);
        let raw = self
            .points
            .for_tier(difficulty)
            .saturating_add(self.bonus_per_life.saturating_mul(lives_remaining));

        if hint_revealed {
            raw
        } else {
            // Float-to-int `as` saturates at u32::MAX
            (f64::from(raw) * self.no_hint_multiplier).floor() as u32
        }
    }
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            max_incorrect: 6,
            points: TierPoints::default(),
            bonus_per_life: 10,
            no_hint_multiplier: 1.5,
            free_letter: true,
        }
    }
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("difficulty sequence must contain at least one round")]
    EmptySequence,
    #[error("at least one incorrect guess must be allowed")]
    NoLives,
    #[error("at most {MAX_LIVES} incorrect guesses can be allowed, got {0}")]
    TooManyLives(u32),
    #[error("no-hint multiplier must be at least 1.0, got {0}")]
    MultiplierBelowOne(f64),
}

/// Full challenge configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rules: RoundRules,
    /// Tier of each round, in play order
    pub sequence: Vec<Difficulty>,
}

impl GameConfig {
    /// The reference challenge: two easy, three medium, three hard rounds
    pub const DEFAULT_SEQUENCE: [Difficulty; 8] = [
        Difficulty::Easy,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Medium,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Hard,
        Difficulty::Hard,
    ];

    #[must_use]
    pub fn new(rules: RoundRules, sequence: Vec<Difficulty>) -> Self {
        Self { rules, sequence }
    }

    /// Number of rounds in a full clear
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.sequence.len()
    }

    /// Check the configuration can drive a challenge
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the sequence is empty, the miss limit is outside
    /// `1..=MAX_LIVES`, or the no-hint multiplier would reduce scores.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if self.rules.max_incorrect == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.rules.max_incorrect > MAX_LIVES {
            return Err(ConfigError::TooManyLives(self.rules.max_incorrect));
        }
        if self.rules.no_hint_multiplier.is_nan() || self.rules.no_hint_multiplier < 1.0 {
            return Err(ConfigError::MultiplierBelowOne(self.rules.no_hint_multiplier));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(RoundRules::default(), Self::DEFAULT_SEQUENCE.to_vec())
    }
}
