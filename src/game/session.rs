//! Session progression
//!
//! Score accumulation and outcome across the challenge's fixed round sequence.

use super::round::RoundResult;
use std::fmt;
use tracing::info;

/// Overall state of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// The final round of the sequence was won
    AllRoundsWon,
    /// Some round was lost; the challenge ends there
    RoundLost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Identifier used in share links and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InProgress => "inProgress",
            Self::AllRoundsWon => "allRoundsWon",
            Self::RoundLost => "roundLost",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Illegal session transition requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the challenge is over; start a new one")]
    ChallengeOver,
    #[error("the current round has not finished yet")]
    RoundInProgress,
    #[error("no round is in play")]
    NoRoundInPlay,
}

/// Final result of a finished challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total_score: u32,
    pub outcome: Outcome,
    pub rounds_cleared: usize,
    pub rounds: usize,
}

/// Progress through a challenge of `rounds` rounds
///
/// Each round goes through `on_round_complete` exactly once; after a win the
/// caller must `advance` before the next round is in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    rounds: usize,
    round_index: usize,
    total_score: u32,
    outcome: Outcome,
    round_open: bool,
}

impl SessionState {
    /// Fresh challenge with round 0 in play
    #[must_use]
    pub const fn new(rounds: usize) -> Self {
        Self {
            rounds,
            round_index: 0,
            total_score: 0,
            outcome: Outcome::InProgress,
            round_open: true,
        }
    }

    /// Fold a finished round into the session
    ///
    /// A loss ends the challenge without touching the score. A win adds its
    /// score, and ends the challenge if it was the last round.
    ///
    /// # Errors
    ///
    /// - `SessionError::ChallengeOver` if the challenge already ended
    /// - `SessionError::NoRoundInPlay` if the current round was already folded
    ///
    /// # Examples
    /// ```
    /// use onchain_hangman::game::{Outcome, RoundResult, SessionState};
    ///
    /// let mut session = SessionState::new(2);
    /// assert_eq!(session.on_round_complete(RoundResult::Won { score: 240 }), Ok(Outcome::InProgress));
    /// session.advance().unwrap();
    /// assert_eq!(session.on_round_complete(RoundResult::Lost), Ok(Outcome::RoundLost));
    /// assert_eq!(session.total_score(), 240);
    /// ```
    pub fn on_round_complete(&mut self, result: RoundResult) -> Result<Outcome, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::ChallengeOver);
        }
        if !self.round_open {
            return Err(SessionError::NoRoundInPlay);
        }
        self.round_open = false;

        match result {
            RoundResult::Lost => {
                self.outcome = Outcome::RoundLost;
            }
            RoundResult::Won { score } => {
                self.total_score = self.total_score.saturating_add(score);
                if self.round_index + 1 >= self.rounds {
                    self.outcome = Outcome::AllRoundsWon;
                }
            }
        }

        if self.outcome.is_terminal() {
            info!(
                outcome = %self.outcome,
                total_score = self.total_score,
                rounds_cleared = self.rounds_cleared(),
                "challenge finished"
            );
        }

        Ok(self.outcome)
    }

    /// Whether `advance` would succeed
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        !self.outcome.is_terminal() && !self.round_open
    }

    /// Move to the next round after a win
    ///
    /// Returns the new round index.
    ///
    /// # Errors
    ///
    /// - `SessionError::ChallengeOver` if the challenge already ended
    /// - `SessionError::RoundInProgress` if the current round has not been folded
    pub fn advance(&mut self) -> Result<usize, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::ChallengeOver);
        }
        if self.round_open {
            return Err(SessionError::RoundInProgress);
        }
        self.round_index += 1;
        self.round_open = true;
        Ok(self.round_index)
    }

    /// Zero-based index of the current round
    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True while the current round still awaits its result
    #[must_use]
    pub const fn round_open(&self) -> bool {
        self.round_open
    }

    /// Rounds won so far
    #[must_use]
    pub fn rounds_cleared(&self) -> usize {
        let current_won = !self.round_open && self.outcome != Outcome::RoundLost;
        self.round_index + usize::from(current_won)
    }

    /// Final result, once the challenge has ended
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.outcome.is_terminal().then(|| SessionSummary {
            total_score: self.total_score,
            outcome: self.outcome,
            rounds_cleared: self.rounds_cleared(),
            rounds: self.rounds,
        })
    }
}
