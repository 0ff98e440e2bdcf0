//! Challenge orchestration
//!
//! Drives rounds through the configured difficulty sequence, drawing each
//! round's word from the bank and folding finished rounds into the session.

use super::round::{GuessError, GuessOutcome, Round};
use super::selector::WordBank;
use super::session::{Outcome, SessionError, SessionState, SessionSummary};
use crate::config::GameConfig;
use crate::core::Difficulty;
use rand::Rng;
use tracing::{info, warn};

/// A full play-through of the difficulty sequence
pub struct Challenge<'a, R: Rng> {
    bank: &'a WordBank,
    config: &'a GameConfig,
    rng: R,
    state: SessionState,
    round: Round,
}

impl<'a, R: Rng> Challenge<'a, R> {
    /// Start a new challenge at round 0
    ///
    /// # Examples
    /// ```
    /// use onchain_hangman::config::GameConfig;
    /// use onchain_hangman::game::{Challenge, Outcome, WordBank};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let bank = WordBank::embedded().unwrap();
    /// let config = GameConfig::default();
    /// let challenge = Challenge::start(&bank, &config, StdRng::seed_from_u64(1));
    ///
    /// assert_eq!(challenge.state().round_index(), 0);
    /// assert_eq!(challenge.state().outcome(), Outcome::InProgress);
    /// ```
    pub fn start(bank: &'a WordBank, config: &'a GameConfig, mut rng: R) -> Self {
        let state = SessionState::new(config.rounds());
        let round = draw_round(bank, config, 0, &mut rng);
        info!(rounds = config.rounds(), "challenge started");

        Self {
            bank,
            config,
            rng,
            state,
            round,
        }
    }

    /// Throw away all progress and start again at round 0
    pub fn restart(&mut self) {
        self.state = SessionState::new(self.config.rounds());
        self.round = draw_round(self.bank, self.config, 0, &mut self.rng);
        info!(rounds = self.config.rounds(), "challenge restarted");
    }

    /// Guess a letter in the current round
    ///
    /// A guess that ends the round folds its result into the session.
    ///
    /// # Errors
    ///
    /// Same as [`Round::guess`]; `GuessError::RoundOver` also covers guessing
    /// after the challenge ended.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let outcome = self.round.guess(input)?;

        if let GuessOutcome::Finished(result) = outcome {
            // Round was still open or `guess` would have returned RoundOver
            if let Err(err) = self.state.on_round_complete(result) {
                warn!(%err, "finished round could not be folded into the session");
            }
        }

        Ok(outcome)
    }

    /// Guess a single character; see [`Challenge::guess`]
    ///
    /// # Errors
    ///
    /// Same as [`Challenge::guess`].
    pub fn guess_char(&mut self, ch: char) -> Result<GuessOutcome, GuessError> {
        let mut buf = [0u8; 4];
        self.guess(ch.encode_utf8(&mut buf))
    }

    /// Reveal the current round's hint; see [`Round::reveal_hint`]
    pub fn reveal_hint(&mut self) -> Option<&str> {
        self.round.reveal_hint()
    }

    /// Start the next round after a win
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the current round is still in play or the
    /// challenge is over.
    pub fn advance(&mut self) -> Result<&Round, SessionError> {
        let index = self.state.advance()?;
        self.round = draw_round(self.bank, self.config, index, &mut self.rng);
        Ok(&self.round)
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.config
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub const fn can_advance(&self) -> bool {
        self.state.can_advance()
    }

    /// Tier of the round currently in play
    #[must_use]
    pub fn current_difficulty(&self) -> Difficulty {
        self.round.difficulty()
    }

    /// Final score and outcome, once the challenge has ended
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.state.summary()
    }
}

/// Draw the word for round `index` and start it
///
/// An index past the sequence (only possible with an empty sequence) draws
/// from the whole catalog.
fn draw_round<R: Rng + ?Sized>(
    bank: &WordBank,
    config: &GameConfig,
    index: usize,
    rng: &mut R,
) -> Round {
    let tier = config.sequence.get(index).copied();
    let entry = bank.choose(tier, rng);
    let difficulty = tier.unwrap_or_else(|| entry.difficulty());
    Round::start_for_tier(entry, difficulty, config.rules, rng)
}
