//! Round engine
//!
//! Tracks one attempt at guessing a word, from the first letter to a win or loss.

use super::evaluator::{LetterSet, is_win, mask_word, missing_letters};
use crate::config::RoundRules;
use crate::core::{Difficulty, WordEntry};
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::debug;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// Terminal result of a round, fixed when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won { score: u32 },
    Lost,
}

impl RoundResult {
    /// Points the round contributes to the challenge (0 when lost)
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Won { score } => score,
            Self::Lost => 0,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Effect of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; more letters remain hidden
    Correct,
    /// Letter is not in the word; the round continues
    Incorrect { lives_remaining: u32 },
    /// The guess ended the round
    Finished(RoundResult),
}

/// Rejected guess; the round is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Invalid input. Please enter a single letter.")]
    InvalidInput,
    #[error("You already guessed '{0}'. Try another letter.")]
    AlreadyGuessed(char),
    #[error("The round is already over.")]
    RoundOver,
}

/// A single hangman round
#[derive(Debug, Clone)]
pub struct Round {
    word: String,
    hint: String,
    difficulty: Difficulty,
    rules: RoundRules,
    guessed: LetterSet,
    free_letter: Option<char>,
    incorrect: u32,
    hint_revealed: bool,
    result: Option<RoundResult>,
}

impl Round {
    /// Start a round on `entry`, scored at the entry's own tier
    ///
    /// When `rules.free_letter` is set, one letter drawn uniformly from the
    /// word's positions is revealed up front. Exception: a word with fewer
    /// than two distinct letters gets no free letter, since revealing it
    /// would leave the round fully revealed yet still in play.
    pub fn start<R: Rng + ?Sized>(entry: &WordEntry, rules: RoundRules, rng: &mut R) -> Self {
        Self::start_for_tier(entry, entry.difficulty(), rules, rng)
    }

    /// Start a round scored at `difficulty` regardless of the entry's tier
    ///
    /// Used by the challenge, which scores by the tier it asked for even when
    /// the catalog had to fall back to another word.
    pub fn start_for_tier<R: Rng + ?Sized>(
        entry: &WordEntry,
        difficulty: Difficulty,
        rules: RoundRules,
        rng: &mut R,
    ) -> Self {
        let mut round = Self::unseeded(entry, difficulty, rules);
        if rules.free_letter {
            round.reveal_free_letter(rng);
        }
        debug!(
            word_len = round.word.len(),
            %difficulty,
            free_letter = ?round.free_letter,
            "round started"
        );
        round
    }

    /// Start a round with nothing revealed
    #[must_use]
    pub fn unseeded(entry: &WordEntry, difficulty: Difficulty, rules: RoundRules) -> Self {
        Self {
            word: entry.word().to_lowercase(),
            hint: entry.hint().to_string(),
            difficulty,
            rules,
            guessed: LetterSet::default(),
            free_letter: None,
            incorrect: 0,
            hint_revealed: false,
            result: None,
        }
    }

    fn reveal_free_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let distinct: LetterSet = self.word.chars().collect();
        if distinct.len() < 2 {
            return;
        }

        if let Some(letter) = self.word.chars().choose(rng) {
            self.guessed.insert(letter);
            self.free_letter = Some(letter);
        }
    }

    /// Reveal the descriptive hint
    ///
    /// Returns the hint text the first time it is revealed during play; later
    /// calls, or calls after the round ended, do nothing and return `None`.
    /// Revealing forfeits the no-hint score multiplier.
    pub fn reveal_hint(&mut self) -> Option<&str> {
        if self.is_over() || self.hint_revealed {
            return None;
        }
        self.hint_revealed = true;
        debug!("hint revealed");
        Some(&self.hint)
    }

    /// Guess a letter
    ///
    /// `input` must be exactly one ASCII letter; case is ignored.
    ///
    /// # Errors
    ///
    /// - `GuessError::InvalidInput` if `input` is not a single letter
    /// - `GuessError::AlreadyGuessed` if the letter was guessed before
    /// - `GuessError::RoundOver` if the round has already ended
    ///
    /// # Examples
    /// ```
    /// use onchain_hangman::config::RoundRules;
    /// use onchain_hangman::core::{Difficulty, WordEntry};
    /// use onchain_hangman::game::{GuessOutcome, Round, RoundResult};
    ///
    /// let entry = WordEntry::new("dao", "Community entity.", Difficulty::Medium).unwrap();
    /// let mut round = Round::unseeded(&entry, Difficulty::Medium, RoundRules::default());
    ///
    /// assert_eq!(round.guess("d"), Ok(GuessOutcome::Correct));
    /// assert_eq!(round.guess("A"), Ok(GuessOutcome::Correct));
    /// assert_eq!(
    ///     round.guess("o"),
    ///     Ok(GuessOutcome::Finished(RoundResult::Won { score: 390 }))
    /// );
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::RoundOver);
        }

        let mut chars = input.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(GuessError::InvalidInput);
        };
        if !ch.is_ascii_alphabetic() {
            return Err(GuessError::InvalidInput);
        }

        let letter = ch.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        if self.word.contains(letter) {
            if is_win(&self.word, &self.guessed) {
                let score =
                    self.rules
                        .round_score(self.difficulty, self.incorrect, self.hint_revealed);
                return Ok(GuessOutcome::Finished(self.finish(RoundResult::Won { score })));
            }
            return Ok(GuessOutcome::Correct);
        }

        self.incorrect += 1;
        if self.incorrect >= self.rules.max_incorrect {
            return Ok(GuessOutcome::Finished(self.finish(RoundResult::Lost)));
        }

        Ok(GuessOutcome::Incorrect {
            lives_remaining: self.lives_remaining(),
        })
    }

    /// Guess a single character
    ///
    /// # Errors
    ///
    /// Same as [`Round::guess`].
    pub fn guess_char(&mut self, ch: char) -> Result<GuessOutcome, GuessError> {
        let mut buf = [0u8; 4];
        self.guess(ch.encode_utf8(&mut buf))
    }

    fn finish(&mut self, result: RoundResult) -> RoundResult {
        self.result = Some(result);
        debug!(word = %self.word, ?result, incorrect = self.incorrect, "round finished");
        result
    }

    /// The target word; only meant to be shown once the round is over
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Hint text, whether or not it has been revealed
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub const fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn rules(&self) -> &RoundRules {
        &self.rules
    }

    #[must_use]
    pub const fn guessed(&self) -> &LetterSet {
        &self.guessed
    }

    /// Letter revealed for free at the start, if any
    #[must_use]
    pub const fn free_letter(&self) -> Option<char> {
        self.free_letter
    }

    #[must_use]
    pub const fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub const fn lives_remaining(&self) -> u32 {
        self.rules.max_incorrect.saturating_sub(self.incorrect)
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        match self.result {
            None => RoundStatus::Playing,
            Some(RoundResult::Won { .. }) => RoundStatus::Won,
            Some(RoundResult::Lost) => RoundStatus::Lost,
        }
    }

    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Masked display of the word, e.g. `"l e _ _ e _"`
    #[must_use]
    pub fn masked(&self) -> String {
        mask_word(&self.word, &self.guessed)
    }

    /// Distinct letters still hidden
    #[must_use]
    pub fn missing_letters(&self) -> Vec<char> {
        missing_letters(&self.word, &self.guessed)
    }

    /// Guessed letters that are not in the word, sorted
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        let mut wrong: Vec<char> = self
            .guessed
            .iter()
            .copied()
            .filter(|&ch| !self.word.contains(ch))
            .collect();
        wrong.sort_unstable();
        wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(word: &str, difficulty: Difficulty) -> WordEntry {
        WordEntry::new(word, "A test hint.", difficulty).unwrap()
    }

    fn unseeded(word: &str, difficulty: Difficulty) -> Round {
        Round::unseeded(&entry(word, difficulty), difficulty, RoundRules::default())
    }

    fn guess_all(round: &mut Round, letters: &str) -> Vec<Result<GuessOutcome, GuessError>> {
        letters.chars().map(|ch| round.guess_char(ch)).collect()
    }

    #[test]
    fn start_initial_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::start(&entry("wallet", Difficulty::Easy), RoundRules::default(), &mut rng);

        assert_eq!(round.word(), "wallet");
        assert_eq!(round.hint(), "A test hint.");
        assert_eq!(round.difficulty(), Difficulty::Easy);
        assert_eq!(round.incorrect(), 0);
        assert_eq!(round.lives_remaining(), 6);
        assert!(!round.hint_revealed());
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.result(), None);
    }

    #[test]
    fn start_reveals_exactly_one_letter_from_the_word() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let round = Round::start(
                &entry("blockchain", Difficulty::Medium),
                RoundRules::default(),
                &mut rng,
            );
            assert_eq!(round.guessed().len(), 1);
            let free = round.free_letter().unwrap();
            assert!(round.guessed().contains(&free));
            assert!(round.word().contains(free));
            assert_eq!(round.incorrect(), 0);
        }
    }

    #[test]
    fn start_free_letter_reveals_every_occurrence() {
        let mut rng = StdRng::seed_from_u64(8);
        let round = Round::start(&entry("ledger", Difficulty::Easy), RoundRules::default(), &mut rng);
        let free = round.free_letter().unwrap();

        let expected = round.word().chars().filter(|&c| c == free).count();
        let shown = round.masked().chars().filter(|&c| c == free).count();
        assert_eq!(shown, expected);
    }

    #[test]
    fn start_without_free_letter_rule() {
        let mut rng = StdRng::seed_from_u64(3);
        let rules = RoundRules {
            free_letter: false,
            ..RoundRules::default()
        };
        let round = Round::start(&entry("token", Difficulty::Easy), rules, &mut rng);

        assert!(round.guessed().is_empty());
        assert_eq!(round.free_letter(), None);
        assert_eq!(round.masked(), "_ _ _ _ _");
    }

    #[test]
    fn start_skips_free_letter_for_single_letter_words() {
        let mut rng = StdRng::seed_from_u64(4);
        let round = Round::start(&entry("aaa", Difficulty::Easy), RoundRules::default(), &mut rng);

        assert!(round.guessed().is_empty());
        assert_eq!(round.status(), RoundStatus::Playing);
    }

    #[test]
    fn start_for_tier_scores_at_requested_tier() {
        let mut rng = StdRng::seed_from_u64(5);
        let rules = RoundRules {
            free_letter: false,
            ..RoundRules::default()
        };
        let mut round =
            Round::start_for_tier(&entry("nft", Difficulty::Easy), Difficulty::Hard, rules, &mut rng);
        assert_eq!(round.difficulty(), Difficulty::Hard);

        let results = guess_all(&mut round, "nft");
        // floor((500 + 60) * 1.5)
        assert_eq!(
            results[2],
            Ok(GuessOutcome::Finished(RoundResult::Won { score: 840 }))
        );
    }

    #[test]
    fn abc_won_after_third_guess() {
        let mut round = unseeded("abc", Difficulty::Easy);

        assert_eq!(round.guess("a"), Ok(GuessOutcome::Correct));
        assert_eq!(round.guess("b"), Ok(GuessOutcome::Correct));
        assert_eq!(round.status(), RoundStatus::Playing);
        assert!(matches!(
            round.guess("c"),
            Ok(GuessOutcome::Finished(RoundResult::Won { .. }))
        ));
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.incorrect(), 0);
    }

    #[test]
    fn six_misses_lose_with_zero_score() {
        let mut round = unseeded("dao", Difficulty::Medium);

        let results = guess_all(&mut round, "bcefg");
        for (i, result) in results.iter().enumerate() {
            assert_eq!(
                *result,
                Ok(GuessOutcome::Incorrect {
                    lives_remaining: 5 - i as u32
                })
            );
        }

        assert_eq!(
            round.guess("h"),
            Ok(GuessOutcome::Finished(RoundResult::Lost))
        );
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.result().map(RoundResult::score), Some(0));
        assert_eq!(round.incorrect(), 6);
        assert_eq!(round.lives_remaining(), 0);
    }

    #[test]
    fn flawless_easy_win_without_hint_scores_240() {
        let mut round = unseeded("nft", Difficulty::Easy);
        let results = guess_all(&mut round, "nft");
        assert_eq!(
            results[2],
            Ok(GuessOutcome::Finished(RoundResult::Won { score: 240 }))
        );
    }

    #[test]
    fn flawless_easy_win_with_hint_scores_160() {
        let mut round = unseeded("nft", Difficulty::Easy);
        assert_eq!(round.reveal_hint(), Some("A test hint."));
        let results = guess_all(&mut round, "nft");
        assert_eq!(
            results[2],
            Ok(GuessOutcome::Finished(RoundResult::Won { score: 160 }))
        );
    }

    #[test]
    fn win_with_misses_counts_remaining_lives() {
        let mut round = unseeded("solana", Difficulty::Medium);
        guess_all(&mut round, "xyz");
        let results = guess_all(&mut round, "solan");
        // floor((200 + 30) * 1.5)
        assert_eq!(
            results[4],
            Ok(GuessOutcome::Finished(RoundResult::Won { score: 345 }))
        );
        assert_eq!(round.incorrect(), 3);
    }

    #[test]
    fn free_letter_does_not_forfeit_multiplier() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut round = Round::start(&entry("dao", Difficulty::Medium), RoundRules::default(), &mut rng);
        assert!(round.free_letter().is_some());

        let mut last = None;
        for ch in round.missing_letters() {
            last = Some(round.guess_char(ch));
        }
        // floor((200 + 60) * 1.5)
        assert_eq!(
            last,
            Some(Ok(GuessOutcome::Finished(RoundResult::Won { score: 390 })))
        );
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut round = unseeded("defi", Difficulty::Medium);
        assert_eq!(round.guess("D"), Ok(GuessOutcome::Correct));
        assert!(round.guessed().contains(&'d'));
        assert_eq!(round.guess("d"), Err(GuessError::AlreadyGuessed('d')));
    }

    #[test]
    fn invalid_input_leaves_state_unchanged() {
        let mut round = unseeded("mining", Difficulty::Medium);

        for bad in ["", "ab", "1", " ", "!", "é", " m"] {
            assert_eq!(round.guess(bad), Err(GuessError::InvalidInput), "input {bad:?}");
        }
        assert!(round.guessed().is_empty());
        assert_eq!(round.incorrect(), 0);
        assert_eq!(round.status(), RoundStatus::Playing);
    }

    #[test]
    fn duplicate_guess_changes_nothing() {
        let mut round = unseeded("oracle", Difficulty::Medium);
        round.guess("z").unwrap();
        round.guess("o").unwrap();

        let guessed_before = round.guessed().len();
        let incorrect_before = round.incorrect();

        assert_eq!(round.guess("z"), Err(GuessError::AlreadyGuessed('z')));
        assert_eq!(round.guess("o"), Err(GuessError::AlreadyGuessed('o')));
        assert_eq!(round.guessed().len(), guessed_before);
        assert_eq!(round.incorrect(), incorrect_before);
        assert_eq!(round.status(), RoundStatus::Playing);
    }

    #[test]
    fn duplicate_of_free_letter_is_rejected() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut round = Round::start(&entry("bitcoin", Difficulty::Easy), RoundRules::default(), &mut rng);
        let free = round.free_letter().unwrap();

        assert_eq!(round.guess_char(free), Err(GuessError::AlreadyGuessed(free)));
        assert_eq!(round.incorrect(), 0);
    }

    #[test]
    fn guessing_after_round_over_is_rejected() {
        let mut round = unseeded("nft", Difficulty::Easy);
        guess_all(&mut round, "nft");
        assert_eq!(round.status(), RoundStatus::Won);

        assert_eq!(round.guess("z"), Err(GuessError::RoundOver));
        assert_eq!(round.incorrect(), 0);
        assert_eq!(round.guessed().len(), 3);
    }

    #[test]
    fn reveal_hint_is_idempotent() {
        let mut round = unseeded("oracle", Difficulty::Medium);
        assert_eq!(round.reveal_hint(), Some("A test hint."));
        assert!(round.hint_revealed());
        assert_eq!(round.reveal_hint(), None);
        assert!(round.hint_revealed());
        assert!(round.guessed().is_empty());
    }

    #[test]
    fn reveal_hint_after_round_over_is_noop() {
        let mut round = unseeded("nft", Difficulty::Easy);
        guess_all(&mut round, "nft");
        assert_eq!(round.reveal_hint(), None);
        assert!(!round.hint_revealed());
        assert_eq!(
            round.result(),
            Some(RoundResult::Won { score: 240 })
        );
    }

    #[test]
    fn wrong_letters_sorted() {
        let mut round = unseeded("dao", Difficulty::Medium);
        guess_all(&mut round, "zdxa");
        assert_eq!(round.wrong_letters(), vec!['x', 'z']);
        assert_eq!(round.missing_letters(), vec!['o']);
        assert_eq!(round.masked(), "d a _");
    }

    #[test]
    fn custom_max_incorrect() {
        let rules = RoundRules {
            max_incorrect: 2,
            ..RoundRules::default()
        };
        let mut round = Round::unseeded(&entry("dao", Difficulty::Medium), Difficulty::Medium, rules);
        assert_eq!(
            round.guess("x"),
            Ok(GuessOutcome::Incorrect { lives_remaining: 1 })
        );
        assert_eq!(round.guess("y"), Ok(GuessOutcome::Finished(RoundResult::Lost)));
    }

    #[test]
    fn round_result_score() {
        assert_eq!(RoundResult::Won { score: 42 }.score(), 42);
        assert_eq!(RoundResult::Lost.score(), 0);
        assert!(RoundResult::Won { score: 0 }.is_win());
        assert!(!RoundResult::Lost.is_win());
    }
}
