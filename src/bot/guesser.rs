//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::game::{PLACEHOLDER, Round, WordBank};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// English letters from most to least common
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Pick an unguessed letter for `round`
    ///
    /// Returns `None` if every letter has been guessed.
    fn next_letter<R: Rng + ?Sized>(&self, round: &Round, rng: &mut R) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of the bot while keeping static dispatch.
pub enum GuesserType<'a> {
    /// Narrow the catalog by the masked word (default, strongest)
    Candidates(CandidateGuesser<'a>),
    /// Fixed English letter-frequency order
    Frequency(FrequencyGuesser),
    /// Uniformly random unguessed letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType<'_> {
    fn next_letter<R: Rng + ?Sized>(&self, round: &Round, rng: &mut R) -> Option<char> {
        match self {
            Self::Candidates(g) => g.next_letter(round, rng),
            Self::Frequency(g) => g.next_letter(round, rng),
            Self::Random(g) => g.next_letter(round, rng),
        }
    }
}

impl<'a> GuesserType<'a> {
    /// Create a guesser from its name
    ///
    /// Supported names: "candidates", "frequency", "random".
    /// Defaults to candidates if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, bank: &'a WordBank) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyGuesser),
            "random" => Self::Random(RandomGuesser),
            _ => Self::Candidates(CandidateGuesser::new(bank)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Candidates(_) => "candidates",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Guesses letters in English frequency order
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, round: &Round, _rng: &mut R) -> Option<char> {
        FREQUENCY_ORDER
            .chars()
            .find(|ch| !round.guessed().contains(ch))
    }
}

/// Guesses a random unguessed letter
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, round: &Round, rng: &mut R) -> Option<char> {
        let remaining: Vec<char> = ('a'..='z')
            .filter(|ch| !round.guessed().contains(ch))
            .collect();
        remaining.choose(rng).copied()
    }
}

/// Guesses the letter shared by the most catalog words still consistent with the board
///
/// Falls back to frequency order when no catalog word fits, e.g. for words
/// loaded from another catalog.
pub struct CandidateGuesser<'a> {
    bank: &'a WordBank,
}

impl<'a> CandidateGuesser<'a> {
    #[must_use]
    pub const fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }

    /// Catalog words that match the revealed letters and avoid every miss
    #[must_use]
    pub fn candidates(&self, round: &Round) -> Vec<&'a str> {
        let pattern: Vec<char> = round.masked().chars().step_by(2).collect();

        self.bank
            .entries()
            .iter()
            .map(|entry| entry.word())
            .filter(|word| word.chars().count() == pattern.len())
            .filter(|word| {
                word.chars().zip(&pattern).all(|(ch, &shown)| {
                    if shown == PLACEHOLDER {
                        !round.guessed().contains(&ch)
                    } else {
                        ch == shown
                    }
                })
            })
            .collect()
    }
}

impl Guesser for CandidateGuesser<'_> {
    fn next_letter<R: Rng + ?Sized>(&self, round: &Round, rng: &mut R) -> Option<char> {
        let candidates = self.candidates(round);

        // Count each unguessed letter once per candidate word
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in &candidates {
            let mut seen = Vec::new();
            for ch in word.chars() {
                if !round.guessed().contains(&ch) && !seen.contains(&ch) {
                    seen.push(ch);
                    *counts.entry(ch).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by(|(a_ch, a_count), (b_ch, b_count)| {
                a_count.cmp(b_count).then_with(|| b_ch.cmp(a_ch))
            })
            .map(|(ch, _)| ch)
            .or_else(|| FrequencyGuesser.next_letter(round, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoundRules;
    use crate::core::{Difficulty, WordEntry};
    use crate::game::{GuessOutcome, RoundStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(word: &str) -> Round {
        let entry = WordEntry::new(word, "hint", Difficulty::Easy).unwrap();
        Round::unseeded(&entry, Difficulty::Easy, RoundRules::default())
    }

    fn play_out<G: Guesser>(guesser: &G, round: &mut Round) {
        let mut rng = StdRng::seed_from_u64(17);
        while !round.is_over() {
            let ch = guesser.next_letter(round, &mut rng).unwrap();
            round.guess_char(ch).unwrap();
        }
    }

    #[test]
    fn frequency_guesser_follows_order() {
        let mut round = round("bitcoin");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(FrequencyGuesser.next_letter(&round, &mut rng), Some('e'));
        round.guess("e").unwrap();
        assert_eq!(FrequencyGuesser.next_letter(&round, &mut rng), Some('t'));
    }

    #[test]
    fn random_guesser_never_repeats() {
        let mut round = round("proofofstake");
        let mut rng = StdRng::seed_from_u64(2);

        while !round.is_over() {
            let ch = RandomGuesser.next_letter(&round, &mut rng).unwrap();
            assert!(!round.guessed().contains(&ch));
            round.guess_char(ch).unwrap();
        }
    }

    #[test]
    fn random_guesser_exhausts_alphabet() {
        let rules = RoundRules {
            max_incorrect: 30,
            ..RoundRules::default()
        };
        let entry = WordEntry::new("zz", "hint", Difficulty::Easy).unwrap();
        let mut round = Round::unseeded(&entry, Difficulty::Easy, rules);
        let mut rng = StdRng::seed_from_u64(3);

        for ch in 'a'..='y' {
            round.guess_char(ch).unwrap();
        }
        assert_eq!(RandomGuesser.next_letter(&round, &mut rng), Some('z'));
        round.guess("z").unwrap();
        assert_eq!(RandomGuesser.next_letter(&round, &mut rng), None);
    }

    #[test]
    fn candidates_filter_by_length_and_mask() {
        let bank = WordBank::embedded().unwrap();
        let guesser = CandidateGuesser::new(&bank);
        let mut round = round("mining");

        let initial = guesser.candidates(&round);
        assert!(initial.iter().all(|w| w.len() == 6));
        assert!(initial.contains(&"mining"));
        assert!(initial.contains(&"wallet"));

        assert_eq!(round.guess("i"), Ok(GuessOutcome::Correct));
        assert_eq!(guesser.candidates(&round), vec!["mining"]);
    }

    #[test]
    fn candidates_exclude_missed_letters() {
        let bank = WordBank::embedded().unwrap();
        let guesser = CandidateGuesser::new(&bank);
        let mut round = round("ledger");

        round.guess("w").unwrap();
        let remaining = guesser.candidates(&round);
        assert!(!remaining.contains(&"wallet"));
        assert!(remaining.contains(&"ledger"));
    }

    #[test]
    fn candidate_guesser_wins_catalog_words() {
        let bank = WordBank::embedded().unwrap();
        let guesser = CandidateGuesser::new(&bank);

        for entry in bank.entries() {
            let mut round = Round::unseeded(entry, entry.difficulty(), RoundRules::default());
            play_out(&guesser, &mut round);
            assert_eq!(round.status(), RoundStatus::Won, "lost on '{}'", entry.word());
        }
    }

    #[test]
    fn candidate_guesser_falls_back_for_unknown_words() {
        let bank = WordBank::embedded().unwrap();
        let guesser = CandidateGuesser::new(&bank);
        let round = round("qzqzqzqzqzqzqzqzqz");
        let mut rng = StdRng::seed_from_u64(4);

        assert!(guesser.candidates(&round).is_empty());
        assert_eq!(guesser.next_letter(&round, &mut rng), Some('e'));
    }

    #[test]
    fn guesser_type_from_name() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(GuesserType::from_name("frequency", &bank).name(), "frequency");
        assert_eq!(GuesserType::from_name("random", &bank).name(), "random");
        assert_eq!(GuesserType::from_name("candidates", &bank).name(), "candidates");
        assert_eq!(GuesserType::from_name("unknown", &bank).name(), "candidates");
    }
}
