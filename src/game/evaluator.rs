//! Round evaluation
//!
//! Pure functions over a target word and the set of guessed letters.

use rustc_hash::FxHashSet;

/// Letters guessed so far in a round
pub type LetterSet = FxHashSet<char>;

/// Symbol shown for a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Render `word` with unguessed positions hidden
///
/// Positions are separated by single spaces. Every occurrence of a guessed
/// letter is revealed.
///
/// # Examples
/// ```
/// use onchain_hangman::game::{LetterSet, mask_word};
///
/// let guessed: LetterSet = ['e', 't'].into_iter().collect();
/// assert_eq!(mask_word("testnet", &guessed), "t e _ t _ e t");
/// ```
#[must_use]
pub fn mask_word(word: &str, guessed: &LetterSet) -> String {
    let mut masked = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            masked.push(' ');
        }
        masked.push(if guessed.contains(&ch) { ch } else { PLACEHOLDER });
    }
    masked
}

/// Check whether every distinct character of `word` has been guessed
#[must_use]
pub fn is_win(word: &str, guessed: &LetterSet) -> bool {
    word.chars().all(|ch| guessed.contains(&ch))
}

/// Distinct letters of `word` that are still hidden, sorted
#[must_use]
pub fn missing_letters(word: &str, guessed: &LetterSet) -> Vec<char> {
    let mut missing: Vec<char> = word
        .chars()
        .filter(|ch| !guessed.contains(ch))
        .collect::<LetterSet>()
        .into_iter()
        .collect();
    missing.sort_unstable();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn letters(s: &str) -> LetterSet {
        s.chars().collect()
    }

    #[test]
    fn mask_nothing_guessed() {
        assert_eq!(mask_word("dao", &LetterSet::default()), "_ _ _");
    }

    #[test]
    fn mask_reveals_every_occurrence() {
        assert_eq!(mask_word("staking", &letters("k")), "_ _ _ k _ _ _");
        assert_eq!(mask_word("ethereum", &letters("e")), "e _ _ e _ e _ _");
    }

    #[test]
    fn mask_fully_guessed() {
        assert_eq!(mask_word("nft", &letters("tfn")), "n f t");
    }

    #[test]
    fn mask_ignores_letters_not_in_word() {
        assert_eq!(mask_word("defi", &letters("xyzd")), "d _ _ _");
    }

    #[test]
    fn mask_empty_word() {
        assert_eq!(mask_word("", &letters("abc")), "");
    }

    #[test]
    fn mask_is_idempotent() {
        let guessed = letters("oi");
        assert_eq!(mask_word("bitcoin", &guessed), mask_word("bitcoin", &guessed));
    }

    #[test]
    fn is_win_requires_every_distinct_letter() {
        assert!(!is_win("ledger", &letters("led")));
        assert!(is_win("ledger", &letters("ledgr")));
        assert!(is_win("ledger", &letters("ledgrxyz")));
    }

    #[test]
    fn is_win_treats_non_alphabetic_as_ordinary() {
        assert!(!is_win("layer-2", &letters("layer")));
        assert!(is_win("layer-2", &letters("layer-2")));
    }

    #[test]
    fn missing_letters_sorted_and_distinct() {
        assert_eq!(missing_letters("halving", &letters("a")), vec!['g', 'h', 'i', 'l', 'n', 'v']);
        assert!(missing_letters("dao", &letters("oad")).is_empty());
    }

    #[test]
    fn win_iff_no_placeholder() {
        let mut rng = StdRng::seed_from_u64(7);
        let words = ["blockchain", "nft", "proofofstake", "governance", "ledger"];

        for word in words {
            for _ in 0..200 {
                let guessed: LetterSet = ('a'..='z').filter(|_| rng.random_bool(0.6)).collect();
                let masked = mask_word(word, &guessed);
                assert_eq!(
                    is_win(word, &guessed),
                    !masked.contains(PLACEHOLDER),
                    "word={word} masked={masked}"
                );
            }
        }
    }

    #[test]
    fn revealing_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(11);
        let word = "cryptocurrency";

        for _ in 0..100 {
            let base: LetterSet = ('a'..='z').filter(|_| rng.random_bool(0.3)).collect();
            let mut superset = base.clone();
            superset.extend(('a'..='z').filter(|_| rng.random_bool(0.3)));

            let before = mask_word(word, &base);
            let after = mask_word(word, &superset);
            for (b, a) in before.chars().zip(after.chars()) {
                if b != PLACEHOLDER {
                    assert_eq!(a, b);
                }
            }
        }
    }
}
