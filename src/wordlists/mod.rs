//! Word catalog for hangman rounds
//!
//! Provides the embedded blockchain-term catalog compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{TERMS, TERMS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn terms_count_matches_const() {
        assert_eq!(TERMS.len(), TERMS_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(TERMS_COUNT, 36, "Expected 36 catalog terms");
    }

    #[test]
    fn terms_are_valid_words() {
        for &(word, _, hint) in TERMS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(!hint.is_empty(), "Word '{word}' has no hint");
        }
    }

    #[test]
    fn every_tier_is_represented() {
        for tier in Difficulty::ALL {
            assert!(
                TERMS.iter().any(|&(_, d, _)| d.parse::<Difficulty>().is_ok_and(|p| p == tier)),
                "No '{tier}' words in catalog"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = TERMS.iter().map(|&(w, _, _)| w).collect();
        assert_eq!(unique.len(), TERMS.len());
    }
}
