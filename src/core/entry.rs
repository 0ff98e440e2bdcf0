//! Catalog entry representation
//!
//! A `WordEntry` pairs a target word with its hint and difficulty tier.

use super::Difficulty;
use std::fmt;

/// One term in the word catalog
///
/// Entries are validated on construction: the word is lowercased and must be a
/// non-empty run of ASCII letters, and the hint must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
    difficulty: Difficulty,
}

/// Error type for invalid catalog entries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
    #[error("hint for '{0}' must not be empty")]
    MissingHint(String),
}

impl WordEntry {
    /// Create a new catalog entry
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - The word contains anything other than ASCII letters
    /// - The hint is blank
    ///
    /// # Examples
    /// ```
    /// use onchain_hangman::core::{Difficulty, WordEntry};
    ///
    /// let entry = WordEntry::new("Wallet", "Stores private keys.", Difficulty::Easy).unwrap();
    /// assert_eq!(entry.word(), "wallet");
    ///
    /// assert!(WordEntry::new("gas fee", "Transaction cost.", Difficulty::Easy).is_err());
    /// ```
    pub fn new(
        word: impl Into<String>,
        hint: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, WordError> {
        let word = word.into().to_lowercase();
        let hint = hint.into().trim().to_string();

        if word.is_empty() {
            return Err(WordError::Empty);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(word));
        }

        if hint.is_empty() {
            return Err(WordError::MissingHint(word));
        }

        Ok(Self {
            word,
            hint,
            difficulty,
        })
    }

    /// The target word, lowercase
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Descriptive hint shown on request
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("token", "A digital asset.", Difficulty::Easy).unwrap();
        assert_eq!(entry.word(), "token");
        assert_eq!(entry.hint(), "A digital asset.");
        assert_eq!(entry.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn entry_creation_lowercases_word() {
        let entry = WordEntry::new("NFT", "Unique asset.", Difficulty::Easy).unwrap();
        assert_eq!(entry.word(), "nft");
    }

    #[test]
    fn entry_creation_trims_hint() {
        let entry = WordEntry::new("dao", "  Community entity.  ", Difficulty::Medium).unwrap();
        assert_eq!(entry.hint(), "Community entity.");
    }

    #[test]
    fn entry_creation_empty_word() {
        assert_eq!(
            WordEntry::new("", "hint", Difficulty::Easy),
            Err(WordError::Empty)
        );
    }

    #[test]
    fn entry_creation_invalid_characters() {
        assert!(matches!(
            WordEntry::new("layer 2", "hint", Difficulty::Medium),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(WordEntry::new("web3", "hint", Difficulty::Easy).is_err());
        assert!(WordEntry::new("proof-of-work", "hint", Difficulty::Hard).is_err());
    }

    #[test]
    fn entry_creation_missing_hint() {
        assert_eq!(
            WordEntry::new("ledger", "   ", Difficulty::Easy),
            Err(WordError::MissingHint("ledger".to_string()))
        );
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("sharding", "Splitting.", Difficulty::Hard).unwrap();
        assert_eq!(format!("{entry}"), "sharding (hard)");
    }
}
