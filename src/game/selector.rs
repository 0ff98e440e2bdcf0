//! Word selection
//!
//! The loaded-once catalog and random draws from it.

use crate::core::{Difficulty, WordEntry};
use crate::wordlists::TERMS;
use crate::wordlists::loader::{LoaderError, entries_from_slice, load_from_file};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;
use tracing::warn;

/// Immutable, non-empty catalog of words
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<WordEntry>,
}

impl WordBank {
    /// Create a bank from entries
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, LoaderError> {
        if entries.is_empty() {
            return Err(LoaderError::Empty);
        }
        Ok(Self { entries })
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::Empty` if no embedded entry is valid.
    pub fn embedded() -> Result<Self, LoaderError> {
        Self::new(entries_from_slice(TERMS))
    }

    /// Load a bank from a `word|difficulty|hint` file
    ///
    /// # Errors
    ///
    /// Returns `LoaderError` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        Self::new(load_from_file(path)?)
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bank has no entries; `new` rejects empty banks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one tier, in catalog order
    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &WordEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.difficulty() == difficulty)
    }

    /// Fallback entry used when a tier filter matches nothing
    #[must_use]
    pub fn default_entry(&self) -> &WordEntry {
        &self.entries[0]
    }

    /// Draw a random entry, optionally restricted to one tier
    ///
    /// An empty tier falls back to [`WordBank::default_entry`] and logs a
    /// warning, since it means the catalog is missing a tier.
    ///
    /// # Examples
    /// ```
    /// use onchain_hangman::core::Difficulty;
    /// use onchain_hangman::game::WordBank;
    ///
    /// let bank = WordBank::embedded().unwrap();
    /// let entry = bank.choose(Some(Difficulty::Hard), &mut rand::rng());
    /// assert_eq!(entry.difficulty(), Difficulty::Hard);
    /// ```
    pub fn choose<R: Rng + ?Sized>(&self, difficulty: Option<Difficulty>, rng: &mut R) -> &WordEntry {
        let Some(difficulty) = difficulty else {
            return self.entries.choose(rng).unwrap_or_else(|| self.default_entry());
        };

        let pool: Vec<&WordEntry> = self.by_difficulty(difficulty).collect();
        if let Some(&entry) = pool.choose(rng) {
            entry
        } else {
            let fallback = self.default_entry();
            warn!(
                %difficulty,
                fallback = fallback.word(),
                "no catalog words for difficulty, using default entry"
            );
            fallback
        }
    }
}
