//! Word catalog loading utilities
//!
//! Parses `word|difficulty|hint` catalogs from files or the embedded table.

use crate::core::{Difficulty, ParseDifficultyError, WordEntry, WordError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read word catalog: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected 'word|difficulty|hint'")]
    Malformed { line: usize },
    #[error("line {line}: {source}")]
    Difficulty {
        line: usize,
        #[source]
        source: ParseDifficultyError,
    },
    #[error("line {line}: {source}")]
    Word {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("word catalog contains no entries")]
    Empty,
}

/// Parse one catalog line
///
/// Blank lines and `#` comments yield `Ok(None)`. `line` is 1-based and only
/// used for error reporting.
///
/// # Errors
///
/// Returns `LoaderError` if the line is missing fields, names an unknown tier,
/// or holds an invalid word or hint.
pub fn parse_line(text: &str, line: usize) -> Result<Option<WordEntry>, LoaderError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.splitn(3, '|').map(str::trim);
    let (Some(word), Some(difficulty), Some(hint)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(LoaderError::Malformed { line });
    };

    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|source| LoaderError::Difficulty { line, source })?;

    WordEntry::new(word, hint, difficulty)
        .map(Some)
        .map_err(|source| LoaderError::Word { line, source })
}

/// Parse a whole catalog from text
///
/// # Errors
///
/// Returns the first line-level error, or `LoaderError::Empty` if no entries remain.
pub fn parse_catalog(content: &str) -> Result<Vec<WordEntry>, LoaderError> {
    let mut entries = Vec::new();
    for (idx, text) in content.lines().enumerate() {
        if let Some(entry) = parse_line(text, idx + 1)? {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(LoaderError::Empty);
    }

    Ok(entries)
}

/// Load a catalog from a file
///
/// Unlike the embedded table, user files are parsed strictly: the first bad
/// line aborts the load.
///
/// # Errors
///
/// Returns `LoaderError` if the file cannot be read or any line is invalid.
///
/// # Examples
/// ```no_run
/// use onchain_hangman::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/onchain_terms.txt").unwrap();
/// println!("Loaded {} terms", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, LoaderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let entries = parse_catalog(&content)?;
    debug!(path = %path.display(), count = entries.len(), "loaded word catalog");
    Ok(entries)
}

/// Convert an embedded `(word, difficulty, hint)` table to entries
///
/// Invalid rows are skipped with a warning.
///
/// # Examples
/// ```
/// use onchain_hangman::wordlists::loader::entries_from_slice;
/// use onchain_hangman::wordlists::TERMS;
///
/// let entries = entries_from_slice(TERMS);
/// assert_eq!(entries.len(), TERMS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, difficulty, hint)| {
            let entry = difficulty
                .parse::<Difficulty>()
                .map_err(|e| e.to_string())
                .and_then(|d| WordEntry::new(word, hint, d).map_err(|e| e.to_string()));
            match entry {
                Ok(entry) => Some(entry),
                Err(reason) => {
                    warn!(word, %reason, "skipping invalid catalog entry");
                    None
                }
            }
        })
        .collect()
}
