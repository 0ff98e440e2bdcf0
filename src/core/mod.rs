//! Core domain types for the hangman catalog
//!
//! Plain data types with validation and no game logic.

mod difficulty;
mod entry;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use entry::{WordEntry, WordError};
