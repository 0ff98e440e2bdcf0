//! Hangman game engine
//!
//! Word selection, round evaluation, the per-round state machine and the
//! multi-round challenge built on top of it.

mod challenge;
pub mod evaluator;
mod round;
mod selector;
mod session;

pub use challenge::Challenge;
pub use evaluator::{LetterSet, PLACEHOLDER, is_win, mask_word};
pub use round::{GuessError, GuessOutcome, Round, RoundResult, RoundStatus};
pub use selector::WordBank;
pub use session::{Outcome, SessionError, SessionState, SessionSummary};
