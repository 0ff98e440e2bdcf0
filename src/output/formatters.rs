//! Formatting utilities for terminal output

use crate::config::MAX_LIVES;
use crate::game::{Outcome, SessionSummary};

/// Gallows drawings, one per miss from 0 to 6
const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Gallows for `incorrect` misses out of `max_incorrect`
///
/// Stages are scaled so the figure is complete exactly when the round is lost.
#[must_use]
pub fn gallows(incorrect: u32, max_incorrect: u32) -> &'static str {
    let last = GALLOWS.len() - 1;
    let stage = if max_incorrect == 0 {
        last
    } else {
        (incorrect as usize * last / max_incorrect as usize).min(last)
    };
    GALLOWS[stage]
}

/// Lives as filled and empty hearts, at most `MAX_LIVES` of them
#[must_use]
pub fn lives_bar(remaining: u32, max: u32) -> String {
    let max = max.min(MAX_LIVES) as usize;
    let remaining = (remaining as usize).min(max);
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(max - remaining))
}

/// Letters `a`-`z` with guessed ones replaced by `·`
#[must_use]
pub fn keyboard_row(is_guessed: impl Fn(char) -> bool) -> String {
    ('a'..='z')
        .map(|ch| if is_guessed(ch) { '·' } else { ch })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short label for a finished challenge
#[must_use]
pub const fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::AllRoundsWon => "Onchain Star",
        Outcome::RoundLost => "Almost!",
        Outcome::InProgress => "In progress",
    }
}

/// Shareable one-line summary of a finished challenge
#[must_use]
pub fn share_text(summary: &SessionSummary) -> String {
    match summary.outcome {
        Outcome::AllRoundsWon => format!(
            "I'm an Onchain Star! ⭐ I scored {} in Onchain Hangman!",
            summary.total_score
        ),
        Outcome::RoundLost => format!(
            "I tried Onchain Hangman and scored {}. Can you do better?",
            summary.total_score
        ),
        Outcome::InProgress => format!(
            "Check out Onchain Hangman! I scored {}.",
            summary.total_score
        ),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
