//! Simple interactive CLI mode
//!
//! Text-based hangman challenge without the TUI

use crate::game::{Challenge, GuessError, GuessOutcome, Outcome, RoundResult};
use crate::output::{print_round, print_summary};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    Next,
    New,
    Quit,
}

impl Command {
    /// Parse one line of player input
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "hint" | "?" => Self::Hint,
            "next" | "" => Self::Next,
            "new" | "restart" => Self::New,
            "quit" | "exit" => Self::Quit,
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng>(challenge: &mut Challenge<'_, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Onchain Hangman - Challenge                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the blockchain term one letter at a time. {} rounds, getting harder.",
        challenge.state().rounds()
    );
    println!("Type a letter to guess, or:");
    println!("  - 'hint' to reveal the word hint (forfeits the no-hint bonus)");
    println!("  - 'new'  to restart the challenge");
    println!("  - 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_round(challenge.round(), challenge.state());

    loop {
        print!("\n{}: ", prompt(challenge));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                challenge.restart();
                println!("\n🔄 New challenge started!");
                print_round(challenge.round(), challenge.state());
            }
            Command::Hint => {
                if challenge.round().hint_revealed() {
                    println!("Hint already revealed: {}", challenge.round().hint().cyan());
                } else if let Some(hint) = challenge.reveal_hint() {
                    println!("💡 Hint: {}", hint.cyan());
                } else {
                    println!("The round is over; no hint needed.");
                }
            }
            Command::Next => handle_next(challenge),
            Command::Guess(input) => handle_guess(challenge, &input),
        }
    }
}

fn prompt<R: Rng>(challenge: &Challenge<'_, R>) -> &'static str {
    if challenge.can_advance() {
        "Press Enter for the next round"
    } else if challenge.outcome() == Outcome::InProgress {
        "Guess a letter"
    } else {
        "Type 'new' to play again or 'quit' to exit"
    }
}

fn handle_next<R: Rng>(challenge: &mut Challenge<'_, R>) {
    if challenge.can_advance() {
        if challenge.advance().is_ok() {
            print_round(challenge.round(), challenge.state());
        }
    } else if challenge.outcome().is_terminal() {
        println!("The challenge is over. Type 'new' to start again.");
    } else {
        println!("Finish this round first!");
    }
}

fn handle_guess<R: Rng>(challenge: &mut Challenge<'_, R>, input: &str) {
    match challenge.guess(input) {
        Err(GuessError::RoundOver) => {
            if challenge.can_advance() {
                println!("Round complete! Press Enter for the next round.");
            } else {
                println!("The challenge is over. Type 'new' to start again.");
            }
        }
        Err(err) => println!("❌ {err}"),
        Ok(outcome) => {
            print_round(challenge.round(), challenge.state());
            report_outcome(challenge, outcome);
        }
    }
}

fn report_outcome<R: Rng>(challenge: &Challenge<'_, R>, outcome: GuessOutcome) {
    let word = challenge.round().word().to_uppercase();

    match outcome {
        GuessOutcome::Correct => println!("\n✓ {}", "Nice!".green()),
        GuessOutcome::Incorrect { lives_remaining } => println!(
            "\n✗ {} {lives_remaining} {} left.",
            "Not in the word.".red(),
            if lives_remaining == 1 { "life" } else { "lives" }
        ),
        GuessOutcome::Finished(RoundResult::Won { score }) => {
            println!(
                "\n🎉 {} The word was {}. +{} points",
                "You got it!".bright_green().bold(),
                word.bright_white().bold(),
                score.to_string().bright_yellow().bold()
            );
            if !challenge.round().hint_revealed() {
                println!(
                    "   {}",
                    format!(
                        "({}x bonus applied for not using the word hint!)",
                        challenge.round().rules().no_hint_multiplier
                    )
                    .yellow()
                );
            }
        }
        GuessOutcome::Finished(RoundResult::Lost) => {
            println!(
                "\n💀 {} The word was {}.",
                "Out of lives!".red().bold(),
                word.bright_white().bold()
            );
        }
    }

    if let Some(summary) = challenge.summary() {
        print_summary(&summary);
    }
}
