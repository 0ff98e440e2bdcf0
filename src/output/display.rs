//! Display functions for game state and command results

use super::formatters::{create_progress_bar, gallows, keyboard_row, lives_bar, share_text};
use crate::commands::SimulationResult;
use crate::core::Difficulty;
use crate::game::{Round, SessionState, SessionSummary, WordBank};
use colored::Colorize;

/// Print the board for the round in play
pub fn print_round(round: &Round, state: &SessionState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round {}/{} | Difficulty: {} | Score: {}",
        state.round_index() + 1,
        state.rounds(),
        tier_colored(round.difficulty()),
        state.total_score().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("{}", gallows(round.incorrect(), round.rules().max_incorrect));
    println!(
        "\n  Word:  {}",
        round.masked().to_uppercase().bright_white().bold()
    );
    println!(
        "  Lives: {}",
        lives_bar(round.lives_remaining(), round.rules().max_incorrect).red()
    );
    println!(
        "  Keys:  {}",
        keyboard_row(|ch| round.guessed().contains(&ch)).bright_black()
    );

    let wrong = round.wrong_letters();
    if !wrong.is_empty() {
        let wrong: String = wrong.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
        println!("  Misses: {}", wrong.to_uppercase().red());
    }

    if round.hint_revealed() {
        println!("  Hint:  {}", round.hint().cyan());
    } else {
        println!(
            "  {}",
            format!(
                "{}x bonus active (type 'hint' to reveal the hint)",
                round.rules().no_hint_multiplier
            )
            .bright_black()
        );
    }
}

/// Print the final result of a challenge
pub fn print_summary(summary: &SessionSummary) {
    use crate::game::Outcome;

    println!("\n{}", "═".repeat(60).bright_cyan());
    match summary.outcome {
        Outcome::AllRoundsWon => {
            println!(
                "{}",
                "   ⭐  O N C H A I N   S T A R !  ⭐".bright_green().bold()
            );
            println!("\n  You conquered all {} rounds!", summary.rounds);
        }
        Outcome::RoundLost | Outcome::InProgress => {
            println!("{}", "   💀  C H A L L E N G E   O V E R".red().bold());
            println!(
                "\n  Rounds cleared: {}/{}",
                summary.rounds_cleared, summary.rounds
            );
        }
    }
    println!(
        "  Onchain Score: {}",
        summary.total_score.to_string().bright_yellow().bold()
    );
    println!("\n  Share: {}", share_text(summary).bright_white());
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the catalog, optionally limited to one tier
pub fn print_catalog(bank: &WordBank, difficulty: Option<Difficulty>) {
    let tiers: Vec<Difficulty> = difficulty.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);

    for tier in tiers {
        let entries: Vec<_> = bank.by_difficulty(tier).collect();
        println!(
            "\n{} {}",
            tier_colored(tier).bold(),
            format!("({} words)", entries.len()).bright_black()
        );
        for entry in entries {
            println!("  {:<16} {}", entry.word().bright_white(), entry.hint());
        }
    }
}

/// Print the result of a bot simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let clear_pct = if result.games > 0 {
        result.full_clears as f64 / result.games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n🤖 {}", "Performance:".bright_cyan().bold());
    println!("   Bot:              {}", result.bot);
    println!("   Challenges:       {}", result.games);
    println!(
        "   Full clears:      {} {}",
        result.full_clears,
        format!("({clear_pct:.1}%)").green()
    );
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Best score:       {}",
        result.best_score.to_string().green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Rounds cleared:".bright_cyan().bold());
    for cleared in 0..=result.rounds {
        if let Some(&count) = result.rounds_cleared.get(&cleared) {
            let pct = count as f64 / result.games as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {cleared:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}

fn tier_colored(difficulty: Difficulty) -> colored::ColoredString {
    let name = difficulty.name().to_uppercase();
    match difficulty {
        Difficulty::Easy => name.green(),
        Difficulty::Medium => name.yellow(),
        Difficulty::Hard => name.red(),
    }
}
