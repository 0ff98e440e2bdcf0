//! Simulation command
//!
//! Lets a bot play many seeded challenges and aggregates the results.

use crate::bot::Guesser;
use crate::config::GameConfig;
use crate::game::{Challenge, SessionSummary, WordBank};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Mixed into the challenge seed to derive the bot's own random stream
const BOT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub games: usize,
    /// Seed of the first challenge; challenge `i` uses `seed + i`
    pub seed: u64,
    /// Reveal the hint at the start of every round
    pub use_hint: bool,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            use_hint: false,
            show_progress: true,
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub bot: String,
    pub games: usize,
    pub rounds: usize,
    pub full_clears: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub best_score: u32,
    /// Number of challenges by rounds cleared
    pub rounds_cleared: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one full challenge with `guesser`
///
/// Deterministic for a given `seed`.
pub fn play_challenge<G: Guesser>(
    guesser: &G,
    bank: &WordBank,
    config: &GameConfig,
    seed: u64,
    use_hint: bool,
) -> SessionSummary {
    let mut challenge = Challenge::start(bank, config, StdRng::seed_from_u64(seed));
    let mut bot_rng = StdRng::seed_from_u64(seed ^ BOT_SEED_SALT);

    loop {
        if use_hint {
            challenge.reveal_hint();
        }

        while !challenge.round().is_over() {
            let Some(letter) = guesser.next_letter(challenge.round(), &mut bot_rng) else {
                break;
            };
            if let Err(err) = challenge.guess_char(letter) {
                debug!(%err, letter = %letter, "bot guess rejected");
                break;
            }
        }

        if challenge.can_advance() {
            if challenge.advance().is_err() {
                break;
            }
        } else {
            break;
        }
    }

    challenge.summary().unwrap_or_else(|| SessionSummary {
        total_score: challenge.state().total_score(),
        outcome: challenge.outcome(),
        rounds_cleared: challenge.state().rounds_cleared(),
        rounds: challenge.state().rounds(),
    })
}

/// Run `sim.games` challenges in parallel
pub fn run_simulation<G: Guesser + Sync>(
    guesser: &G,
    bot_name: &str,
    bank: &WordBank,
    config: &GameConfig,
    sim: &SimulateConfig,
) -> SimulationResult {
    let start = Instant::now();

    let pb = if sim.show_progress {
        ProgressBar::new(sim.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("bot: {bot_name}"));

    let summaries: Vec<SessionSummary> = (0..sim.games)
        .into_par_iter()
        .map(|i| {
            let summary =
                play_challenge(guesser, bank, config, sim.seed.wrapping_add(i as u64), sim.use_hint);
            pb.inc(1);
            summary
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    summarize(bot_name, config.rounds(), &summaries, duration)
}

/// Aggregate per-challenge summaries
#[must_use]
pub fn summarize(
    bot_name: &str,
    rounds: usize,
    summaries: &[SessionSummary],
    duration: Duration,
) -> SimulationResult {
    let games = summaries.len();
    let full_clears = summaries
        .iter()
        .filter(|s| s.rounds_cleared == s.rounds)
        .count();
    let total_score: u64 = summaries.iter().map(|s| u64::from(s.total_score)).sum();
    let best_score = summaries.iter().map(|s| s.total_score).max().unwrap_or(0);

    let mut rounds_cleared: HashMap<usize, usize> = HashMap::new();
    for summary in summaries {
        *rounds_cleared.entry(summary.rounds_cleared).or_insert(0) += 1;
    }

    let average_score = if games > 0 {
        total_score as f64 / games as f64
    } else {
        0.0
    };
    let secs = duration.as_secs_f64();

    SimulationResult {
        bot: bot_name.to_string(),
        games,
        rounds,
        full_clears,
        total_score,
        average_score,
        best_score,
        rounds_cleared,
        duration,
        games_per_second: if secs > 0.0 { games as f64 / secs } else { 0.0 },
    }
}
