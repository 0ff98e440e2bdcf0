//! Onchain Hangman - CLI
//!
//! Blockchain-themed hangman with TUI and CLI modes, plus bot simulations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use onchain_hangman::{
    bot::GuesserType,
    commands::{SimulateConfig, run_simple, run_simulation},
    config::{GameConfig, RoundRules},
    core::Difficulty,
    game::{Challenge, WordBank},
    logging::{LogTarget, init_tracing},
    output::{print_catalog, print_simulation_result},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "onchain_hangman",
    about = "Blockchain-themed hangman: eight rounds, rising difficulty, no-hint bonus",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word catalog file (word|difficulty|hint per line); defaults to the built-in terms
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Comma-separated difficulty per round, e.g. easy,medium,hard
    #[arg(long, global = true, value_delimiter = ',')]
    sequence: Option<Vec<Difficulty>>,

    /// Incorrect guesses allowed per round (1-26)
    #[arg(long, global = true, default_value = "6")]
    max_misses: u32,

    /// Don't reveal a free letter at the start of each round
    #[arg(long, global = true)]
    no_free_letter: bool,

    /// Seed for word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let a bot play many challenges and report scores
    Simulate {
        /// Number of challenges to play
        #[arg(short = 'n', long, default_value = "200")]
        games: usize,

        /// Bot: candidates (default), frequency, random
        #[arg(short, long, default_value = "candidates")]
        bot: String,

        /// Reveal the hint in every round
        #[arg(long)]
        use_hint: bool,
    },

    /// List the word catalog
    Words {
        /// Only show one tier
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let rules = RoundRules {
            max_incorrect: self.max_misses,
            free_letter: !self.no_free_letter,
            ..RoundRules::default()
        };
        let sequence = self
            .sequence
            .clone()
            .unwrap_or_else(|| GameConfig::DEFAULT_SEQUENCE.to_vec());

        let config = GameConfig::new(rules, sequence);
        config.validate().context("invalid game configuration")?;
        Ok(config)
    }

    fn log_target(&self, command: &Commands) -> LogTarget {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Play) => LogTarget::Off,
            (None, _) => LogTarget::Stderr,
        }
    }
}

/// Load the word bank based on the -w flag
fn load_bank(path: Option<&PathBuf>) -> Result<WordBank> {
    match path {
        Some(path) => WordBank::from_file(path)
            .with_context(|| format!("failed to load word catalog {}", path.display())),
        None => WordBank::embedded().context("built-in word catalog is empty"),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_tracing(&cli.log_target(&command), cli.verbose)?;

    let bank = load_bank(cli.words.as_ref())?;
    let config = cli.game_config()?;
    info!(words = bank.len(), rounds = config.rounds(), "configuration loaded");

    match command {
        Commands::Play => run_play_command(&bank, &config, cli.seed),
        Commands::Simple => run_simple_command(&bank, &config, cli.seed),
        Commands::Simulate {
            games,
            bot,
            use_hint,
        } => {
            run_simulate_command(&bank, &config, cli.seed, games, &bot, use_hint);
            Ok(())
        }
        Commands::Words { difficulty } => {
            print_catalog(&bank, difficulty);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(bank: &WordBank, config: &GameConfig, seed: Option<u64>) -> Result<()> {
    use onchain_hangman::interactive::{App, run_tui};

    let app = App::new(bank, config, make_rng(seed));
    run_tui(app)
}

fn run_simple_command(bank: &WordBank, config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let mut challenge = Challenge::start(bank, config, make_rng(seed));
    run_simple(&mut challenge)
}

fn run_simulate_command(
    bank: &WordBank,
    config: &GameConfig,
    seed: Option<u64>,
    games: usize,
    bot_name: &str,
    use_hint: bool,
) {
    let guesser = GuesserType::from_name(bot_name, bank);
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Simulating {games} challenges with the {} bot (seed {seed})...",
        guesser.name()
    );

    let sim = SimulateConfig {
        use_hint,
        ..SimulateConfig::new(games, seed)
    };
    let result = run_simulation(&guesser, guesser.name(), bank, config, &sim);
    print_simulation_result(&result);
}
