//! Onchain Hangman
//!
//! A hangman word game themed on blockchain vocabulary: eight rounds of rising
//! difficulty, lives, an optional word hint and a no-hint score bonus.
//!
//! # Quick Start
//!
//! ```rust
//! use onchain_hangman::config::GameConfig;
//! use onchain_hangman::game::{Challenge, WordBank};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let bank = WordBank::embedded().unwrap();
//! let config = GameConfig::default();
//! let mut challenge = Challenge::start(&bank, &config, StdRng::seed_from_u64(7));
//!
//! println!("{}", challenge.round().masked());
//! match challenge.guess("e") {
//!     Ok(outcome) => println!("{outcome:?}"),
//!     Err(err) => println!("{err}"),
//! }
//! ```

// Core domain types
pub mod core;

// Scoring rules and difficulty sequence
pub mod config;

// Round and session state machines
pub mod game;

// Word catalogs
pub mod wordlists;

// Automated players
pub mod bot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
