//! Automated players
//!
//! Letter-picking strategies used by the simulation command.

pub mod guesser;

pub use guesser::{CandidateGuesser, FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
