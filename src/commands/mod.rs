//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{SimulateConfig, SimulationResult, play_challenge, run_simulation};
