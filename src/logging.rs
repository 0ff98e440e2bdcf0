//! Tracing subscriber setup for the binary

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber; used by the TUI so logs never draw over the screen
    Off,
}

/// Filter used when `RUST_LOG` is not set
fn default_filter(verbose: u8) -> EnvFilter {
    let directive = match verbose {
        0 => "warn",
        1 => "onchain_hangman=info,warn",
        _ => "onchain_hangman=debug,info",
    };
    EnvFilter::new(directive)
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `verbose`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(target: &LogTarget, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init()
                .context("failed to install tracing subscriber")?;
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
                .context("failed to install tracing subscriber")?;
            tracing::info!(path = %path.display(), "logging to file");
        }
    }

    Ok(())
}
