//! Tracing setup
//!
//! The filter comes from the `LENAPE_LOG` environment variable and defaults to
//! `warn`. The terminal UI owns the screen, so it only logs to a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "LENAPE_LOG";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// Pick a target for a run mode
    ///
    /// An explicit file always wins; otherwise line modes log to stderr and
    /// the terminal UI does not log at all.
    #[must_use]
    pub fn for_mode(log_file: Option<PathBuf>, full_screen: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if full_screen => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter())
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter())
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_wins() {
        let path = PathBuf::from("game.log");
        assert_eq!(
            LogTarget::for_mode(Some(path.clone()), true),
            LogTarget::File(path)
        );
    }

    #[test]
    fn full_screen_without_file_is_silent() {
        assert_eq!(LogTarget::for_mode(None, true), LogTarget::Disabled);
        assert_eq!(LogTarget::for_mode(None, false), LogTarget::Stderr);
    }
}
