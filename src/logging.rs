//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The game owns the terminal, so logging is quiet by default: only warnings
//! and errors reach stderr unless `-v` is given. `RUST_LOG` overrides the
//! level, and `--log-file` moves all output into a file.
//!
//! # Log Levels
//!
//! - `error`: leaderboard writes that failed
//! - `warn`: unreadable leaderboard, rounds aborted for missing word lists
//! - `info`: round results, word lists loaded, scores saved
//! - `debug`: individual guesses and rejections (includes answers)

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level
    ///
    /// - 0: warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_gameshow={level}")))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config.level);

    let result = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    } else {
        let layer = fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time();
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };

    result.map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
    }

    #[test]
    fn log_file_is_optional() {
        let config = LogConfig::default().with_log_file(Some(PathBuf::from("game.log")));
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
    }
}
