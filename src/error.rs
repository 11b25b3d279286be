//! Error types for the game show library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("word list '{identifier}' is unavailable: {source}")]
    WordListUnavailable {
        identifier: String,
        #[source]
        source: io::Error,
    },

    #[error("word list '{0}' contains no words")]
    EmptyWordList(String),

    #[error("word list '{identifier}' needs at least {needed} distinct answers, found {found}")]
    NotEnoughAnswers {
        identifier: String,
        needed: usize,
        found: usize,
    },

    #[error("failed to save score to leaderboard {}: {source}", path.display())]
    LeaderboardWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input closed")]
    InputClosed,

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
