//! Leaderboard storage and ranking
//!
//! The store is a text file with one `name/score` entry per line, appended to
//! once per completed game. Entries are never rewritten. Ordering is the
//! caller's job: `sort_descending` then `rank_of`.

use crate::error::{GameError, Result};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Separates name and score on each line; forbidden in names
pub const SEPARATOR: char = '/';

/// Default leaderboard file, relative to the working directory
pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Signed so that hand-edited negative scores still load
    pub score: i64,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Parse a `name/score` line, `None` if the score is missing or not a number
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split(SEPARATOR);
        let name = parts.next()?;
        let score = parts.next()?.trim().parse().ok()?;
        Some(Self::new(name, score))
    }

    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}{SEPARATOR}{}", self.name, self.score)
    }
}

/// Persistent, append-only store of finished games
pub trait LeaderboardService {
    /// Append an entry; duplicate names are allowed
    ///
    /// # Errors
    ///
    /// Returns `GameError::LeaderboardWrite` if the entry could not be saved.
    fn append(&mut self, name: &str, score: u32) -> Result<()>;

    /// Every stored entry, in storage order
    fn all_entries(&self) -> Vec<LeaderboardEntry>;
}

/// Leaderboard kept in a text file
#[derive(Debug, Clone)]
pub struct FileLeaderboard {
    path: PathBuf,
}

impl FileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardService for FileLeaderboard {
    fn append(&mut self, name: &str, score: u32) -> Result<()> {
        let line = LeaderboardEntry::new(name, i64::from(score)).to_line();
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            writeln!(file, "{line}")
        };

        write().map_err(|source| GameError::LeaderboardWrite {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), score, "score saved to leaderboard");
        Ok(())
    }

    fn all_entries(&self) -> Vec<LeaderboardEntry> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no leaderboard file yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "leaderboard unreadable, treating as empty");
                return Vec::new();
            }
        };

        // Decoded per line; an undecodable line is skipped on its own
        bytes
            .split(|&byte| byte == b'\n')
            .enumerate()
            .filter_map(|(index, raw)| {
                let Ok(line) = std::str::from_utf8(raw) else {
                    debug!(line = index + 1, "skipping leaderboard line that is not UTF-8");
                    return None;
                };
                let line = line.trim_end_matches('\r');
                let entry = LeaderboardEntry::parse_line(line);
                if entry.is_none() && !line.trim().is_empty() {
                    debug!(line, "skipping malformed leaderboard line");
                }
                entry
            })
            .collect()
    }
}

/// Leaderboard held in memory, for practice sessions and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl InMemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardService for InMemoryLeaderboard {
    fn append(&mut self, name: &str, score: u32) -> Result<()> {
        self.entries.push(LeaderboardEntry::new(name, i64::from(score)));
        Ok(())
    }

    fn all_entries(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }
}

/// Sort entries by score, highest first, keeping storage order among ties
pub fn sort_descending(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Entries from `service`, sorted for display
#[must_use]
pub fn ranked_entries(service: &dyn LeaderboardService) -> Vec<LeaderboardEntry> {
    let mut entries = service.all_entries();
    sort_descending(&mut entries);
    entries
}

/// 1-based rank `score` would take among entries already sorted descending
///
/// The score ranks at the first entry it meets or beats; below everything it
/// ranks last plus one.
///
/// # Examples
/// ```
/// use wordle_gameshow::game::leaderboard::{LeaderboardEntry, rank_of};
///
/// let entries: Vec<_> = [2000, 1750, 1750, 1000]
///     .into_iter()
///     .map(|s| LeaderboardEntry::new("x", s))
///     .collect();
/// assert_eq!(rank_of(&entries, 1750), 2);
/// ```
#[must_use]
pub fn rank_of(sorted: &[LeaderboardEntry], score: i64) -> usize {
    sorted
        .iter()
        .position(|entry| entry.score <= score)
        .map_or(sorted.len() + 1, |index| index + 1)
}

/// Why a player name cannot be saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    Empty,
    ContainsSeparator,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Invalid name. Try again."),
            Self::ContainsSeparator => {
                write!(f, "Invalid character '{SEPARATOR}' in name. Try again.")
            }
        }
    }
}

/// Check a player name before it is stored
///
/// # Errors
///
/// Rejects names that are empty or contain the separator.
pub fn validate_player_name(name: &str) -> std::result::Result<(), NameRejection> {
    if name.contains(SEPARATOR) {
        Err(NameRejection::ContainsSeparator)
    } else if name.is_empty() {
        Err(NameRejection::Empty)
    } else {
        Ok(())
    }
}
