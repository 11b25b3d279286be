//! Word list loading
//!
//! Lists are plain text, one word per line. Blank lines and lines starting
//! with `//` are skipped; everything else is uppercased. Entries that are not
//! made of letters are dropped with a debug log.

use crate::core::Word;
use crate::error::{GameError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::embedded::embedded_list;

/// Marker for comment lines in word list files
pub const COMMENT_PREFIX: &str = "//";

/// Supplier of named vocabularies
pub trait WordSource {
    /// Load the list named `identifier`, in file order
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordListUnavailable` if the list cannot be found or
    /// read, and `GameError::EmptyWordList` if it holds no usable words.
    fn load_words(&self, identifier: &str) -> Result<Vec<Word>>;
}

/// Parse word list lines, skipping blanks, comments, and non-words
///
/// # Examples
/// ```
/// use wordle_gameshow::wordlists::parse_word_list;
///
/// let words = parse_word_list(["// header", "", "crane", "slate"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
pub fn parse_word_list<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!(entry = trimmed, error = %e, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

fn non_empty(identifier: &str, words: Vec<Word>) -> Result<Vec<Word>> {
    if words.is_empty() {
        return Err(GameError::EmptyWordList(identifier.to_string()));
    }
    Ok(words)
}

/// Loads `<dir>/<identifier>.txt`
#[derive(Debug, Clone)]
pub struct DirectoryWordSource {
    dir: PathBuf,
}

impl DirectoryWordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{identifier}.txt"))
    }
}

impl WordSource for DirectoryWordSource {
    fn load_words(&self, identifier: &str) -> Result<Vec<Word>> {
        let path = self.path_for(identifier);
        let content =
            fs::read_to_string(&path).map_err(|source| GameError::WordListUnavailable {
                identifier: identifier.to_string(),
                source,
            })?;

        let words = parse_word_list(content.lines());
        info!(identifier, path = %path.display(), count = words.len(), "loaded word list");
        non_empty(identifier, words)
    }
}

/// Serves the lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn load_words(&self, identifier: &str) -> Result<Vec<Word>> {
        let lines = embedded_list(identifier).ok_or_else(|| GameError::WordListUnavailable {
            identifier: identifier.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no embedded list with that name"),
        })?;

        let words = parse_word_list(lines.iter().copied());
        debug!(identifier, count = words.len(), "loaded embedded word list");
        non_empty(identifier, words)
    }
}
