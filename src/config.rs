//! Runtime settings
//!
//! Everything the binary can be told on the command line, gathered in one
//! place so the commands never look at raw arguments.

use crate::game::leaderboard::DEFAULT_LEADERBOARD_FILE;
use crate::game::{FileLeaderboard, LeaderboardService};
use crate::wordlists::{DirectoryWordSource, EmbeddedWordSource, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;

/// Default pause between revealed letters
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Directory of `<list>.txt` word files; embedded lists when `None`
    pub words_dir: Option<PathBuf>,
    pub leaderboard_path: PathBuf,
    /// Seed for answer draws; OS entropy when `None`
    pub seed: Option<u64>,
    pub reveal_delay: Duration,
    pub clear_screen: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            words_dir: None,
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            seed: None,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            clear_screen: true,
        }
    }
}

impl GameSettings {
    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource> {
        match &self.words_dir {
            Some(dir) => Box::new(DirectoryWordSource::new(dir.clone())),
            None => Box::new(EmbeddedWordSource),
        }
    }

    #[must_use]
    pub fn leaderboard(&self) -> Box<dyn LeaderboardService> {
        Box::new(FileLeaderboard::new(self.leaderboard_path.clone()))
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_use_embedded_lists_and_local_leaderboard() {
        let settings = GameSettings::default();
        assert!(settings.words_dir.is_none());
        assert_eq!(settings.leaderboard_path, PathBuf::from("leaderboard.txt"));
        assert_eq!(settings.reveal_delay, Duration::from_millis(250));
        assert!(settings.word_source().load_words("wordlist_5_answers").is_ok());
    }

    #[test]
    fn seeded_settings_give_repeatable_rng() {
        let settings = GameSettings {
            seed: Some(99),
            ..GameSettings::default()
        };
        let a: u64 = settings.rng().random();
        let b: u64 = settings.rng().random();
        assert_eq!(a, b);
    }
}
