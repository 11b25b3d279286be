//! Command implementations
//!
//! The interactive surfaces of the game show: main menu, full game, practice
//! rounds and the leaderboard view. Each takes a `Console` so it can be driven
//! from a terminal or from scripted input.

pub mod console;
pub mod leaderboard;
pub mod menu;
pub mod practice;
pub mod round;
pub mod show;

pub use console::{Console, ConsoleOptions};
pub use leaderboard::{print_leaderboard, view_leaderboard};
pub use menu::run_menu;
pub use practice::{choose_practice_round, run_practice};
pub use round::{RoundIntro, RoundReport, play_round};
pub use show::{ShowResult, run_show};

use crate::config::GameSettings;
use crate::game::LeaderboardService;
use crate::wordlists::WordSource;
use rand::rngs::StdRng;

/// Everything a session plays with besides the terminal
pub struct GameContext {
    pub words: Box<dyn WordSource>,
    pub leaderboard: Box<dyn LeaderboardService>,
    pub rng: StdRng,
}

impl GameContext {
    #[must_use]
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            words: settings.word_source(),
            leaderboard: settings.leaderboard(),
            rng: settings.rng(),
        }
    }
}
