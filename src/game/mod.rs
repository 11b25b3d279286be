//! Game show rules
//!
//! Round definitions, the round state machine, scoring, and the leaderboard.
//! Nothing in here reads input or writes to the terminal.

pub mod engine;
pub mod leaderboard;
pub mod round;
pub mod scoring;

pub use engine::{
    ABANDON_SENTINEL, GuessRecord, Progress, Rejection, RoundEngine, RoundOutcome, RoundState,
    Submission, Target,
};
pub use leaderboard::{
    FileLeaderboard, InMemoryLeaderboard, LeaderboardEntry, LeaderboardService, rank_of,
    ranked_entries,
};
pub use round::{ROUNDS, RoundConfig, RoundShape, RoundVocabulary, round_by_number};
pub use scoring::{ScoreTally, score_round};
