//! The full game show: every round in order, then the leaderboard

use super::GameContext;
use super::console::Console;
use super::round::{RoundIntro, play_round};
use crate::error::Result;
use crate::game::leaderboard::validate_player_name;
use crate::game::{ROUNDS, ScoreTally, rank_of, ranked_entries};
use crate::output::error_text;
use std::io::{BufRead, Write};
use tracing::{error, info};

/// How a completed game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowResult {
    pub total: u32,
    /// Rank the total took against the leaderboard before saving
    pub rank: usize,
    pub name: String,
    pub saved: bool,
}

/// Play all rounds, then rank and save the final score
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input. A failed leaderboard
/// write is reported to the player, not returned.
pub fn run_show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut GameContext,
) -> Result<ShowResult> {
    let mut tally = ScoreTally::new();

    for (index, config) in ROUNDS.iter().enumerate() {
        let intro = RoundIntro {
            number: index + 1,
            show_rules: index == 0,
        };
        let report = play_round(console, ctx, config, intro)?;
        let total = tally.record(report.points);

        console.blank()?;
        console.say(format!(
            "This earns you an additional {} points for a total score of {total}",
            report.points
        ))?;
        console.pause()?;
    }

    let total = tally.total();
    let rank = rank_of(&ranked_entries(ctx.leaderboard.as_ref()), i64::from(total));
    info!(total, rank, rounds = ?tally.rounds(), "game show finished");

    console.clear_screen()?;
    console.say("Congrats on completing the Wordle game show!")?;
    console.say(format!(
        "Your final score is {total} which gives you a ranking of #{rank}!"
    ))?;
    console.blank()?;

    let name = prompt_player_name(console)?;
    let saved = match ctx.leaderboard.append(&name, total) {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "failed to save score");
            console.say(error_text("Error saving score to leaderboard."))?;
            false
        }
    };

    console.blank()?;
    console.say(format!(
        "Thank you for playing, {name}! Press enter to return to the main menu."
    ))?;
    console.read_line()?;

    Ok(ShowResult {
        total,
        rank,
        name,
        saved,
    })
}

fn prompt_player_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    loop {
        console.say("Enter your name to save your score to the leaderboard: ")?;
        let name = console.read_line()?.trim().to_string();
        match validate_player_name(&name) {
            Ok(()) => return Ok(name),
            Err(rejection) => console.say(error_text(&rejection.to_string()))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output_of, scripted_console, scripted_context};
    use crate::error::GameError;
    use crate::game::{LeaderboardEntry, LeaderboardService};

    /// Rage quit round 1, solve rounds 2, 3 and 5 first try, round 4 in two
    const PLAYTHROUGH: &str = "s\nrq\n\nboat\n\nplanet\n\ncrane\nslate\n\nswitch\n\n";

    /// Rejects every write
    struct BrokenLeaderboard;

    impl LeaderboardService for BrokenLeaderboard {
        fn append(&mut self, _name: &str, _score: u32) -> Result<()> {
            Err(GameError::Io(std::io::Error::other("disk full")))
        }

        fn all_entries(&self) -> Vec<LeaderboardEntry> {
            Vec::new()
        }
    }

    #[test]
    fn full_game_totals_ranks_and_saves() {
        let mut ctx = scripted_context();
        ctx.leaderboard.append("ace", 20000).unwrap();
        ctx.leaderboard.append("bob", 900).unwrap();

        let input = format!("{PLAYTHROUGH}a/b\n\n  Laura  \n\n");
        let mut console = scripted_console(&input);
        let result = run_show(&mut console, &mut ctx).unwrap();

        // 0 + 3600 + 3600 + (1800 + 1250 + 2500) + 3600
        assert_eq!(result.total, 16350);
        assert_eq!(result.rank, 2);
        assert_eq!(result.name, "Laura");
        assert!(result.saved);
        assert_eq!(
            ctx.leaderboard.all_entries().last(),
            Some(&LeaderboardEntry::new("Laura", 16350))
        );

        let output = output_of(console);
        assert!(output.contains("This earns you an additional 0 points for a total score of 0"));
        assert!(output.contains("for a total score of 16350"));
        assert!(output.contains("Your final score is 16350 which gives you a ranking of #2!"));
        assert!(output.contains("Invalid character '/' in name. Try again."));
        assert!(output.contains("Invalid name. Try again."));
        assert!(output.contains("Thank you for playing, Laura!"));
    }

    #[test]
    fn rules_are_only_offered_in_the_first_round() {
        let mut ctx = scripted_context();
        let input = format!("{PLAYTHROUGH}Laura\n\n");
        let mut console = scripted_console(&input);
        run_show(&mut console, &mut ctx).unwrap();

        let output = output_of(console);
        assert_eq!(output.matches("enter 'S' to skip the rules").count(), 1);
        assert_eq!(output.matches("ROUND ").count(), 5);
    }

    #[test]
    fn failed_save_is_reported_and_game_ends_normally() {
        let mut ctx = scripted_context();
        ctx.leaderboard = Box::new(BrokenLeaderboard);

        let input = format!("{PLAYTHROUGH}Laura\n\n");
        let mut console = scripted_console(&input);
        let result = run_show(&mut console, &mut ctx).unwrap();

        assert!(!result.saved);
        assert_eq!(result.rank, 1);
        assert!(output_of(console).contains("Error saving score to leaderboard."));
    }

    #[test]
    fn input_closing_mid_game_is_an_error() {
        let mut ctx = scripted_context();
        let mut console = scripted_console("s\nrq\n\nboat\n");
        assert!(matches!(
            run_show(&mut console, &mut ctx),
            Err(GameError::InputClosed)
        ));
        assert!(ctx.leaderboard.all_entries().is_empty());
    }
}
