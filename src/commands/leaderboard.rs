//! Leaderboard view

use super::GameContext;
use super::console::Console;
use crate::error::Result;
use crate::game::{LeaderboardService, ranked_entries};
use crate::output::format_leaderboard;
use std::io::{BufRead, Write};

/// Shown when nobody has finished a game yet
pub const EMPTY_LEADERBOARD: &str = "No one has beat the game yet. Do you want to be the first? ;)";

/// Print the heading and the sorted table
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_leaderboard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    leaderboard: &dyn LeaderboardService,
) -> Result<()> {
    console.say("LEADERBOARD")?;
    console.blank()?;

    let entries = ranked_entries(leaderboard);
    if entries.is_empty() {
        console.say(EMPTY_LEADERBOARD)?;
    } else {
        for line in format_leaderboard(&entries) {
            console.say(line)?;
        }
    }
    console.blank()?;
    Ok(())
}

/// Show the leaderboard until the player asks to go back
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input.
pub fn view_leaderboard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &GameContext,
) -> Result<()> {
    console.clear_screen()?;
    print_leaderboard(console, ctx.leaderboard.as_ref())?;
    loop {
        console.say("Enter 'R' to return to the main menu.")?;
        if console.read_line()?.trim().eq_ignore_ascii_case("R") {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output_of, scripted_console, scripted_context};

    #[test]
    fn empty_leaderboard_invites_first_player() {
        let ctx = scripted_context();
        let mut console = scripted_console("r\n");
        view_leaderboard(&mut console, &ctx).unwrap();

        let output = output_of(console);
        assert!(output.starts_with("LEADERBOARD\n"));
        assert!(output.contains(EMPTY_LEADERBOARD));
    }

    #[test]
    fn entries_are_listed_highest_first() {
        let mut ctx = scripted_context();
        ctx.leaderboard.append("bob", 900).unwrap();
        ctx.leaderboard.append("laura", 1750).unwrap();

        let mut console = scripted_console("x\nR\n");
        view_leaderboard(&mut console, &ctx).unwrap();

        let output = output_of(console);
        let laura = output.find("laura").unwrap();
        let bob = output.find("bob").unwrap();
        assert!(laura < bob);
        assert_eq!(output.matches("Enter 'R' to return").count(), 2);
    }
}
