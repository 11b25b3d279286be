//! Single-round practice
//!
//! Practice plays one round on its own. Nothing is added to a running total
//! and the leaderboard is never touched.

use super::GameContext;
use super::console::Console;
use super::round::{RoundIntro, play_round};
use crate::error::Result;
use crate::game::{ROUNDS, RoundConfig, round_by_number};
use std::io::{BufRead, Write};
use tracing::info;

/// Ask which round to practice; `None` when the player returns to the menu
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input.
pub fn choose_practice_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<(usize, &'static RoundConfig)>> {
    console.clear_screen()?;
    console.say("Which round do you want to practice?")?;
    console.say("Practice rounds are not added to your score or the leaderboard.")?;
    console.blank()?;
    for (index, round) in ROUNDS.iter().enumerate() {
        console.say(format!("{} - {}", index + 1, round.name))?;
    }
    console.say("R - Return to the main menu")?;
    console.blank()?;

    loop {
        let choice = console.read_line()?;
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("R") {
            return Ok(None);
        }
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|number| round_by_number(number).map(|round| (number, round)));
        if picked.is_some() {
            return Ok(picked);
        }
        console.say("Invalid input. Please try again.")?;
    }
}

/// Play round `number` as practice and report its points
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input.
pub fn run_practice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut GameContext,
    number: usize,
    config: &RoundConfig,
) -> Result<u32> {
    info!(round = config.name, "practice round");
    let intro = RoundIntro {
        number,
        show_rules: true,
    };
    let report = play_round(console, ctx, config, intro)?;

    console.blank()?;
    console.say(format!(
        "This earns you an additional {} points.",
        report.points
    ))?;
    console.pause()?;
    Ok(report.points)
}
