//! Main menu

use super::GameContext;
use super::console::Console;
use super::leaderboard::view_leaderboard;
use super::practice::{choose_practice_round, run_practice};
use super::show::run_show;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Start,
    Choose,
    Leaderboard,
    Quit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "S" => Some(Self::Start),
            "C" => Some(Self::Choose),
            "L" => Some(Self::Leaderboard),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.clear_screen()?;
    console.say("*************************************************")?;
    console.say("WELCOME TO THE WORLD'S FIRST WORDLE GAME SHOW!")?;
    console.say("*************************************************")?;
    console.blank()?;
    console.say("S - Start the game show")?;
    console.say("C - Choose a round to practice")?;
    console.say("L - View the leaderboard")?;
    console.say("Q - Quit")?;
    console.blank()?;
    Ok(())
}

/// Run the main menu until the player quits
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input, or any output error.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut GameContext,
) -> Result<()> {
    show_menu(console)?;
    loop {
        let input = console.read_line()?;
        let Some(choice) = MenuChoice::parse(&input) else {
            console.say("Invalid input. Please try again.")?;
            continue;
        };
        debug!(?choice, "menu");

        match choice {
            MenuChoice::Start => {
                run_show(console, ctx)?;
            }
            MenuChoice::Choose => {
                if let Some((number, config)) = choose_practice_round(console)? {
                    run_practice(console, ctx, number, config)?;
                }
            }
            MenuChoice::Leaderboard => view_leaderboard(console, ctx)?,
            MenuChoice::Quit => {
                console.say("Bye bye!")?;
                return Ok(());
            }
        }
        show_menu(console)?;
    }
}
