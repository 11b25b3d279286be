//! Playing one round at the terminal

use super::GameContext;
use super::console::Console;
use crate::core::LetterVerdict;
use crate::error::{GameError, Result};
use crate::game::{
    ABANDON_SENTINEL, RoundConfig, RoundEngine, RoundOutcome, RoundState, RoundVocabulary,
    Submission, score_round,
};
use crate::output::{
    emoji_summary, error_text, render_board, reveal_latest_row, rules_line, write_board,
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// How a round is introduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundIntro {
    /// 1-based position shown in the header
    pub number: usize,
    /// Offer the rules before the first guess
    pub show_rules: bool,
}

/// What a played round produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub points: u32,
    /// `None` when the round could not start
    pub outcome: Option<RoundOutcome>,
}

/// Play one round to completion
///
/// A round whose word lists cannot be loaded is reported and scores zero.
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input, or any output error.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ctx: &mut GameContext,
    config: &RoundConfig,
    intro: RoundIntro,
) -> Result<RoundReport> {
    let vocabulary = match RoundVocabulary::load(config, ctx.words.as_ref()) {
        Ok(vocabulary) => vocabulary,
        Err(e @ (GameError::InputClosed | GameError::Io(_))) => return Err(e),
        Err(e) => {
            warn!(round = config.name, error = %e, "round aborted");
            console.clear_screen()?;
            console.say(format!("ROUND {}: {}", intro.number, config.name))?;
            console.blank()?;
            console.say(error_text(&format!("This round cannot be played: {e}")))?;
            console.blank()?;
            return Ok(RoundReport {
                points: 0,
                outcome: None,
            });
        }
    };

    show_intro(console, config, intro)?;

    let mut engine = RoundEngine::start(config, &vocabulary, &mut ctx.rng);
    let outcome = guess_loop(console, &mut engine)?;
    if matches!(outcome, RoundOutcome::Solved { .. }) {
        console.blank()?;
        for row in emoji_summary(&engine) {
            console.say(row)?;
        }
    }
    let points = score_round(config.shape, config.quota, &outcome);
    info!(round = config.name, points, "round finished");

    Ok(RoundReport {
        points,
        outcome: Some(outcome),
    })
}

fn show_intro<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RoundConfig,
    intro: RoundIntro,
) -> Result<()> {
    console.clear_screen()?;
    console.say(format!("ROUND {}: {}", intro.number, config.name))?;
    console.blank()?;
    console.say(config.description)?;

    if intro.show_rules {
        console.say(
            "If you don't get the word in the allotted number of guesses, you will not get any points.",
        )?;
        console.blank()?;
        console.say(
            "For your viewing pleasure, it is recommended that this game is played in a console whose background colour is dark.",
        )?;
        console.blank()?;
        console.blank()?;
        console.say("Press enter to continue...")?;
        console.say("(If you already know how to play Wordle, enter 'S' to skip the rules.)")?;
        console.blank()?;

        if !console.read_line()?.trim().eq_ignore_ascii_case("S") {
            show_rules(console, config)?;
        }

        console.clear_screen()?;
        console.say(format!(
            "You can type '{ABANDON_SENTINEL}' to rage quit the current level and skip to the next level at any time."
        ))?;
    } else {
        console.blank()?;
    }

    console.say("Enter your first guess:")?;
    console.blank()?;
    Ok(())
}

fn show_rules<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RoundConfig,
) -> Result<()> {
    let word = config
        .shape
        .required_length()
        .map_or_else(|| "word".to_string(), |len| format!("{len}-letter word"));

    console.clear_screen()?;
    console.say("RULES:")?;
    console.blank()?;
    console.say(format!(
        "Type a {word} and press enter. Each letter will be highlighted either..."
    ))?;
    console.blank()?;
    for verdict in [
        LetterVerdict::Absent,
        LetterVerdict::Present,
        LetterVerdict::Exact,
    ] {
        console.say(rules_line(verdict))?;
    }
    console.blank()?;
    console.pause()?;
    Ok(())
}

fn guess_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &mut RoundEngine<'_>,
) -> Result<RoundOutcome> {
    let delay = console.options().reveal_delay;

    loop {
        let line = console.read_line()?;
        match engine.submit(&line) {
            Submission::Rejected(rejection) => {
                console.clear_screen()?;
                console.say(error_text(&rejection.to_string()))?;
                console.blank()?;
                write_board(console.out(), engine)?;
            }
            Submission::Abandoned => {
                let answers: Vec<&str> = engine.targets().iter().map(|t| t.answer().text()).collect();
                match answers.as_slice() {
                    [answer] => console.say(format!("You rage quit. The answer is: {answer}"))?,
                    [rest @ .., last] => console.say(format!(
                        "You rage quit. The answers are: {} and {last}",
                        rest.join(", ")
                    ))?,
                    [] => console.say("You rage quit.")?,
                }
            }
            Submission::Accepted(progress) => {
                console.clear_screen()?;
                console.blank()?;
                let previous = engine.guess_count().saturating_sub(1);
                for row in render_board(engine).iter().take(previous) {
                    console.say(row)?;
                }
                reveal_latest_row(console.out(), engine, delay)?;

                if progress.quota_just_reached {
                    console.say(format!(
                        "That was your last scoring guess. Keep going to find the answer, or type '{ABANDON_SENTINEL}' to move on."
                    ))?;
                }
                if progress.state == RoundState::Solved {
                    let guesses = engine.guess_count();
                    if engine.targets().len() > 1 {
                        console.say(format!("Congrats, you solved both answers in {guesses} guesses!"))?;
                    } else {
                        console.say(format!("Heck yea, you got the correct answer in {guesses} guesses!"))?;
                    }
                }
            }
            Submission::RoundOver => {}
        }

        if let Some(outcome) = engine.outcome() {
            return Ok(outcome);
        }
    }
}
