//! Board rendering
//!
//! A board is a read-only projection of a round: one row per accepted guess,
//! one column per answer. Columns sit side by side separated by a fixed gap,
//! and an answer solved earlier shows blank padding in later rows.

use super::style::styled_letter;
use crate::game::{GuessRecord, RoundEngine};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Space between the columns of a multi-answer board
pub const BOARD_GAP: &str = "               ";

/// Space between the columns of an emoji summary
const SUMMARY_GAP: &str = "   ";

/// Render one guess record as coloured letters
#[must_use]
pub fn render_record(record: &GuessRecord) -> String {
    record
        .guess
        .text()
        .chars()
        .zip(record.feedback.verdicts())
        .map(|(letter, verdict)| styled_letter(letter, *verdict).to_string())
        .collect()
}

/// Records shown in row `index`, one slot per answer; trailing empty slots dropped
fn row_cells<'e>(engine: &'e RoundEngine<'_>, index: usize) -> Vec<Option<&'e GuessRecord>> {
    let mut cells: Vec<Option<&GuessRecord>> = engine
        .targets()
        .iter()
        .map(|target| target.history().get(index))
        .collect();
    while cells.last().is_some_and(Option::is_none) {
        cells.pop();
    }
    cells
}

fn blank_cell(engine: &RoundEngine<'_>) -> String {
    " ".repeat(engine.config().shape.required_length().unwrap_or(0))
}

/// Render row `index` of the board
#[must_use]
pub fn render_row(engine: &RoundEngine<'_>, index: usize) -> String {
    row_cells(engine, index)
        .into_iter()
        .map(|cell| cell.map_or_else(|| blank_cell(engine), render_record))
        .collect::<Vec<_>>()
        .join(BOARD_GAP)
}

/// Render every row of the board
#[must_use]
pub fn render_board(engine: &RoundEngine<'_>) -> Vec<String> {
    (0..engine.guess_count())
        .map(|index| render_row(engine, index))
        .collect()
}

/// Colour-only copy of the board, one emoji row per guess
#[must_use]
pub fn emoji_summary(engine: &RoundEngine<'_>) -> Vec<String> {
    // Emoji squares are two columns wide
    let blank = "  ".repeat(engine.config().shape.required_length().unwrap_or(0));
    (0..engine.guess_count())
        .map(|index| {
            row_cells(engine, index)
                .into_iter()
                .map(|cell| cell.map_or_else(|| blank.clone(), |record| record.feedback.to_emoji()))
                .collect::<Vec<_>>()
                .join(SUMMARY_GAP)
        })
        .collect()
}

/// Write every row of the board
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, engine: &RoundEngine<'_>) -> io::Result<()> {
    for row in render_board(engine) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Write the newest row letter by letter, pausing `delay` after each letter
///
/// # Errors
///
/// Returns any error from the writer.
pub fn reveal_latest_row<W: Write>(
    out: &mut W,
    engine: &RoundEngine<'_>,
    delay: Duration,
) -> io::Result<()> {
    let Some(index) = engine.guess_count().checked_sub(1) else {
        return Ok(());
    };

    for (column, cell) in row_cells(engine, index).into_iter().enumerate() {
        if column > 0 {
            write!(out, "{BOARD_GAP}")?;
        }
        let Some(record) = cell else {
            write!(out, "{}", blank_cell(engine))?;
            continue;
        };
        for (letter, verdict) in record.guess.text().chars().zip(record.feedback.verdicts()) {
            write!(out, "{}", styled_letter(letter, *verdict))?;
            if !delay.is_zero() {
                out.flush()?;
                thread::sleep(delay);
            }
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{ROUNDS, RoundVocabulary};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for end in chars.by_ref() {
                    if end == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn single_board_has_one_row_per_guess() {
        let vocabulary = RoundVocabulary::new(words(&["crane"]), words(&["slate", "irate"]));
        let mut engine = RoundEngine::with_answers(&ROUNDS[0], &vocabulary, words(&["crane"]));
        engine.submit("slate");
        engine.submit("irate");

        let rows: Vec<String> = render_board(&engine).iter().map(|r| strip_ansi(r)).collect();
        assert_eq!(rows, ["SLATE", "IRATE"]);
    }

    #[test]
    fn dual_board_pads_solved_column() {
        let vocabulary = RoundVocabulary::new(words(&["crane", "slate"]), words(&["irate"]));
        let mut engine =
            RoundEngine::with_answers(&ROUNDS[3], &vocabulary, words(&["crane", "slate"]));
        engine.submit("crane");
        engine.submit("irate");

        let rows: Vec<String> = render_board(&engine).iter().map(|r| strip_ansi(r)).collect();
        assert_eq!(rows[0], format!("CRANE{BOARD_GAP}CRANE"));
        assert_eq!(rows[1], format!("     {BOARD_GAP}IRATE"));
    }

    #[test]
    fn dual_board_drops_trailing_blank_column() {
        let vocabulary = RoundVocabulary::new(words(&["crane", "slate"]), words(&["irate"]));
        let mut engine =
            RoundEngine::with_answers(&ROUNDS[3], &vocabulary, words(&["crane", "slate"]));
        engine.submit("slate");
        engine.submit("irate");

        let rows: Vec<String> = render_board(&engine).iter().map(|r| strip_ansi(r)).collect();
        assert_eq!(rows[1], "IRATE");
    }

    #[test]
    fn reveal_matches_rendered_row() {
        let vocabulary = RoundVocabulary::new(words(&["crane", "slate"]), words(&["irate"]));
        let mut engine =
            RoundEngine::with_answers(&ROUNDS[3], &vocabulary, words(&["crane", "slate"]));
        engine.submit("crane");
        engine.submit("irate");

        let mut out = Vec::new();
        reveal_latest_row(&mut out, &engine, Duration::ZERO).unwrap();
        let revealed = strip_ansi(&String::from_utf8(out).unwrap());
        assert_eq!(revealed, format!("{}\n", strip_ansi(&render_row(&engine, 1))));
    }

    #[test]
    fn emoji_summary_mirrors_board_layout() {
        let vocabulary = RoundVocabulary::new(words(&["crane", "slate"]), words(&["irate"]));
        let mut engine =
            RoundEngine::with_answers(&ROUNDS[3], &vocabulary, words(&["crane", "slate"]));
        engine.submit("crane");
        engine.submit("slate");

        let summary = emoji_summary(&engine);
        assert_eq!(summary[0], format!("🟩🟩🟩🟩🟩{SUMMARY_GAP}⬜⬜🟩⬜🟩"));
        assert_eq!(summary[1], format!("{}{SUMMARY_GAP}🟩🟩🟩🟩🟩", " ".repeat(10)));
    }

    #[test]
    fn reveal_on_empty_board_writes_nothing() {
        let vocabulary = RoundVocabulary::new(words(&["crane"]), Vec::new());
        let engine = RoundEngine::with_answers(&ROUNDS[0], &vocabulary, words(&["crane"]));
        let mut out = Vec::new();
        reveal_latest_row(&mut out, &engine, Duration::ZERO).unwrap();
        assert!(out.is_empty());
    }
}
