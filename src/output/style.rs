//! Terminal styles for verdicts and messages

use crate::core::LetterVerdict;
use colored::{ColoredString, Colorize};

/// Style one guess letter according to its verdict
#[must_use]
pub fn styled_letter(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = letter.to_string();
    match verdict {
        LetterVerdict::Exact => text.bright_green().bold(),
        LetterVerdict::Present => text.truecolor(255, 165, 0).bold(),
        LetterVerdict::Absent => text.bright_white().bold(),
    }
}

/// Colour name shown in the rules for each verdict
#[must_use]
pub const fn verdict_label(verdict: LetterVerdict) -> &'static str {
    match verdict {
        LetterVerdict::Exact => "GREEN",
        LetterVerdict::Present => "ORANGE",
        LetterVerdict::Absent => "WHITE",
    }
}

/// One rules line, styled in the colour it describes
#[must_use]
pub fn rules_line(verdict: LetterVerdict) -> ColoredString {
    let explanation = match verdict {
        LetterVerdict::Exact => "this letter exists in the word and is in the right location.",
        LetterVerdict::Present => {
            "this letter exists in the word but is not in the right location."
        }
        LetterVerdict::Absent => "this letter does not exist in the word.",
    };
    let text = format!("{}: {explanation}", verdict_label(verdict));
    match verdict {
        LetterVerdict::Exact => text.bright_green().bold(),
        LetterVerdict::Present => text.truecolor(255, 165, 0).bold(),
        LetterVerdict::Absent => text.bright_white().bold(),
    }
}

/// Style for problems reported to the player
#[must_use]
pub fn error_text(text: &str) -> ColoredString {
    text.red()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_letter_keeps_the_letter() {
        for verdict in [
            LetterVerdict::Exact,
            LetterVerdict::Present,
            LetterVerdict::Absent,
        ] {
            assert!(styled_letter('Q', verdict).to_string().contains('Q'));
        }
    }

    #[test]
    fn rules_lines_name_each_colour() {
        assert!(rules_line(LetterVerdict::Exact).to_string().contains("GREEN"));
        assert!(rules_line(LetterVerdict::Present).to_string().contains("ORANGE"));
        assert!(rules_line(LetterVerdict::Absent).to_string().contains("WHITE"));
    }
}
