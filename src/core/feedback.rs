//! Per-letter guess feedback
//!
//! Each letter of a guess receives one of three verdicts:
//! - Exact (green): right letter, right position
//! - Present (orange): letter occurs elsewhere in the answer
//! - Absent (white): no unclaimed occurrence of the letter remains
//!
//! Guesses and answers may differ in length (variable-length rounds), so the
//! feedback is a vector sized to the guess rather than a fixed encoding.

use super::Word;
use std::fmt;

/// Verdict for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    Exact,
    Present,
    Absent,
}

impl LetterVerdict {
    /// Single-character code: G, Y or -
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// True for Exact and Present
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Feedback for one guess against one answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    /// Evaluate `guess` against `answer`
    ///
    /// Duplicate letters are handled by consumption: every occurrence of a
    /// letter in the answer can justify at most one non-Absent verdict.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches over the overlapping prefix and
    ///    remove them from the available pool
    /// 2. Second pass: left to right, mark Present while the pool still holds
    ///    that letter, consuming it; everything else is Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_gameshow::core::{Feedback, LetterVerdict::{Absent, Exact, Present}, Word};
    ///
    /// let guess = Word::new("abcde").unwrap();
    /// let answer = Word::new("edcba").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer);
    /// assert_eq!(feedback.verdicts(), &[Present, Present, Exact, Present, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![LetterVerdict::Absent; guess_letters.len()];
        let mut answer_available = answer.letter_counts();

        // First pass: exact matches, positions past the answer never qualify
        for (i, (g, a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = LetterVerdict::Exact;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, letter) in guess_letters.iter().enumerate() {
            if result[i] == LetterVerdict::Exact {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The verdicts, one per guess letter
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Number of verdicts (equals the guess length)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the guess had no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every verdict is Exact
    ///
    /// Callers compare lengths separately: a guess that is a strict prefix of
    /// the answer is all-Exact but not a solve.
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|v| *v == LetterVerdict::Exact)
    }

    /// Colour-only rendering, one square per letter
    ///
    /// # Examples
    /// ```
    /// use wordle_gameshow::core::{Feedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let answer = Word::new("floor").unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &answer).to_emoji(), "🟨🟨⬜🟩⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|v| match v {
                LetterVerdict::Exact => '🟩',
                LetterVerdict::Present => '🟨',
                LetterVerdict::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Feedback::evaluate(&guess, &answer).to_string()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(eval("abcde", "fghij"), "-----");
    }

    #[test]
    fn feedback_identical_words_all_exact() {
        for word in ["crane", "speed", "aaaaa", "do", "synchronized"] {
            let w = Word::new(word).unwrap();
            let feedback = Feedback::evaluate(&w, &w);
            assert!(feedback.is_all_exact());
            assert_eq!(feedback.len(), word.len());
        }
    }

    #[test]
    fn feedback_reversed_word() {
        assert_eq!(eval("abcde", "edcba"), "YYGYY");
    }

    #[test]
    fn feedback_duplicate_letters_consume_answer_occurrences() {
        // SPEED vs ERASE: S present, both Es claim ERASE's two Es, P and D absent
        assert_eq!(eval("speed", "erase"), "Y-YY-");
    }

    #[test]
    fn feedback_exact_match_claims_before_earlier_duplicate() {
        // ROBOT vs FLOOR: second O is exact, first O takes FLOOR's other O
        assert_eq!(eval("robot", "floor"), "YY-G-");
    }

    #[test]
    fn feedback_later_duplicates_absent_when_answer_runs_out() {
        // One E in the answer: only the first E is marked
        assert_eq!(eval("eerie", "speak"), "Y----");
        // The exact E claims the only E, so the earlier Es are absent
        assert_eq!(eval("geese", "those"), "---GG");
    }

    #[test]
    fn feedback_guess_longer_than_answer() {
        // Positions past the answer can only be Present or Absent
        assert_eq!(eval("double", "do"), "GG----");
        assert_eq!(eval("import", "for"), "---YY-");
    }

    #[test]
    fn feedback_guess_shorter_than_answer() {
        let feedback = Feedback::evaluate(&Word::new("do").unwrap(), &Word::new("double").unwrap());
        assert!(feedback.is_all_exact());
        assert_eq!(feedback.len(), 2);
    }

    #[test]
    fn feedback_letter_hits_never_exceed_answer_count() {
        // Every ordered pair of 3-letter words over a 3-letter alphabet
        let alphabet = ["A", "B", "C"];
        let mut words = Vec::new();
        for a in alphabet {
            for b in alphabet {
                for c in alphabet {
                    words.push(Word::new(format!("{a}{b}{c}")).unwrap());
                }
            }
        }

        for guess in &words {
            for answer in &words {
                let feedback = Feedback::evaluate(guess, answer);
                assert_eq!(feedback.len(), guess.len());
                for letter in b"ABC" {
                    let hits = guess
                        .letters()
                        .iter()
                        .zip(feedback.verdicts())
                        .filter(|(l, v)| *l == letter && v.is_hit())
                        .count();
                    let available = answer.letters().iter().filter(|l| *l == letter).count();
                    assert!(hits <= available, "{guess} vs {answer}: {feedback}");
                }
            }
        }
    }

    #[test]
    fn feedback_emoji_follows_verdicts() {
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        assert_eq!(Feedback::evaluate(&guess, &answer).to_emoji(), "🟨⬜🟨🟨⬜");

        let word = Word::new("do").unwrap();
        assert_eq!(Feedback::evaluate(&word, &word).to_emoji(), "🟩🟩");
    }
}
