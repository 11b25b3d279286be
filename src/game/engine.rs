//! Round state machine
//!
//! The engine owns the hidden answers and the guess history of one round. It
//! is driven one line of input at a time and never touches the terminal;
//! callers render its state through the read-only accessors.

use super::round::{RoundConfig, RoundVocabulary};
use crate::core::{Feedback, Word};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Input that abandons the round ("rage quit")
pub const ABANDON_SENTINEL: &str = "RQ";

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    /// Quota spent without solving; guessing continues but earns nothing more
    QuotaExhausted,
    Solved,
    Abandoned,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Abandoned)
    }
}

/// One accepted guess and its feedback against a single answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A hidden answer and the guesses evaluated against it
///
/// Once solved, a target stops receiving guesses.
#[derive(Debug, Clone)]
pub struct Target {
    answer: Word,
    history: Vec<GuessRecord>,
    solved_at: Option<usize>,
}

impl Target {
    fn new(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::new(),
            solved_at: None,
        }
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// 1-based guess number that matched this answer
    #[must_use]
    pub const fn solved_at(&self) -> Option<usize> {
        self.solved_at
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved_at.is_some()
    }
}

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    WrongLength { expected: usize },
    NotInVocabulary { guess: String, noun: &'static str },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected } => write!(f, "Please enter a word of length {expected}"),
            Self::NotInVocabulary { guess, noun } => write!(f, "{guess} is not a {noun}."),
        }
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub state: RoundState,
    /// Indices of targets this guess solved
    pub newly_solved: Vec<usize>,
    /// True only for the guess that used up the quota without solving
    pub quota_just_reached: bool,
}

/// Result of feeding one line of input to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Progress),
    Rejected(Rejection),
    Abandoned,
    /// The round had already finished; nothing changed
    RoundOver,
}

/// How a finished round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Guess number at which each target was solved, in target order
    Solved { solved_at: Vec<usize> },
    Abandoned,
}

/// Drives the guess loop of one round
pub struct RoundEngine<'a> {
    config: &'a RoundConfig,
    vocabulary: &'a RoundVocabulary,
    targets: Vec<Target>,
    guess_count: usize,
    state: RoundState,
}

impl<'a> RoundEngine<'a> {
    /// Start a round with answers drawn from the vocabulary
    pub fn start<R: Rng + ?Sized>(
        config: &'a RoundConfig,
        vocabulary: &'a RoundVocabulary,
        rng: &mut R,
    ) -> Self {
        let answers = vocabulary.draw_answers(config.shape.answer_count(), rng);
        Self::with_answers(config, vocabulary, answers)
    }

    /// Start a round with known answers
    #[must_use]
    pub fn with_answers(
        config: &'a RoundConfig,
        vocabulary: &'a RoundVocabulary,
        answers: Vec<Word>,
    ) -> Self {
        debug!(round = config.name, answers = ?answers, "round started");
        Self {
            config,
            vocabulary,
            targets: answers.into_iter().map(Target::new).collect(),
            guess_count: 0,
            state: RoundState::AwaitingGuess,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        self.config
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Accepted guesses so far, including any past the quota
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Final outcome, once the round is over
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Solved => Some(RoundOutcome::Solved {
                solved_at: self.targets.iter().filter_map(Target::solved_at).collect(),
            }),
            RoundState::Abandoned => Some(RoundOutcome::Abandoned),
            RoundState::AwaitingGuess | RoundState::QuotaExhausted => None,
        }
    }

    /// Feed one line of player input to the round
    ///
    /// Input is trimmed and uppercased. Rejected input does not count as a
    /// guess and leaves the history untouched.
    pub fn submit(&mut self, input: &str) -> Submission {
        if self.state.is_terminal() {
            return Submission::RoundOver;
        }

        let normalized = input.trim().to_ascii_uppercase();
        if normalized == ABANDON_SENTINEL {
            info!(round = self.config.name, guesses = self.guess_count, "round abandoned");
            self.state = RoundState::Abandoned;
            return Submission::Abandoned;
        }

        match self.validate(&normalized) {
            Ok(guess) => Submission::Accepted(self.apply(&guess)),
            Err(rejection) => {
                debug!(input = %normalized, reason = %rejection, "guess rejected");
                Submission::Rejected(rejection)
            }
        }
    }

    fn validate(&self, normalized: &str) -> Result<Word, Rejection> {
        if let Some(expected) = self.config.shape.required_length()
            && normalized.chars().count() != expected
        {
            return Err(Rejection::WrongLength { expected });
        }

        let unknown = || Rejection::NotInVocabulary {
            guess: normalized.to_string(),
            noun: self.config.vocabulary_noun,
        };
        let word = Word::new(normalized).map_err(|_| unknown())?;
        if self.vocabulary.contains(&word) {
            Ok(word)
        } else {
            Err(unknown())
        }
    }

    fn apply(&mut self, guess: &Word) -> Progress {
        self.guess_count += 1;
        let guess_number = self.guess_count;

        let mut newly_solved = Vec::new();
        for (index, target) in self.targets.iter_mut().enumerate() {
            if target.is_solved() {
                continue;
            }
            let feedback = Feedback::evaluate(guess, &target.answer);
            target.history.push(GuessRecord {
                guess: guess.clone(),
                feedback,
            });
            if *guess == target.answer {
                target.solved_at = Some(guess_number);
                newly_solved.push(index);
            }
        }

        let mut quota_just_reached = false;
        if self.targets.iter().all(Target::is_solved) {
            info!(round = self.config.name, guesses = guess_number, "round solved");
            self.state = RoundState::Solved;
        } else if self.state == RoundState::AwaitingGuess && guess_number >= self.config.quota {
            info!(round = self.config.name, quota = self.config.quota, "guess quota exhausted");
            self.state = RoundState::QuotaExhausted;
            quota_just_reached = true;
        }

        debug!(guess = %guess, number = guess_number, solved = ?newly_solved, "guess accepted");
        Progress {
            state: self.state,
            newly_solved,
            quota_just_reached,
        }
    }
}
