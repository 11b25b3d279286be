//! Round definitions
//!
//! Every round is described by data: its shape, guess quota and the word
//! lists it draws from. One engine plays all of them.

use crate::core::Word;
use crate::error::{GameError, Result};
use crate::wordlists::WordSource;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Guess quota shared by every built-in round
pub const DEFAULT_QUOTA: usize = 6;

/// Structural variant of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundShape {
    /// One answer of a known length
    Fixed { length: usize },
    /// One answer whose length the player is not told
    Variable,
    /// Two answers of the same length, solved with shared guesses
    Dual { length: usize },
}

impl RoundShape {
    /// Number of hidden answers
    #[must_use]
    pub const fn answer_count(self) -> usize {
        match self {
            Self::Fixed { .. } | Self::Variable => 1,
            Self::Dual { .. } => 2,
        }
    }

    /// Required guess length, `None` for variable-length rounds
    #[must_use]
    pub const fn required_length(self) -> Option<usize> {
        match self {
            Self::Fixed { length } | Self::Dual { length } => Some(length),
            Self::Variable => None,
        }
    }
}

/// Static description of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub shape: RoundShape,
    /// Guesses that can still earn points
    pub quota: usize,
    /// Word list the answers are drawn from
    pub answer_list: &'static str,
    /// Word list of accepted guesses (answers are always accepted too)
    pub guess_list: &'static str,
    /// What a valid guess is called in rejection messages
    pub vocabulary_noun: &'static str,
}

/// The five rounds of the game show, in play order
pub const ROUNDS: [RoundConfig; 5] = [
    RoundConfig {
        name: "CLASSIC WORDLE",
        description: "You will be given a 5-letter word and you must guess it within 6 tries.",
        shape: RoundShape::Fixed { length: 5 },
        quota: DEFAULT_QUOTA,
        answer_list: "wordlist_5_answers",
        guess_list: "wordlist_5_all",
        vocabulary_noun: "word",
    },
    RoundConfig {
        name: "4-LETTER WORDLE",
        description: "You have 6 tries to guess the word.",
        shape: RoundShape::Fixed { length: 4 },
        quota: DEFAULT_QUOTA,
        answer_list: "wordlist_4_answers",
        guess_list: "wordlist_4_all",
        vocabulary_noun: "word",
    },
    RoundConfig {
        name: "6-LETTER WORDLE",
        description: "You have 6 tries to guess the word.",
        shape: RoundShape::Fixed { length: 6 },
        quota: DEFAULT_QUOTA,
        answer_list: "wordlist_6_answers",
        guess_list: "wordlist_6_all",
        vocabulary_noun: "word",
    },
    RoundConfig {
        name: "DOUBLE WORDLE",
        description: "You have six tries to guess two 5-letter words. \
                      Each guess will be used on both words simultaneously.",
        shape: RoundShape::Dual { length: 5 },
        quota: DEFAULT_QUOTA,
        answer_list: "wordlist_5_answers",
        guess_list: "wordlist_5_all",
        vocabulary_noun: "word",
    },
    RoundConfig {
        name: "SPECIAL EDITION - JAVA KEYWORDS",
        description: "The answer of this special round will be one of the Java reserved words. \
                      You will have 6 tries to guess it. \
                      You do not know how many letters the answer contains.",
        shape: RoundShape::Variable,
        quota: DEFAULT_QUOTA,
        answer_list: "wordlist_java_keywords",
        guess_list: "wordlist_java_keywords",
        vocabulary_noun: "Java reserved word",
    },
];

/// Look up a built-in round by its 1-based number
#[must_use]
pub fn round_by_number(number: usize) -> Option<&'static RoundConfig> {
    number.checked_sub(1).and_then(|i| ROUNDS.get(i))
}

/// The words a round plays with
#[derive(Debug, Clone)]
pub struct RoundVocabulary {
    answers: Vec<Word>,
    guesses: FxHashSet<Word>,
}

impl RoundVocabulary {
    /// Build a vocabulary from already-loaded lists
    ///
    /// Duplicate answers are collapsed, keeping first occurrence order.
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();

        let mut guesses: FxHashSet<Word> = guesses.into_iter().collect();
        guesses.extend(answers.iter().cloned());

        Self { answers, guesses }
    }

    /// Load both lists a round needs from `source`
    ///
    /// # Errors
    ///
    /// Propagates list loading failures, and returns
    /// `GameError::NotEnoughAnswers` when the answer pool cannot supply the
    /// round's distinct answers.
    pub fn load(config: &RoundConfig, source: &dyn WordSource) -> Result<Self> {
        let answers = source.load_words(config.answer_list)?;
        let guesses = if config.guess_list == config.answer_list {
            answers.clone()
        } else {
            source.load_words(config.guess_list)?
        };

        let vocabulary = Self::new(answers, guesses);
        let needed = config.shape.answer_count();
        if vocabulary.answers.len() < needed {
            return Err(GameError::NotEnoughAnswers {
                identifier: config.answer_list.to_string(),
                needed,
                found: vocabulary.answers.len(),
            });
        }
        Ok(vocabulary)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    /// Draw `count` distinct answers uniformly at random
    ///
    /// Returns fewer than `count` only when the pool is too small, which
    /// `load` already rules out.
    pub fn draw_answers<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Word> {
        self.answers.choose_multiple(rng, count).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EmbeddedWordSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn shapes_report_answer_count_and_length() {
        assert_eq!(RoundShape::Fixed { length: 5 }.answer_count(), 1);
        assert_eq!(RoundShape::Variable.answer_count(), 1);
        assert_eq!(RoundShape::Dual { length: 5 }.answer_count(), 2);
        assert_eq!(RoundShape::Variable.required_length(), None);
        assert_eq!(RoundShape::Dual { length: 5 }.required_length(), Some(5));
    }

    #[test]
    fn round_numbers_are_one_based() {
        assert_eq!(round_by_number(1).unwrap().name, "CLASSIC WORDLE");
        assert_eq!(round_by_number(5).unwrap().shape, RoundShape::Variable);
        assert!(round_by_number(0).is_none());
        assert!(round_by_number(6).is_none());
    }

    #[test]
    fn every_built_in_round_loads_from_embedded_lists() {
        for config in &ROUNDS {
            let vocabulary = RoundVocabulary::load(config, &EmbeddedWordSource).unwrap();
            assert!(vocabulary.answers().len() >= config.shape.answer_count());
            if let Some(len) = config.shape.required_length() {
                assert!(vocabulary.answers().iter().all(|w| w.len() == len), "{}", config.name);
            }
        }
    }

    #[test]
    fn answers_are_always_guessable() {
        let vocabulary = RoundVocabulary::new(words(&["crane"]), words(&["slate"]));
        assert!(vocabulary.contains(&Word::new("crane").unwrap()));
        assert!(vocabulary.contains(&Word::new("slate").unwrap()));
        assert!(!vocabulary.contains(&Word::new("irate").unwrap()));
    }

    #[test]
    fn duplicate_answers_collapse() {
        let vocabulary = RoundVocabulary::new(words(&["crane", "crane", "slate"]), Vec::new());
        assert_eq!(vocabulary.answers().len(), 2);
    }

    #[test]
    fn dual_draw_is_distinct_and_seeded() {
        let vocabulary = RoundVocabulary::new(words(&["crane", "slate", "irate", "grate"]), Vec::new());
        let first = vocabulary.draw_answers(2, &mut StdRng::seed_from_u64(7));
        let again = vocabulary.draw_answers(2, &mut StdRng::seed_from_u64(7));
        assert_eq!(first.len(), 2);
        assert_ne!(first[0], first[1]);
        assert_eq!(first, again);
    }

    #[test]
    fn dual_round_rejects_single_word_pool() {
        struct OneWord;
        impl WordSource for OneWord {
            fn load_words(&self, _identifier: &str) -> Result<Vec<Word>> {
                Ok(vec![Word::new("crane").unwrap(), Word::new("crane").unwrap()])
            }
        }

        let err = RoundVocabulary::load(&ROUNDS[3], &OneWord).unwrap_err();
        assert!(matches!(err, GameError::NotEnoughAnswers { needed: 2, found: 1, .. }));
    }
}
