//! Word lists for the game show rounds
//!
//! Lists are addressed by identifier (for example `wordlist_5_answers`). They
//! come either from a directory of text files or from the copies embedded in
//! the binary at build time.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_LISTS, embedded_list};
pub use loader::{DirectoryWordSource, EmbeddedWordSource, WordSource, parse_word_list};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn lengths(identifier: &str) -> HashSet<usize> {
        EmbeddedWordSource
            .load_words(identifier)
            .unwrap()
            .iter()
            .map(crate::core::Word::len)
            .collect()
    }

    #[test]
    fn fixed_length_lists_have_uniform_lengths() {
        for (identifier, len) in [
            ("wordlist_4_answers", 4),
            ("wordlist_4_all", 4),
            ("wordlist_5_answers", 5),
            ("wordlist_5_all", 5),
            ("wordlist_6_answers", 6),
            ("wordlist_6_all", 6),
        ] {
            assert_eq!(lengths(identifier), HashSet::from([len]), "{identifier}");
        }
    }

    #[test]
    fn java_keywords_vary_in_length() {
        assert!(lengths("wordlist_java_keywords").len() > 1);
    }

    #[test]
    fn answers_subset_of_guessable_words() {
        for (answers, all) in [
            ("wordlist_4_answers", "wordlist_4_all"),
            ("wordlist_5_answers", "wordlist_5_all"),
            ("wordlist_6_answers", "wordlist_6_all"),
        ] {
            let allowed: HashSet<_> = EmbeddedWordSource.load_words(all).unwrap().into_iter().collect();
            for answer in EmbeddedWordSource.load_words(answers).unwrap() {
                assert!(allowed.contains(&answer), "{answer} missing from {all}");
            }
        }
    }

    #[test]
    fn every_embedded_list_is_reachable() {
        for (identifier, _) in EMBEDDED_LISTS {
            assert!(embedded_list(identifier).is_some());
        }
    }
}
