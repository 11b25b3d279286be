//! Wordle Game Show
//!
//! A terminal game show of Wordle rounds: classic 5-letter, 4- and 6-letter
//! variants, a double round played against two answers at once, and a
//! special round of unknown length. Points reward solving early and the best
//! totals are kept on a leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_gameshow::core::{Feedback, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.to_string(), "Y-YY-");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Rounds, scoring and the leaderboard
pub mod game;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;

pub mod config;
pub mod error;
pub mod logging;
