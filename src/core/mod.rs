//! Core domain types for the game show
//!
//! This module contains the word and feedback types. Everything here is pure
//! and has no knowledge of rounds, scoring, or the terminal.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterVerdict};
pub use word::{Word, WordError};
