//! Core domain types for the game
//!
//! Words, per-letter classifications and the guess evaluator. Everything
//! here is pure and has no knowledge of rounds, dictionaries or terminals.

mod attempt;
mod evaluator;
mod word;

pub use attempt::{Attempt, LetterClassification};
pub use evaluator::{evaluate, evaluate_str};
pub use word::{WORD_LENGTH, Word, WordError};
