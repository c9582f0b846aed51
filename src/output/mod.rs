//! Terminal output formatting
//!
//! Display utilities for the line-based front end and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_attempt, print_board, print_keyboard, print_round_end};
