//! Display functions for the line-based front end

use super::formatters::{KEYBOARD_ROWS, attempt_tiles, key};
use crate::core::Attempt;
use crate::game::{RoundEnd, RoundOutcome, RoundState};
use colored::Colorize;

/// Print the board: every attempt so far and the remaining count
pub fn print_board(state: &RoundState) {
    println!("\n{}", "─".repeat(40).cyan());
    for (i, attempt) in state.attempts().iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bright_black(), attempt_tiles(attempt));
    }
    for _ in state.attempts().len()..state.attempt_limit() {
        println!("     {}", " _ ".repeat(5).bright_black());
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the on-screen keyboard coloured by the round's hints
pub fn print_keyboard(state: &RoundState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| key(letter, state.hints().key_style(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print a single evaluated guess
pub fn print_attempt(attempt: &Attempt) {
    println!("{}   {}", attempt_tiles(attempt), attempt.to_emoji());
}

/// Print the end-of-round banner with the share grid
pub fn print_round_end(end: &RoundEnd, state: &RoundState) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    match end.outcome {
        RoundOutcome::Won => {
            println!(
                "  {} {}",
                "🎉".bold(),
                format!(
                    "{} in {}/{}",
                    end.message(),
                    state.attempts().len(),
                    state.attempt_limit()
                )
                .bright_green()
                .bold()
            );
        }
        _ => println!("  {}", end.message().red().bold()),
    }
    println!();
    for attempt in state.attempts() {
        println!("  {}", attempt.to_emoji());
    }
    println!("{}", "═".repeat(40).bright_cyan());
}
