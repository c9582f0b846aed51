//! One-shot guess evaluation
//!
//! Evaluates a single guess against a chosen target and prints the feedback.

use crate::core::{Attempt, LetterClassification, evaluate_str};
use crate::error::GameError;
use crate::output::formatters::attempt_to_emoji;
use crate::output::print_attempt;

/// Result of checking one guess
pub struct CheckResult {
    pub attempt: Attempt,
    pub correct: usize,
    pub present: usize,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, GameError> {
    let attempt = evaluate_str(guess, target)?;
    Ok(CheckResult {
        attempt,
        correct: attempt.count(LetterClassification::Correct),
        present: attempt.count(LetterClassification::Present),
    })
}

/// Print a check result
pub fn print_check_result(result: &CheckResult) {
    print_attempt(&result.attempt);
    println!(
        "{} correct, {} present  {}",
        result.correct,
        result.present,
        attempt_to_emoji(&result.attempt)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_counts_feedback() {
        let result = check_guess("erase", "speed").unwrap();
        assert_eq!(result.correct, 0);
        assert_eq!(result.present, 3);
    }

    #[test]
    fn check_rejects_mismatched_lengths() {
        assert!(matches!(
            check_guess("cranes", "crane"),
            Err(GameError::InvalidGuessLength { .. })
        ));
    }
}
