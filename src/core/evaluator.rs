//! Guess evaluation
//!
//! Implements the game's feedback rules, including proper handling of
//! duplicate letters: a guessed letter is only marked `Present` while the
//! target still has an unmatched occurrence of it.

use super::attempt::{Attempt, LetterClassification};
use super::word::{WORD_LENGTH, Word};
use crate::error::GameError;

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove them from
///    the pool of target letters
/// 2. Second pass: mark remaining positions `Present` while the pool still
///    holds that letter, otherwise `NotFound`
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterClassification::*, Word, evaluate};
///
/// let guess = Word::new("erase").unwrap();
/// let target = Word::new("speed").unwrap();
/// let attempt = evaluate(&guess, &target);
///
/// assert_eq!(attempt.classes(), &[Present, NotFound, NotFound, Present, Present]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Attempt {
    let mut result = [LetterClassification::NotFound; WORD_LENGTH];
    let mut target_available = target.char_counts();

    // First pass: exact position matches
    for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = LetterClassification::Correct;
            if let Some(count) = target_available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an unmatched occurrence remains
    for (i, letter) in guess.chars().iter().enumerate() {
        if result[i] == LetterClassification::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(letter)
            && *count > 0
        {
            result[i] = LetterClassification::Present;
            *count -= 1;
        }
    }

    Attempt::new(*guess, result)
}

/// Evaluate two raw strings
///
/// Both strings are parsed as words. Mismatched lengths are reported as
/// [`GameError::InvalidGuessLength`] before any parsing happens.
///
/// # Errors
/// Returns `InvalidGuessLength` when the lengths differ and `InvalidWord`
/// when either side is not a valid five-letter word.
pub fn evaluate_str(guess: &str, target: &str) -> Result<Attempt, GameError> {
    let guess_len = guess.chars().count();
    let target_len = target.chars().count();
    if guess_len != target_len {
        return Err(GameError::InvalidGuessLength {
            expected: target_len,
            actual: guess_len,
        });
    }

    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(evaluate(&guess, &target))
}
