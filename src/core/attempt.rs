//! Per-letter feedback and evaluated guesses
//!
//! Each position of a submitted guess receives one classification:
//! - `NotFound`: the letter has no unmatched occurrence left in the target
//! - `Present`: the letter occurs in the target at another position
//! - `Correct`: the letter matches the target at this position
//!
//! Classifications are ordered `NotFound < Present < Correct`, which is the
//! precedence used when hints from several guesses are combined.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterClassification {
    NotFound,
    Present,
    Correct,
}

impl LetterClassification {
    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::NotFound => '⬜',
        }
    }

    /// CSS-like class name, as used by keyboard themes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::NotFound => "not-found",
        }
    }
}

impl fmt::Display for LetterClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A submitted guess together with its evaluation
///
/// Immutable once created; produced by [`crate::core::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    word: Word,
    classes: [LetterClassification; WORD_LENGTH],
}

impl Attempt {
    pub(crate) const fn new(word: Word, classes: [LetterClassification; WORD_LENGTH]) -> Self {
        Self { word, classes }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[LetterClassification; WORD_LENGTH] {
        &self.classes
    }

    /// Iterate over (letter, classification) pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterClassification)> + '_ {
        self.word
            .chars()
            .iter()
            .copied()
            .zip(self.classes.iter().copied())
    }

    /// True iff every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.classes
            .iter()
            .all(|&class| class == LetterClassification::Correct)
    }

    /// Number of positions with the given classification
    #[must_use]
    pub fn count(&self, class: LetterClassification) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }

    /// Convert the classifications to an emoji string like "⬜⬜🟨⬜🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, evaluate};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// assert_eq!(evaluate(&guess, &target).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classes.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClassification::{Correct, NotFound, Present};

    #[test]
    fn classification_precedence_order() {
        assert!(Correct > Present);
        assert!(Present > NotFound);
        assert_eq!(Correct.max(NotFound), Correct);
    }

    #[test]
    fn attempt_win_detection() {
        let word = Word::new("crane").unwrap();
        let win = Attempt::new(word, [Correct; WORD_LENGTH]);
        let near = Attempt::new(word, [Correct, Correct, Correct, Correct, Present]);

        assert!(win.is_win());
        assert!(!near.is_win());
        assert_eq!(near.count(Correct), 4);
        assert_eq!(near.count(Present), 1);
    }

    #[test]
    fn attempt_letters_pairs_positions() {
        let word = Word::new("slate").unwrap();
        let attempt = Attempt::new(word, [NotFound, NotFound, Present, NotFound, Present]);
        let pairs: Vec<_> = attempt.letters().collect();

        assert_eq!(pairs[0], (b'S', NotFound));
        assert_eq!(pairs[2], (b'A', Present));
        assert_eq!(pairs[4], (b'E', Present));
    }

    #[test]
    fn attempt_display() {
        let word = Word::new("crane").unwrap();
        let attempt = Attempt::new(word, [Correct, Present, NotFound, NotFound, Correct]);
        assert_eq!(attempt.to_string(), "CRANE 🟩🟨⬜⬜🟩");
    }
}
