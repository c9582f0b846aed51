//! Cumulative per-letter hints
//!
//! Merges the classifications of every submitted attempt into one best-known
//! status per letter. Statuses only ever move up the precedence
//! `NotFound < Present < Correct`, so the merged map does not depend on the
//! order in which attempts arrive.

use crate::core::{Attempt, LetterClassification};

const ALPHABET_LEN: usize = 26;

/// Display style for a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyStyle {
    #[default]
    Unstyled,
    Correct,
    Present,
    NotFound,
}

impl From<Option<LetterClassification>> for KeyStyle {
    fn from(class: Option<LetterClassification>) -> Self {
        match class {
            None => Self::Unstyled,
            Some(LetterClassification::Correct) => Self::Correct,
            Some(LetterClassification::Present) => Self::Present,
            Some(LetterClassification::NotFound) => Self::NotFound,
        }
    }
}

/// Best-known classification for each letter seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterHintMap {
    slots: [Option<LetterClassification>; ALPHABET_LEN],
}

impl LetterHintMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new map with `attempt` merged in
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterClassification, Word, evaluate};
    /// use wordle_game::game::LetterHintMap;
    ///
    /// let target = Word::new("crane").unwrap();
    /// let first = evaluate(&Word::new("react").unwrap(), &target);
    /// let second = evaluate(&Word::new("irate").unwrap(), &target);
    ///
    /// let hints = LetterHintMap::new().merge(&first).merge(&second);
    /// // R was Present in REACT and Correct in IRATE
    /// assert_eq!(hints.get('R'), Some(LetterClassification::Correct));
    /// ```
    #[must_use]
    pub fn merge(&self, attempt: &Attempt) -> Self {
        let mut merged = *self;
        merged.record(attempt);
        merged
    }

    /// Merge `attempt` in place
    pub fn record(&mut self, attempt: &Attempt) {
        for (letter, class) in attempt.letters() {
            self.upgrade(letter, class);
        }
    }

    /// Store `class` for `letter` unless a better status is already known
    ///
    /// Returns true if the stored status changed.
    pub fn upgrade(&mut self, letter: u8, class: LetterClassification) -> bool {
        let Some(slot) = Self::slot_index(letter).map(|i| &mut self.slots[i]) else {
            return false;
        };
        if slot.is_some_and(|stored| stored >= class) {
            return false;
        }
        *slot = Some(class);
        true
    }

    /// Best-known status of `letter`, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterClassification> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::slot_index)
            .and_then(|i| self.slots[i])
    }

    /// Keyboard style for `letter`
    #[must_use]
    pub fn key_style(&self, letter: char) -> KeyStyle {
        self.get(letter).into()
    }

    /// Iterate over known letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterClassification)> + '_ {
        (b'A'..=b'Z')
            .zip(self.slots.iter())
            .filter_map(|(letter, slot)| slot.map(|class| (char::from(letter), class)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    fn slot_index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}
