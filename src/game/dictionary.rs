//! The set of playable words
//!
//! Built once from a word source. Entries of the wrong length or with
//! non-letters are dropped at build time so queries never have to filter.

use crate::core::{WORD_LENGTH, Word};
use crate::error::DictionaryError;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Immutable set of five-letter uppercase words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw candidate strings
    ///
    /// Candidates are trimmed, filtered to exactly five letters and
    /// uppercased. Duplicates collapse to one entry.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no candidate survives filtering.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Dictionary;
    ///
    /// let dict = Dictionary::from_candidates(["crane", "apples", "Slate"]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("SLATE"));
    /// assert!(!dict.contains("APPLES"));
    /// ```
    pub fn from_candidates<I, S>(candidates: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let mut words: Vec<Word> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let trimmed = candidate.as_ref().trim();
                if trimmed.chars().count() != WORD_LENGTH {
                    skipped += 1;
                    return None;
                }
                match Word::new(trimmed) {
                    Ok(word) => Some(word),
                    Err(_) => {
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();

        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!(words = words.len(), skipped, "built dictionary");

        let index = words.iter().copied().collect();
        Ok(Self { words, index })
    }

    /// Build a dictionary from a JSON array of strings
    ///
    /// # Errors
    /// Returns `DictionaryError::Json` for malformed JSON and
    /// `DictionaryError::Empty` if the array holds no usable word.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: Vec<String> = serde_json::from_str(json)?;
        Self::from_candidates(raw)
    }

    /// True iff `word`, compared case-insensitively, is in the set
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    /// True iff the already-parsed word is in the set
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick one word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words in sorted order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Serialize the dictionary as the JSON array artifact
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, DictionaryError> {
        let texts: Vec<&str> = self.words.iter().map(Word::text).collect();
        Ok(serde_json::to_string(&texts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn build_filters_wrong_lengths_and_non_letters() {
        let dict =
            Dictionary::from_candidates(["crane", "cranes", "abc", "sl4te", "  slate  ", ""])
                .unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "CRANE");
        assert_eq!(dict.words()[1].text(), "SLATE");
    }

    #[test]
    fn build_deduplicates_case_variants() {
        let dict = Dictionary::from_candidates(["crane", "CRANE", "Crane"]).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn build_empty_is_error() {
        let result = Dictionary::from_candidates(["toolong", "abc"]);
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = Dictionary::from_candidates(["crane"]).unwrap();
        assert!(dict.contains("CRANE"));
        assert!(dict.contains("crane"));
        assert!(!dict.contains("SLATE"));
        assert!(!dict.contains("CRANES"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn random_word_comes_from_set() {
        let dict = Dictionary::from_candidates(["crane", "slate", "irate"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(dict.contains_word(dict.random_word(&mut rng)));
        }
    }

    #[test]
    fn random_word_reaches_every_entry() {
        let dict = Dictionary::from_candidates(["crane", "slate", "irate"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<Word> = (0..200).map(|_| *dict.random_word(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn json_round_trip() {
        let dict = Dictionary::from_json(r#"["CRANE","SLATE"]"#).unwrap();
        let json = dict.to_json().unwrap();
        assert_eq!(json, r#"["CRANE","SLATE"]"#);
    }

    #[test]
    fn json_malformed_is_error() {
        assert!(matches!(
            Dictionary::from_json("not json"),
            Err(DictionaryError::Json(_))
        ));
    }
}
