//! Word lists for the game
//!
//! Provides the word list compiled into the binary and loaders for custom
//! lists.

mod embedded;
pub mod loader;

pub use embedded::WORDS_JSON;

use crate::error::DictionaryError;
use crate::game::Dictionary;

/// Build the dictionary from the embedded word list
///
/// # Errors
///
/// Only fails if the embedded artifact is corrupt.
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_json(WORDS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_parses() {
        let dict = embedded_dictionary().unwrap();
        assert!(dict.len() > 100);
    }

    #[test]
    fn embedded_words_are_uppercase_five_letters() {
        let raw: Vec<String> = serde_json::from_str(WORDS_JSON).unwrap();
        for word in &raw {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_has_game_words() {
        let dict = embedded_dictionary().unwrap();
        for word in ["CRANE", "SLATE", "SPEED", "ERASE"] {
            assert!(dict.contains(word), "missing {word}");
        }
        // Raw list entries of other lengths are filtered at build time
        assert!(!dict.contains("APPLES"));
    }
}
