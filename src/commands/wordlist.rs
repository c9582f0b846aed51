//! Word list conversion
//!
//! Turns a raw newline-delimited word list into the JSON array artifact the
//! game embeds.

use crate::error::DictionaryError;
use crate::game::Dictionary;
use std::fs;
use std::path::Path;
use tracing::info;

/// Convert `input` (one word per line) into a JSON array at `output`
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an error if either file cannot be accessed or no five-letter
/// word is found.
pub fn convert_wordlist(input: &Path, output: &Path) -> Result<usize, DictionaryError> {
    let raw = fs::read_to_string(input).map_err(|source| DictionaryError::FileRead {
        path: input.to_path_buf(),
        source,
    })?;
    let dict = Dictionary::from_candidates(raw.lines())?;
    let count = dict.len();

    fs::write(output, dict.to_json()?).map_err(|source| DictionaryError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    info!(input = %input.display(), output = %output.display(), count, "wrote word list");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_filters_and_uppercases() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("words.json");
        fs::write(&input, "crane\nkeyboard\nslate\nab\n").unwrap();

        let count = convert_wordlist(&input, &output).unwrap();
        assert_eq!(count, 2);

        let dict = Dictionary::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(dict.contains("CRANE"));
        assert!(dict.contains("SLATE"));
    }

    #[test]
    fn convert_without_five_letter_words_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("words.json");
        fs::write(&input, "abc
keyboard
").unwrap();

        let result = convert_wordlist(&input, &output);
        assert!(matches!(result, Err(DictionaryError::Empty)));
        assert!(!output.exists());
    }
}
