//! Word list loading utilities
//!
//! Custom lists can be JSON arrays (the same format as the embedded
//! artifact) or raw newline-delimited text.

use crate::error::DictionaryError;
use crate::game::Dictionary;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a dictionary from a file
///
/// Files ending in `.json` are parsed as a JSON array of strings; anything
/// else is read as one candidate per line.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is malformed or no
/// five-letter word remains after filtering.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = if is_json(path) {
        Dictionary::from_json(&content)?
    } else {
        Dictionary::from_candidates(content.lines())?
    };

    info!(path = %path.display(), words = dict.len(), "loaded word list");
    Ok(dict)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
