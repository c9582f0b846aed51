//! Embedded word list
//!
//! JSON artifact generated at build time from `data/words.txt`.

/// JSON array of uppercase five-letter words
pub const WORDS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/words.json"));
