//! Error types for the game engine.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a state mutation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The round already ended; only a new round is accepted.
    #[error("round is over")]
    RoundOver,

    /// The current input already holds a full word.
    #[error("input is full")]
    InputFull,

    /// Nothing to delete.
    #[error("input is empty")]
    InputEmpty,

    /// Submission attempted with fewer letters than a word needs.
    #[error("input has only {0} letters")]
    Incomplete(usize),

    /// Only ASCII letters can be typed.
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// Errors reported by the game engine.
///
/// None of these are fatal: every refused operation leaves the round exactly
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess and target have different lengths.
    #[error("guess has {actual} letters, expected {expected}")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// The submitted word is not in the dictionary.
    #[error("'{word}' is not in the word list")]
    InvalidSubmission { word: String },

    /// The mutation is not allowed in the current state.
    #[error("ignored: {0}")]
    InvalidTransition(#[from] TransitionError),

    /// Text that is not a valid five-letter word.
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Errors building a dictionary from a word source.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No usable five-letter words in the source.
    #[error("word list contains no five-letter words")]
    Empty,

    /// The JSON artifact could not be parsed.
    #[error("invalid word list JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a word list file.
    #[error("failed to read word list {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a converted word list.
    #[error("failed to write word list {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// At least one attempt per round is required.
    #[error("attempt limit must be at least 1")]
    ZeroAttempts,

    /// The configured opener is not a five-letter word.
    #[error("invalid opener '{opener}': {source}")]
    InvalidOpener {
        opener: String,
        #[source]
        source: WordError,
    },
}
