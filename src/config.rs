//! Game configuration
//!
//! Settings come from an optional TOML file; command-line flags override
//! individual fields afterwards.
//!
//! ```toml
//! attempt_limit = 6
//! opener = "CRANE"
//! reset_delay_ms = 1000
//! seed = 42
//! wordlist = "words.json"
//! ```

use crate::core::Word;
use crate::error::ConfigError;
use crate::game::{DEFAULT_ATTEMPT_LIMIT, DEFAULT_RESET_DELAY};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default opener offered by the shortcut key
pub const DEFAULT_OPENER: &str = "CRANE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Attempts per round
    pub attempt_limit: usize,
    /// Word inserted by the opener shortcut
    pub opener: String,
    /// Delay before a finished round restarts
    pub reset_delay_ms: u64,
    /// Fixed RNG seed for reproducible targets
    pub seed: Option<u64>,
    /// Custom word list instead of the embedded one
    pub wordlist: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            opener: DEFAULT_OPENER.to_string(),
            reset_delay_ms: DEFAULT_RESET_DELAY.as_millis() as u64,
            seed: None,
            wordlist: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that the settings can run a game
    ///
    /// # Errors
    ///
    /// Returns an error for a zero attempt limit or an invalid opener.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempt_limit == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        self.opener_word().map(|_| ())
    }

    /// The opener as a word
    ///
    /// # Errors
    ///
    /// Returns an error if the opener is not five letters.
    pub fn opener_word(&self) -> Result<Word, ConfigError> {
        Word::new(&self.opener).map_err(|source| ConfigError::InvalidOpener {
            opener: self.opener.clone(),
            source,
        })
    }

    #[must_use]
    pub const fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// RNG for target selection; seeded when `seed` is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
