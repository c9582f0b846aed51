//! Wordle Game
//!
//! A terminal word-guessing game: find the hidden five-letter word in six
//! attempts, guided by per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//!
//! let guess = Word::new("slate").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let attempt = evaluate(&guess, &target);
//! println!("{}", attempt.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
pub mod logging;
