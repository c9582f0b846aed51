//! Key events to round mutations
//!
//! The controller holds no round state of its own: each key is translated
//! into exactly one call on [`Round`].

use super::round::{Round, Submission};
use crate::core::Word;
use crate::error::GameError;
use tracing::trace;

/// Discrete key events accepted by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    Letter(char),
    Delete,
    Submit,
    /// Fill the input with a random dictionary word
    RandomWord,
    /// Fill the input with the configured opener
    Opener,
    /// Anything else; ignored
    Other,
}

impl KeyInput {
    /// Parse an on-screen keyboard identifier
    ///
    /// Single letters map to `Letter`; `{bksp}`, `{enter}`, `{rnd}` and
    /// `{opener}` (also `{crane}`) map to the special keys.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_identifier("q"), KeyInput::Letter('Q'));
    /// assert_eq!(KeyInput::from_identifier("{enter}"), KeyInput::Submit);
    /// assert_eq!(KeyInput::from_identifier("{f1}"), KeyInput::Other);
    /// ```
    #[must_use]
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "{bksp}" => Self::Delete,
            "{enter}" => Self::Submit,
            "{rnd}" => Self::RandomWord,
            "{opener}" | "{crane}" => Self::Opener,
            _ => {
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => {
                        Self::Letter(ch.to_ascii_uppercase())
                    }
                    _ => Self::Other,
                }
            }
        }
    }
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The current input changed
    Edited,
    /// A guess was accepted and evaluated
    Submitted(Submission),
    /// The round refused the request; nothing changed
    Rejected(GameError),
    /// The key has no meaning in the game
    Ignored,
}

/// Stateless translator from keys to round calls
#[derive(Debug, Clone, Copy)]
pub struct InputController {
    opener: Word,
}

impl InputController {
    #[must_use]
    pub const fn new(opener: Word) -> Self {
        Self { opener }
    }

    #[must_use]
    pub const fn opener(&self) -> &Word {
        &self.opener
    }

    /// Apply one key to the round
    ///
    /// Shortcut keys only fill the input; the word still has to be
    /// submitted and passes the normal dictionary check then.
    pub fn handle(&self, round: &mut Round<'_>, key: KeyInput) -> KeyOutcome {
        trace!(?key, "key pressed");
        let result = match key {
            KeyInput::Letter(ch) => round.append_letter(ch),
            KeyInput::Delete => round.delete_letter(),
            KeyInput::Submit => {
                return match round.submit() {
                    Ok(submission) => KeyOutcome::Submitted(submission),
                    Err(err) => KeyOutcome::Rejected(err),
                };
            }
            KeyInput::RandomWord => {
                let word = round.random_word();
                round.set_current_input(&word)
            }
            KeyInput::Opener => round.set_current_input(&self.opener),
            KeyInput::Other => return KeyOutcome::Ignored,
        };

        match result {
            Ok(()) => KeyOutcome::Edited,
            Err(err) => KeyOutcome::Rejected(err),
        }
    }
}
