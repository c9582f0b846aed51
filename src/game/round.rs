//! Round lifecycle
//!
//! [`RoundState`] is an immutable snapshot of one round; every mutation
//! returns a new snapshot or an error meaning "nothing changed".
//! [`Round`] owns the current snapshot together with the dictionary and RNG
//! and is the single writer the front ends talk to.

use super::dictionary::Dictionary;
use super::hints::LetterHintMap;
use crate::core::{Attempt, WORD_LENGTH, Word, evaluate};
use crate::error::{GameError, TransitionError};
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, warn};

/// Default number of attempts per round
pub const DEFAULT_ATTEMPT_LIMIT: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// End-of-round notification: the outcome and the revealed target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    pub outcome: RoundOutcome,
    pub target: Word,
}

impl RoundEnd {
    /// User-facing message for the end of the round
    #[must_use]
    pub fn message(&self) -> String {
        match self.outcome {
            RoundOutcome::Won => "You win.".to_string(),
            _ => format!("You lost. Correct word: {}", self.target),
        }
    }
}

impl fmt::Display for RoundEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Snapshot of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    attempts: Vec<Attempt>,
    current_input: String,
    outcome: RoundOutcome,
    hints: LetterHintMap,
    attempt_limit: usize,
}

impl RoundState {
    /// Start a fresh round for `target`
    ///
    /// An `attempt_limit` of zero is treated as one.
    #[must_use]
    pub fn new(target: Word, attempt_limit: usize) -> Self {
        Self {
            target,
            attempts: Vec::with_capacity(attempt_limit),
            current_input: String::with_capacity(WORD_LENGTH),
            outcome: RoundOutcome::InProgress,
            hints: LetterHintMap::new(),
            attempt_limit: attempt_limit.max(1),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn hints(&self) -> &LetterHintMap {
        &self.hints
    }

    #[must_use]
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Attempts still available in this round
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.attempt_limit - self.attempts.len()
    }

    /// End-of-round notification, once the round is over
    #[must_use]
    pub fn round_end(&self) -> Option<RoundEnd> {
        self.outcome.is_terminal().then_some(RoundEnd {
            outcome: self.outcome,
            target: self.target,
        })
    }

    /// Append one letter to the current input
    ///
    /// # Errors
    /// `InvalidTransition` if the round is over, the input is full or `ch`
    /// is not an ASCII letter.
    pub fn append_letter(&self, ch: char) -> Result<Self, GameError> {
        self.ensure_in_progress()?;
        if !ch.is_ascii_alphabetic() {
            return Err(TransitionError::NotALetter(ch).into());
        }
        if self.current_input.len() >= WORD_LENGTH {
            return Err(TransitionError::InputFull.into());
        }

        let mut next = self.clone();
        next.current_input.push(ch.to_ascii_uppercase());
        Ok(next)
    }

    /// Remove the last letter of the current input
    ///
    /// # Errors
    /// `InvalidTransition` if the round is over or the input is empty.
    pub fn delete_letter(&self) -> Result<Self, GameError> {
        self.ensure_in_progress()?;
        if self.current_input.is_empty() {
            return Err(TransitionError::InputEmpty.into());
        }

        let mut next = self.clone();
        next.current_input.pop();
        Ok(next)
    }

    /// Replace the current input wholesale
    ///
    /// # Errors
    /// `InvalidTransition` if the round is over.
    pub fn set_current_input(&self, word: &Word) -> Result<Self, GameError> {
        self.ensure_in_progress()?;

        let mut next = self.clone();
        next.current_input.clear();
        next.current_input.push_str(word.text());
        Ok(next)
    }

    /// Submit the current input
    ///
    /// The word must be complete and in `dictionary`. On success the attempt
    /// is recorded, hints are merged, the input is cleared and the outcome is
    /// re-evaluated. Returns the next state with the new attempt.
    ///
    /// # Errors
    /// - `InvalidTransition` if the round is over or the input is incomplete
    /// - `InvalidSubmission` if the word is not in the dictionary
    pub fn submit(&self, dictionary: &Dictionary) -> Result<(Self, Attempt), GameError> {
        self.ensure_in_progress()?;
        if self.current_input.len() != WORD_LENGTH {
            return Err(TransitionError::Incomplete(self.current_input.len()).into());
        }

        let guess = Word::new(&self.current_input)?;
        if !dictionary.contains_word(&guess) {
            return Err(GameError::InvalidSubmission {
                word: self.current_input.clone(),
            });
        }

        let attempt = evaluate(&guess, &self.target);
        let mut next = self.clone();
        next.attempts.push(attempt);
        next.hints.record(&attempt);
        next.current_input.clear();

        next.outcome = if attempt.is_win() {
            RoundOutcome::Won
        } else if next.attempts.len() >= next.attempt_limit {
            RoundOutcome::Lost
        } else {
            RoundOutcome::InProgress
        };

        Ok((next, attempt))
    }

    fn ensure_in_progress(&self) -> Result<(), TransitionError> {
        if self.outcome.is_terminal() {
            Err(TransitionError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub attempt: Attempt,
    pub outcome: RoundOutcome,
    /// Present when this submission ended the round
    pub end: Option<RoundEnd>,
}

/// Owner of the current round
///
/// Applies transitions to its [`RoundState`] and draws targets from the
/// dictionary. Refused operations leave the state untouched.
pub struct Round<'a> {
    dictionary: &'a Dictionary,
    rng: StdRng,
    attempt_limit: usize,
    state: RoundState,
    round_id: u64,
}

impl<'a> Round<'a> {
    /// Create a round owner and start the first round with a random target
    pub fn new(dictionary: &'a Dictionary, attempt_limit: usize, mut rng: StdRng) -> Self {
        let target = *dictionary.random_word(&mut rng);
        info!(attempt_limit, "starting first round");
        Self {
            dictionary,
            rng,
            attempt_limit,
            state: RoundState::new(target, attempt_limit),
            round_id: 0,
        }
    }

    /// Create a round owner whose first round uses `target`
    pub fn with_target(
        dictionary: &'a Dictionary,
        attempt_limit: usize,
        rng: StdRng,
        target: Word,
    ) -> Self {
        Self {
            dictionary,
            rng,
            attempt_limit,
            state: RoundState::new(target, attempt_limit),
            round_id: 0,
        }
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Counter bumped by every new round
    #[must_use]
    pub const fn round_id(&self) -> u64 {
        self.round_id
    }

    #[must_use]
    pub const fn outcome(&self) -> RoundOutcome {
        self.state.outcome()
    }

    /// Draw a random word from the dictionary
    pub fn random_word(&mut self) -> Word {
        *self.dictionary.random_word(&mut self.rng)
    }

    /// # Errors
    /// See [`RoundState::append_letter`].
    pub fn append_letter(&mut self, ch: char) -> Result<(), GameError> {
        let next = self.state.append_letter(ch)?;
        self.replace(next);
        Ok(())
    }

    /// # Errors
    /// See [`RoundState::delete_letter`].
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        let next = self.state.delete_letter()?;
        self.replace(next);
        Ok(())
    }

    /// # Errors
    /// See [`RoundState::set_current_input`].
    pub fn set_current_input(&mut self, word: &Word) -> Result<(), GameError> {
        let next = self.state.set_current_input(word)?;
        self.replace(next);
        Ok(())
    }

    /// Submit the current input
    ///
    /// # Errors
    /// See [`RoundState::submit`].
    pub fn submit(&mut self) -> Result<Submission, GameError> {
        let (next, attempt) = match self.state.submit(self.dictionary) {
            Ok(submitted) => submitted,
            Err(err) => {
                if matches!(err, GameError::InvalidSubmission { .. }) {
                    warn!(%err, "submission rejected");
                }
                return Err(err);
            }
        };

        self.state = next;

        let submission = Submission {
            attempt,
            outcome: self.state.outcome(),
            end: self.state.round_end(),
        };
        debug!(
            guess = %attempt.word(),
            feedback = %attempt.to_emoji(),
            attempt = self.state.attempts().len(),
            "guess evaluated"
        );
        if let Some(end) = submission.end {
            info!(outcome = ?end.outcome, target = %end.target, "round over");
        }
        Ok(submission)
    }

    /// Replace the round with a fresh one, from any state
    pub fn start_new_round(&mut self) {
        let target = self.random_word();
        self.start_round_with(target);
    }

    /// Replace the round with a fresh one for a known target
    pub fn start_round_with(&mut self, target: Word) {
        self.state = RoundState::new(target, self.attempt_limit);
        self.round_id += 1;
        info!(round = self.round_id, "new round started");
    }

    fn replace(&mut self, next: RoundState) {
        debug!(input = next.current_input(), "input changed");
        self.state = next;
    }
}
