//! Delayed automatic restart after a round ends
//!
//! The handle is owned by whoever drives the [`Round`]; the round itself
//! never schedules anything. A pending reset is bound to the round it was
//! armed for and turns into a no-op once that round has been replaced or is
//! no longer terminal.

use super::round::Round;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay between the end of a round and the automatic restart
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1000);

/// What happened when a pending reset was checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStatus {
    /// Still applies, not due yet
    Waiting,
    /// A new round was started
    Fired,
    /// The round was already replaced or is no longer terminal
    Stale,
}

/// A scheduled restart of one specific round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReset {
    round_id: u64,
    due: Instant,
}

impl PendingReset {
    /// Arm a reset for the current round of `round`, due after `delay`
    #[must_use]
    pub fn arm(round: &Round<'_>, delay: Duration) -> Self {
        Self::arm_at(round.round_id(), Instant::now() + delay)
    }

    /// Arm a reset for round `round_id` due at `due`
    #[must_use]
    pub const fn arm_at(round_id: u64, due: Instant) -> Self {
        Self { round_id, due }
    }

    /// Time left until the reset is due, zero once it is
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    /// True if the reset still applies to `round`
    #[must_use]
    pub fn is_current(&self, round: &Round<'_>) -> bool {
        round.round_id() == self.round_id && round.outcome().is_terminal()
    }

    /// Fire the reset if it is due and still applies
    pub fn fire(&self, round: &mut Round<'_>, now: Instant) -> ResetStatus {
        if !self.is_current(round) {
            debug!(round = self.round_id, "discarding stale reset");
            return ResetStatus::Stale;
        }
        if now < self.due {
            return ResetStatus::Waiting;
        }
        round.start_new_round();
        ResetStatus::Fired
    }
}

/// Slot holding at most one pending reset
#[derive(Debug, Default, Clone, Copy)]
pub struct ResetTimer {
    pending: Option<PendingReset>,
}

impl ResetTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule a reset for the current round, replacing any earlier one
    pub fn schedule(&mut self, round: &Round<'_>, delay: Duration) {
        self.pending = Some(PendingReset::arm(round, delay));
    }

    /// Drop any pending reset
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How long the event loop may block before the reset needs attention
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.remaining(now))
    }

    /// Fire the pending reset if due; returns true if a new round started
    pub fn tick(&mut self, round: &mut Round<'_>, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        let status = pending.fire(round, now);
        if status != ResetStatus::Waiting {
            self.pending = None;
        }
        status == ResetStatus::Fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Dictionary;
    use crate::game::round::RoundOutcome;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn won_round(dict: &Dictionary) -> Round<'_> {
        let rng = StdRng::seed_from_u64(3);
        let target = Word::new("crane").unwrap();
        let mut round = Round::with_target(dict, 6, rng, target);
        round.set_current_input(&target).unwrap();
        round.submit().unwrap();
        round
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_candidates(["crane", "slate", "irate"]).unwrap()
    }

    #[test]
    fn reset_waits_until_due() {
        let dict = dictionary();
        let mut round = won_round(&dict);
        let now = Instant::now();
        let pending = PendingReset::arm_at(round.round_id(), now + Duration::from_secs(1));

        assert_eq!(pending.fire(&mut round, now), ResetStatus::Waiting);
        assert_eq!(round.outcome(), RoundOutcome::Won);
        assert_eq!(pending.remaining(now), Duration::from_secs(1));
    }

    #[test]
    fn reset_fires_when_due() {
        let dict = dictionary();
        let mut round = won_round(&dict);
        let now = Instant::now();
        let pending = PendingReset::arm_at(round.round_id(), now);

        assert_eq!(pending.fire(&mut round, now), ResetStatus::Fired);
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert_eq!(round.round_id(), 1);
    }

    #[test]
    fn reset_is_noop_after_manual_new_round() {
        let dict = dictionary();
        let mut round = won_round(&dict);
        let now = Instant::now();
        let pending = PendingReset::arm_at(round.round_id(), now);

        round.start_new_round();
        round.append_letter('s').unwrap();

        assert_eq!(pending.fire(&mut round, now), ResetStatus::Stale);
        assert_eq!(round.state().current_input(), "S");
    }

    #[test]
    fn timer_tick_and_cancel() {
        let dict = dictionary();
        let mut round = won_round(&dict);
        let mut timer = ResetTimer::new();

        timer.schedule(&round, Duration::ZERO);
        assert!(timer.is_pending());
        timer.cancel();
        assert!(!timer.tick(&mut round, Instant::now()));
        assert_eq!(round.outcome(), RoundOutcome::Won);

        timer.schedule(&round, Duration::ZERO);
        assert!(timer.tick(&mut round, Instant::now() + Duration::from_millis(1)));
        assert!(!timer.is_pending());
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn timer_drops_stale_reset() {
        let dict = dictionary();
        let mut round = won_round(&dict);
        let mut timer = ResetTimer::new();

        timer.schedule(&round, Duration::from_secs(60));
        round.start_new_round();

        assert!(!timer.tick(&mut round, Instant::now()));
        assert!(!timer.is_pending());
        assert_eq!(timer.poll_timeout(Instant::now()), None);
    }
}
