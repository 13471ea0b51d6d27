//! Bounded settle poll over a measurable signal.
//!
//! Models "repeat an action, measure a signal, stop when the signal
//! stabilizes across two consecutive checks or an attempt cap is reached".
//! The poll is driven one step at a time so callers can interleave other
//! work (an extraction pass) between checks; its state persists across the
//! whole run.

/// Outcome of feeding one measured signal into the poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStep {
    /// The signal moved; keep polling
    Changed,
    /// The signal matched the previous check: the source has settled
    Stabilized,
    /// The attempt cap was hit before the signal settled
    CapReached,
}

/// Tracks the last observed signal and the attempt budget.
#[derive(Debug)]
pub struct SettlePoll {
    last_signal: Option<u64>,
    attempts: u32,
    max_attempts: u32,
}

impl SettlePoll {
    /// Create a poll with the given attempt cap.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            last_signal: None,
            attempts: 0,
            max_attempts,
        }
    }

    /// Feed one measured signal.
    ///
    /// Stabilization requires at least one prior check; the very first
    /// signal can only count as `Changed` or hit the cap. A signal equal to
    /// the previous one stabilizes even when the cap has been reached.
    pub fn check(&mut self, signal: u64) -> SettleStep {
        if self.last_signal == Some(signal) {
            return SettleStep::Stabilized;
        }
        if self.attempts >= self.max_attempts {
            return SettleStep::CapReached;
        }
        self.last_signal = Some(signal);
        self.attempts += 1;
        SettleStep::Changed
    }

    /// Attempts consumed so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The signal observed at the most recent counted check.
    #[must_use]
    pub fn last_signal(&self) -> Option<u64> {
        self.last_signal
    }
}
