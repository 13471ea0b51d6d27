//! The collection loop: extract, dedup, scroll, decide when to stop.

use crate::error::Result;
use crate::settle::{SettlePoll, SettleStep};
use rollcall_core::{CollectorConfig, Roster, UserRecord, Username};
use rollcall_page::{CardSnapshot, PageSource};
use std::time::Duration;

/// Phases of the collection state machine.
///
/// POLLING loops extract/stagnation-check/load-more; either termination
/// signal transitions to FINAL_EXTRACT, which always performs one trailing
/// extraction pass before DONE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Extract, check stagnation, request more content
    Polling,
    /// One trailing extraction to catch content rendered by the last load
    FinalExtract(CompletionReason),
    /// Run finished
    Done(CompletionReason),
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// Consecutive extraction passes stopped yielding new records
    Stagnation,
    /// The content extent stopped growing: true end of content
    EndOfContent,
    /// The load-more attempt cap was hit before the extent settled
    /// (inconclusive abort, treated as terminal)
    AttemptCapReached,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct CollectSummary {
    /// Which termination signal ended the run
    pub reason: CompletionReason,
    /// Extraction passes performed, trailing pass included
    pub passes: u32,
    /// Load-more attempts consumed
    pub load_more_attempts: u32,
    /// Unique records collected
    pub total: usize,
}

impl CollectSummary {
    /// Whether the run terminated with no records at all.
    ///
    /// This is the distinct "no data found" condition: callers skip the
    /// export entirely and warn the operator instead.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Per-run scroll state, reset only at construction.
#[derive(Debug)]
struct ScrollState {
    settle: SettlePoll,
    stagnant_passes: u32,
}

/// Owns the polling loop, the dedup roster, and the termination decision.
///
/// The roster is readable between suspension points, so a run cancelled
/// externally still leaves the records of every completed extraction pass
/// usable and exportable.
pub struct Collector {
    config: CollectorConfig,
    roster: Roster,
    state: ScrollState,
    phase: Phase,
    passes: u32,
}

impl Collector {
    /// Create a collector with the given loop configuration.
    #[must_use]
    pub fn new(config: CollectorConfig) -> Self {
        let settle = SettlePoll::new(config.max_load_more_attempts);
        Self {
            config,
            roster: Roster::new(),
            state: ScrollState {
                settle,
                stagnant_passes: 0,
            },
            phase: Phase::Polling,
            passes: 0,
        }
    }

    /// Records collected so far, in insertion order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the collector and take ownership of the roster.
    #[must_use]
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Run the collection loop to completion against a page.
    ///
    /// The loop suspends only while waiting on the load-more poll interval;
    /// page errors propagate and abort the run.
    pub async fn run<P: PageSource + ?Sized>(&mut self, page: &P) -> Result<CollectSummary> {
        loop {
            self.phase = match self.phase {
                Phase::Polling => self.poll_step(page).await?,
                Phase::FinalExtract(reason) => {
                    let added = self.extract_pass(page).await?;
                    tracing::debug!(added, "final extraction pass");
                    Phase::Done(reason)
                }
                Phase::Done(reason) => {
                    let summary = CollectSummary {
                        reason,
                        passes: self.passes,
                        load_more_attempts: self.state.settle.attempts(),
                        total: self.roster.len(),
                    };
                    if summary.is_empty() {
                        tracing::warn!(
                            "No users found; the page may require login or the selectors may be outdated"
                        );
                    } else {
                        tracing::info!(
                            total = summary.total,
                            passes = summary.passes,
                            reason = ?summary.reason,
                            "collection complete"
                        );
                    }
                    return Ok(summary);
                }
            };
        }
    }

    /// One POLLING iteration: extract, check stagnation, request more
    /// content, check the extent signal.
    async fn poll_step<P: PageSource + ?Sized>(&mut self, page: &P) -> Result<Phase> {
        let added = self.extract_pass(page).await?;

        if added == 0 {
            self.state.stagnant_passes += 1;
            if self.state.stagnant_passes >= self.config.stagnation_threshold {
                tracing::info!(
                    passes = self.state.stagnant_passes,
                    "no new users across consecutive passes, assuming source exhausted"
                );
                return Ok(Phase::FinalExtract(CompletionReason::Stagnation));
            }
        } else {
            self.state.stagnant_passes = 0;
        }

        page.trigger_load_more().await?;
        tokio::time::sleep(Duration::from_millis(self.config.poll_interval_ms)).await;
        let extent = page.content_extent().await?;

        match self.state.settle.check(extent) {
            SettleStep::Changed => Ok(Phase::Polling),
            SettleStep::Stabilized => {
                tracing::info!(extent, "content extent stopped growing, end of content");
                Ok(Phase::FinalExtract(CompletionReason::EndOfContent))
            }
            SettleStep::CapReached => {
                tracing::warn!(
                    attempts = self.state.settle.attempts(),
                    "load-more attempt cap hit before the extent settled, aborting"
                );
                Ok(Phase::FinalExtract(CompletionReason::AttemptCapReached))
            }
        }
    }

    /// Scan the currently rendered cards and insert new records.
    ///
    /// Cards missing either field are skipped, not errors.
    async fn extract_pass<P: PageSource + ?Sized>(&mut self, page: &P) -> Result<usize> {
        let cards = page.visible_cards().await?;
        let mut added = 0;

        for card in cards {
            let CardSnapshot {
                profile_path: Some(path),
                display_name: Some(name),
            } = card
            else {
                continue;
            };

            let Ok(username) = Username::from_profile_path(&path) else {
                tracing::trace!(%path, "card link does not name a profile, skipping");
                continue;
            };

            if self.roster.insert(UserRecord::new(username, name)) {
                added += 1;
            }
        }

        self.passes += 1;
        tracing::info!(
            total = self.roster.len(),
            newly_added = added,
            "extraction pass complete"
        );
        Ok(added)
    }
}
