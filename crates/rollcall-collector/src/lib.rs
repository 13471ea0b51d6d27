//! Rollcall Collector - the scroll-and-scrape collection loop.
//!
//! This crate owns the core of the tool: an explicit finite-state polling
//! loop that extracts user cards from a [`rollcall_page::PageSource`],
//! deduplicates them into a [`rollcall_core::Roster`], decides when the
//! content source is exhausted, and exports the result as CSV.
//!
//! # Termination
//!
//! Two independent signals end a run:
//!
//! - **Stagnation**: a configurable number of consecutive extraction passes
//!   added zero new records.
//! - **Extent stabilization**: the page's content extent stopped growing
//!   across two consecutive load-more checks (or the attempt cap was hit,
//!   which is treated as the same terminal signal but reported distinctly).
//!
//! # Example
//!
//! ```rust,ignore
//! use rollcall_collector::{export, Collector};
//! use rollcall_core::CollectorConfig;
//!
//! let mut collector = Collector::new(CollectorConfig::default());
//! let summary = collector.run(&page).await?;
//! if !summary.is_empty() {
//!     export::write_csv(collector.roster(), "followed_users.csv".as_ref())?;
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod collector;
pub mod error;
pub mod export;
pub mod settle;

// Re-export commonly used types
pub use collector::{CollectSummary, Collector, CompletionReason, Phase};
pub use error::{CollectError, ExportError, Result};
pub use settle::{SettlePoll, SettleStep};
