//! The capability trait the collector polls, plus the raw card snapshot.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw fields scraped from one rendered user card.
///
/// Either field may be absent when the card's markup doesn't carry it;
/// absence is "field absent", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// Profile path from the card's link, e.g. `/alice`
    pub profile_path: Option<String>,
    /// Display name text as rendered
    pub display_name: Option<String>,
}

/// Capability interface over a live, scrollable document.
///
/// The collector polls this boundary; the live implementation drives a
/// headless browser, test implementations script the frames.
#[async_trait::async_trait]
pub trait PageSource {
    /// Snapshot all currently rendered user cards.
    async fn visible_cards(&self) -> Result<Vec<CardSnapshot>>;

    /// Request that the page load more content (scroll to bottom).
    async fn trigger_load_more(&self) -> Result<()>;

    /// Measure the current content extent (total scrollable height),
    /// used to detect whether the load-more request produced anything.
    async fn content_extent(&self) -> Result<u64>;
}
