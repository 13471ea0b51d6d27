//! Scraper-based extraction of card snapshots from rendered page HTML.

use crate::error::{PageError, Result};
use crate::source::CardSnapshot;
use rollcall_core::SelectorConfig;
use scraper::{ElementRef, Html, Selector};

/// Extracts card snapshots from rendered page HTML.
///
/// Selector strings are validated once at construction; per-card lookup
/// misses surface as absent fields on the snapshot.
pub struct CardParser {
    card: Selector,
    profile_link: Selector,
    display_name: Selector,
}

impl CardParser {
    /// Build a parser from the configured selector strings.
    pub fn new(selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            card: parse_selector(&selectors.card)?,
            profile_link: parse_selector(&selectors.profile_link)?,
            display_name: parse_selector(&selectors.display_name)?,
        })
    }

    /// Scan the document for user cards and snapshot their fields.
    pub fn parse(&self, html: &str) -> Vec<CardSnapshot> {
        let document = Html::parse_document(html);

        document
            .select(&self.card)
            .map(|card| CardSnapshot {
                profile_path: card
                    .select(&self.profile_link)
                    .next()
                    .and_then(|el| el.value().attr("href"))
                    .filter(|href| !href.is_empty())
                    .map(ToString::to_string),
                display_name: self.extract_text(&card),
            })
            .collect()
    }

    fn extract_text(&self, card: &ElementRef) -> Option<String> {
        card.select(&self.display_name)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
