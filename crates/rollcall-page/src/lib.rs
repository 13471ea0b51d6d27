//! Page boundary for the rollcall collector.
//!
//! Provides the `PageSource` capability trait the collector polls against,
//! a chromiumoxide-backed live implementation, and the scraper-based card
//! parser. Everything DOM-shaped lives behind this crate so the collector
//! core stays testable without a rendered page.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod card;
pub mod error;
pub mod fingerprint;
pub mod live;
pub mod source;

pub use card::CardParser;
pub use error::{PageError, Result};
pub use fingerprint::FingerprintConfig;
pub use live::LivePage;
pub use source::{CardSnapshot, PageSource};
