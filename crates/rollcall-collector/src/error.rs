//! Error types for the collection loop and CSV export.

use rollcall_page::PageError;
use thiserror::Error;

/// Errors that abort a collection run.
///
/// There is no retry policy: page errors propagate and end the run. Cards
/// with missing fields are not errors at all; they are silently skipped.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The page boundary failed (browser, navigation, evaluation)
    #[error("page error: {0}")]
    Page(#[from] PageError),
}

/// Errors writing the CSV artifact.
///
/// Callers degrade to surfacing the CSV text instead of failing the run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CollectError`.
pub type Result<T> = std::result::Result<T, CollectError>;
