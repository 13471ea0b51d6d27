//! Error types for the page boundary.

use thiserror::Error;

/// Result type alias using `PageError`.
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors surfaced by the live page and the card parser.
#[derive(Debug, Error)]
pub enum PageError {
    /// Browser launch or CDP failure
    #[error("chromium error: {0}")]
    Chromium(String),

    /// Navigation to the target page failed
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// In-page script evaluation failed
    #[error("script evaluation failed: {0}")]
    Evaluation(String),

    /// A configured CSS selector string did not parse
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The offending selector string
        selector: String,
        /// Parser diagnostic
        reason: String,
    },

    /// An operation did not complete within its deadline
    #[error("timeout: {0}")]
    Timeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::Navigation("page not found".to_string());
        assert_eq!(err.to_string(), "navigation failed: page not found");
    }

    #[test]
    fn test_invalid_selector_error() {
        let err = PageError::InvalidSelector {
            selector: "[[[bad".to_string(),
            reason: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("[[[bad"));
    }
}
