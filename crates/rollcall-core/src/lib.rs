//! Rollcall Core - Foundation crate for the rollcall following-list collector.
//!
//! This crate provides the shared types, error handling, and configuration
//! management that the page and collector crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared domain types (`Username`, `UserRecord`, `Roster`)
//!
//! # Example
//!
//! ```rust
//! use rollcall_core::{AppConfig, Roster, UserRecord, Username};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert_eq!(config.collector.stagnation_threshold, 3);
//!
//! let mut roster = Roster::new();
//! let username = Username::new("@alice")?;
//! roster.insert(UserRecord::new(username, "Alice A"));
//! assert_eq!(roster.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    AppConfig, BrowserConfig, CollectorConfig, ExportConfig, SelectorConfig,
};
pub use error::{ConfigError, ConfigResult, Result, RollcallError};
pub use types::{Roster, UserRecord, Username};
