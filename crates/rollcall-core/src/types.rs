//! Shared domain types for the rollcall collector.
//!
//! This module defines the validated `Username` newtype, the `UserRecord`
//! pair scraped from a card, and the `Roster` dedup store.

use crate::error::RollcallError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Newtype for usernames in marker form with validation.
///
/// Usernames carry a leading `@` followed by at least one non-whitespace
/// character, e.g. `@alice`. They serve as the unique key of the [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new `Username` from a string.
    ///
    /// # Errors
    /// Returns error if the value is not in marker form (`@` prefix,
    /// non-empty, no whitespace).
    pub fn new(username: impl Into<String>) -> Result<Self, RollcallError> {
        let username = username.into();
        Self::validate(&username)?;
        Ok(Self(username))
    }

    /// Derive a `Username` from a profile path such as `/alice`.
    ///
    /// The leading slash is stripped and the `@` marker prefixed, matching
    /// how following-list cards link to profiles.
    pub fn from_profile_path(path: &str) -> Result<Self, RollcallError> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        Self::new(format!("@{trimmed}"))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate marker form: `@` prefix, at least one character, no whitespace.
    fn validate(username: &str) -> Result<(), RollcallError> {
        static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            USERNAME_REGEX.get_or_init(|| Regex::new(r"^@\S+$").expect("valid regex"));

        if regex.is_match(username) {
            Ok(())
        } else {
            Err(RollcallError::Validation(format!(
                "invalid username: must be '@' followed by non-whitespace, got '{username}'"
            )))
        }
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One followed user scraped from a card: username plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique key of the record, in marker form
    pub username: Username,
    /// Display name as rendered on the card, stored verbatim
    pub display_name: String,
}

impl UserRecord {
    /// Create a new record.
    pub fn new(username: Username, display_name: impl Into<String>) -> Self {
        Self {
            username,
            display_name: display_name.into(),
        }
    }
}

/// Insertion-ordered mapping from username to [`UserRecord`].
///
/// The roster grows monotonically during a run and never shrinks. Inserting
/// a record whose username is already present is a no-op: the first-seen
/// display name wins. Insertion order is preserved so CSV rows come out
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<UserRecord>,
    index: HashMap<Username, usize>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by username.
    ///
    /// Returns `true` if the record was newly inserted, `false` if the
    /// username was already present (the existing record is untouched).
    pub fn insert(&mut self, record: UserRecord) -> bool {
        if self.index.contains_key(&record.username) {
            return false;
        }
        self.index.insert(record.username.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Look up a record by username.
    #[must_use]
    pub fn get(&self, username: &Username) -> Option<&UserRecord> {
        self.index.get(username).map(|&i| &self.records[i])
    }

    /// Number of unique records collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
