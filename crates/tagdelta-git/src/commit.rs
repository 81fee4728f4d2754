// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git commit types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of an abbreviated commit hash
pub const SHORT_SHA_LEN: usize = 7;

/// A commit as read from the repository history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Full commit message
    pub message: String,
    /// Author timestamp
    pub timestamp: DateTime<Utc>,
}

impl Commit {
    /// Create a commit from its parts
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            timestamp,
        }
    }

    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA, always exactly [`SHORT_SHA_LEN`] characters
    ///
    /// Longer identifiers are truncated; shorter ones are right-padded with `0`.
    #[must_use]
    pub fn short_sha(&self) -> String {
        let mut short: String = self.sha.chars().take(SHORT_SHA_LEN).collect();
        while short.chars().count() < SHORT_SHA_LEN {
            short.push('0');
        }
        short
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Calendar date of the commit in UTC
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: short_sha is always exactly 7 characters
        #[test]
        fn prop_short_sha_length(sha in "[0-9a-f]{0,40}") {
            let commit = Commit::new(sha, "msg", Utc::now());
            prop_assert_eq!(commit.short_sha().chars().count(), SHORT_SHA_LEN);
        }

        /// Property: short_sha is a prefix of the full SHA when it is long enough
        #[test]
        fn prop_short_sha_is_prefix(sha in "[0-9a-f]{7,40}") {
            let commit = Commit::new(sha.clone(), "msg", Utc::now());
            prop_assert!(sha.starts_with(&commit.short_sha()));
        }

        /// Property: subject is always a prefix of message and has no newline
        #[test]
        fn prop_subject_is_prefix_of_message(message in ".*(\n.*){0,3}") {
            let commit = Commit::new("a".repeat(40), message.clone(), Utc::now());
            let subject = commit.subject();
            prop_assert!(message.starts_with(subject));
            prop_assert!(!subject.contains('\n'));
        }
    }
}
