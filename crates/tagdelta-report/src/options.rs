// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report generation options

use std::collections::HashSet;

use crate::error::ReportError;
use crate::group::KNOWN_PREFIXES;

/// Default maximum number of tags shown per group
pub const DEFAULT_TAGS_PER_GROUP: usize = 8;

/// Default cap on commits between two tags
pub const DEFAULT_COMMIT_LIMIT: usize = 50;

/// How commits are chosen for each tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Commits since the next-older tag in the window, capped at `limit`
    Range {
        /// Maximum commits shown per tag
        limit: usize,
    },
    /// The `count` most recent commits reachable from the tag
    Fixed {
        /// Commits shown per tag
        count: usize,
    },
}

/// Options controlling grouping and commit selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Maximum tags shown per group
    pub tags_per_group: usize,
    /// 0 selects range mode, anything else fixed-count mode
    pub commits_per_tag: usize,
    /// Range-mode cap
    pub commit_limit: usize,
    /// Group prefixes in configured order
    pub group_prefixes: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tags_per_group: DEFAULT_TAGS_PER_GROUP,
            commits_per_tag: 0,
            commit_limit: DEFAULT_COMMIT_LIMIT,
            group_prefixes: KNOWN_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

impl ReportOptions {
    /// The commit selection strategy these options describe
    #[must_use]
    pub fn mode(&self) -> CommitMode {
        if self.commits_per_tag == 0 {
            CommitMode::Range {
                limit: self.commit_limit,
            }
        } else {
            CommitMode::Fixed {
                count: self.commits_per_tag,
            }
        }
    }

    /// Validate the options
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidOption` if:
    /// - `tags_per_group` or `commit_limit` is zero
    /// - the prefix list is empty, or contains an empty or repeated prefix
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.tags_per_group == 0 {
            return Err(invalid("tagsPerGroup", "must be at least 1"));
        }
        if self.commit_limit == 0 {
            return Err(invalid("commitLimit", "must be at least 1"));
        }
        if self.group_prefixes.is_empty() {
            return Err(invalid("groupPrefixes", "at least one prefix is required"));
        }

        let mut seen = HashSet::new();
        for prefix in &self.group_prefixes {
            if prefix.is_empty() {
                return Err(invalid("groupPrefixes", "prefixes must not be empty"));
            }
            if !seen.insert(prefix.as_str()) {
                return Err(invalid(
                    "groupPrefixes",
                    format!("duplicate prefix '{prefix}'"),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ReportError {
    ReportError::InvalidOption {
        field,
        reason: reason.into(),
    }
}
