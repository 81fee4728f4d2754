// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The tag source seam consumed by report generation

use crate::commit::Commit;
use crate::error::GitError;

/// Supplies tags and per-tag commit history
///
/// Implementations are trusted to return tags newest-first by creation date;
/// callers do not re-sort.
pub trait TagSource {
    /// All tag names, newest-first by creation date
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the tag list cannot be read at all.
    fn tags_by_creation_desc(&self) -> Result<Vec<String>, GitError>;

    /// Commits reachable from `to` but not from `from_exclusive`, newest first,
    /// stopping after `max_count`
    ///
    /// # Errors
    ///
    /// Returns `GitError` if either reference cannot be resolved or walked.
    fn history(
        &self,
        from_exclusive: Option<&str>,
        to: &str,
        max_count: usize,
    ) -> Result<Vec<Commit>, GitError>;

    /// The `max_count` most recent commits reachable from `to`
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the reference cannot be resolved or walked.
    fn history_to(&self, to: &str, max_count: usize) -> Result<Vec<Commit>, GitError> {
        self.history(None, to, max_count)
    }
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn tags_by_creation_desc(&self) -> Result<Vec<String>, GitError> {
        (**self).tags_by_creation_desc()
    }

    fn history(
        &self,
        from_exclusive: Option<&str>,
        to: &str,
        max_count: usize,
    ) -> Result<Vec<Commit>, GitError> {
        (**self).history(from_exclusive, to, max_count)
    }
}
