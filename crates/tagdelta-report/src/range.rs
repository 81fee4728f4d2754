// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit range resolution
//!
//! For each tag in a group window this decides which history to ask the tag
//! source for, and whether the answer hit its cap.
//!
//! In range mode a tag shows the commits since the next-older tag in the
//! window, up to the configured limit. The oldest tag in the window has no
//! such neighbour and instead shows the [`FALLBACK_HISTORY_LEN`] most recent
//! commits reachable from it; that branch never reports truncation. In
//! fixed-count mode every tag shows its most recent `count` commits.

use tagdelta_git::TagSource;
use tracing::warn;

use crate::options::CommitMode;
use crate::report::{CommitRecord, TagEntry};
use crate::window::ResolvedTag;

/// Commits shown for the oldest tag of a window in range mode
///
/// Independent of the configured commit limit.
pub const FALLBACK_HISTORY_LEN: usize = 20;

/// The history query for one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPlan<'a> {
    /// Older tag whose history is excluded
    pub from_exclusive: Option<&'a str>,
    /// Tag whose history is walked
    pub to: &'a str,
    /// Maximum commits requested
    pub max_count: usize,
    /// Limit that marks the result truncated when reached, if any
    pub cap: Option<usize>,
}

/// Plan the history query for the tag at `index` of `window`
///
/// # Panics
///
/// Panics if `index` is out of bounds for `window`.
#[must_use]
pub fn plan(window: &[ResolvedTag], index: usize, mode: CommitMode) -> HistoryPlan<'_> {
    let to = window[index].name.as_str();

    match mode {
        CommitMode::Fixed { count } => HistoryPlan {
            from_exclusive: None,
            to,
            max_count: count,
            cap: Some(count),
        },
        CommitMode::Range { limit } => match window.get(index + 1) {
            Some(previous) => HistoryPlan {
                from_exclusive: Some(previous.name.as_str()),
                to,
                max_count: limit,
                cap: Some(limit),
            },
            None => HistoryPlan {
                from_exclusive: None,
                to,
                max_count: FALLBACK_HISTORY_LEN,
                cap: None,
            },
        },
    }
}

/// Resolve the commits for the tag at `index` of `window`
///
/// A history lookup failure is logged and yields an entry with no commits.
pub fn resolve_tag<S: TagSource + ?Sized>(
    source: &S,
    window: &[ResolvedTag],
    index: usize,
    mode: CommitMode,
) -> TagEntry {
    let plan = plan(window, index, mode);

    let commits = match source.history(plan.from_exclusive, plan.to, plan.max_count) {
        Ok(commits) => commits,
        Err(e) => {
            warn!(tag = plan.to, error = %e, "Failed to read tag history");
            return TagEntry::empty(plan.to);
        }
    };

    let commits: Vec<CommitRecord> = commits
        .iter()
        .take(plan.max_count)
        .map(CommitRecord::from)
        .collect();

    let truncated = plan.cap.is_some_and(|cap| commits.len() == cap);
    let truncation_note = match plan.cap {
        Some(cap) if truncated => format!("showing at most {cap} commits"),
        _ => String::new(),
    };

    TagEntry {
        name: plan.to.to_string(),
        commits,
        truncated,
        truncation_note,
    }
}

/// Resolve every tag of a window, preserving window order
pub fn resolve_window<S: TagSource + ?Sized>(
    source: &S,
    window: &[ResolvedTag],
    mode: CommitMode,
) -> Vec<TagEntry> {
    (0..window.len())
        .map(|index| resolve_tag(source, window, index, mode))
        .collect()
}
