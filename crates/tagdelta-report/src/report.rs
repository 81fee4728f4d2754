// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report model and assembly
//!
//! A [`Report`] is plain serializable data: it holds no reference to the tag
//! source that produced it, and building it twice from the same repository
//! state yields identical values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tagdelta_git::{Commit, TagSource};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::group::{self, classify, sort_prefixes};
use crate::options::ReportOptions;
use crate::range::resolve_window;
use crate::window::select_window;

/// A commit as displayed in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// Seven-character abbreviated hash
    pub short_hash: String,
    /// UTC calendar date of the commit
    pub date: NaiveDate,
    /// First line of the commit message
    pub subject: String,
}

impl From<&Commit> for CommitRecord {
    fn from(commit: &Commit) -> Self {
        Self {
            short_hash: commit.short_sha(),
            date: commit.date(),
            subject: commit.subject().to_string(),
        }
    }
}

/// One tag and the commits shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagEntry {
    /// Tag name
    pub name: String,
    /// Commits, newest first
    pub commits: Vec<CommitRecord>,
    /// Whether the commit list hit its cap
    pub truncated: bool,
    /// Human-readable cap note, empty unless truncated
    pub truncation_note: String,
}

impl TagEntry {
    /// An entry with no commits
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commits: Vec::new(),
            truncated: false,
            truncation_note: String::new(),
        }
    }
}

/// One group of tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    /// Name shown for the group
    pub display_name: String,
    /// The configured prefix
    pub prefix: String,
    /// Tags, newest first
    pub tags: Vec<TagEntry>,
}

/// Groups in priority order; groups without tags are absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    /// The groups
    pub groups: Vec<GroupEntry>,
}

impl Report {
    /// Whether no group matched any tag
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of tags across all groups
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.groups.iter().map(|g| g.tags.len()).sum()
    }

    /// Number of commit rows across all tags
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.tags)
            .map(|t| t.commits.len())
            .sum()
    }
}

/// Build a report from a tag source
///
/// # Errors
///
/// Returns `ReportError::InvalidOption` for out-of-range options and
/// `ReportError::RepositoryAccess` if the tag list cannot be read. Failures
/// reading one tag's history do not fail the build.
pub fn build_report<S: TagSource + ?Sized>(
    source: &S,
    options: &ReportOptions,
) -> Result<Report, ReportError> {
    options.validate()?;

    let tags = source
        .tags_by_creation_desc()
        .map_err(ReportError::RepositoryAccess)?;
    debug!(count = tags.len(), "Read tags");

    let mode = options.mode();
    let prefixes = sort_prefixes(&options.group_prefixes);
    let mut groups = Vec::new();

    for tag_group in classify(&tags, &prefixes) {
        let window = select_window(&tag_group, options.tags_per_group);
        if window.is_empty() {
            debug!(prefix = %tag_group.prefix, "No tags matched; omitting group");
            continue;
        }

        groups.push(GroupEntry {
            display_name: group::display_name(&tag_group.prefix).to_string(),
            tags: resolve_window(source, &window, mode),
            prefix: tag_group.prefix,
        });
    }

    let report = Report { groups };
    info!(
        groups = report.groups.len(),
        tags = report.tag_count(),
        commits = report.commit_count(),
        "Report built"
    );
    Ok(report)
}
