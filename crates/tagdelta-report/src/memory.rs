// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! In-memory tag source
//!
//! Useful for exercising report generation without a repository. Each tag
//! owns the full list of commits reachable from it; a range query is the set
//! difference of two such lists.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{DateTime, Duration, Utc};
use tagdelta_git::{Commit, GitError, TagSource};

/// A [`TagSource`] backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Tag names, newest first
    tags: Vec<String>,
    /// Commits reachable from each tag, newest first
    reachable: BTreeMap<String, Vec<Commit>>,
    /// Tags whose history lookups fail
    broken: BTreeSet<String>,
    /// Whether listing tags fails
    listing_fails: bool,
}

impl MemorySource {
    /// An empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single line of history with tags along it
    ///
    /// `releases` is given oldest first as `(tag, new_commits)`: each tag
    /// points at a commit `new_commits` further along than the previous tag.
    /// A count of 0 puts the tag on the same commit as the previous one.
    #[must_use]
    pub fn linear(releases: &[(&str, usize)]) -> Self {
        let epoch = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        let mut history: Vec<Commit> = Vec::new();
        let mut source = Self::new();

        for (tag, new_commits) in releases {
            for _ in 0..*new_commits {
                let n = history.len() + 1;
                history.push(Commit::new(
                    format!("{n:07x}{n:033x}"),
                    format!("change {n}\n\nbody of change {n}"),
                    epoch + Duration::days(n as i64),
                ));
            }
            let mut reachable = history.clone();
            reachable.reverse();
            source.tags.insert(0, (*tag).to_string());
            source.reachable.insert((*tag).to_string(), reachable);
        }

        source
    }

    /// Make every history lookup involving `name` fail
    pub fn break_tag(&mut self, name: &str) {
        self.broken.insert(name.to_string());
    }

    /// Make listing tags fail
    pub fn fail_listing(&mut self) {
        self.listing_fails = true;
    }

    fn lookup(&self, name: &str) -> Result<&[Commit], GitError> {
        if self.broken.contains(name) {
            return Err(GitError::InvalidReference {
                reference: name.to_string(),
            });
        }
        self.reachable
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GitError::InvalidReference {
                reference: name.to_string(),
            })
    }
}

impl TagSource for MemorySource {
    fn tags_by_creation_desc(&self) -> Result<Vec<String>, GitError> {
        if self.listing_fails {
            return Err(GitError::RepositoryNotFound {
                path: "<memory>".to_string(),
            });
        }
        Ok(self.tags.clone())
    }

    fn history(
        &self,
        from_exclusive: Option<&str>,
        to: &str,
        max_count: usize,
    ) -> Result<Vec<Commit>, GitError> {
        let commits = self.lookup(to)?;
        let hidden: HashSet<&str> = match from_exclusive {
            Some(from) => self.lookup(from)?.iter().map(|c| c.sha.as_str()).collect(),
            None => HashSet::new(),
        };

        Ok(commits
            .iter()
            .filter(|c| !hidden.contains(c.sha.as_str()))
            .take(max_count)
            .cloned()
            .collect())
    }
}
