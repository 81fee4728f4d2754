// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository access
//!
//! This module reads tags and commit history from a repository using the
//! `git2` crate.

use crate::commit::Commit;
use crate::error::GitError;
use crate::source::TagSource;
use chrono::{DateTime, Utc};
use git2::{Oid, Repository, Sort};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, warn};

/// A git repository wrapper serving tags and history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the git repository containing the given path
    ///
    /// The path may be the repository root or any directory inside its work
    /// tree.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository contains the path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Check whether `path` is inside a git repository
    #[must_use]
    pub fn is_repository(path: impl AsRef<Path>) -> bool {
        Repository::discover(path).is_ok()
    }

    /// Get the repository path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Names of all local tags, in git's own (name) order
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the tag list cannot be read.
    pub fn tag_names(&self) -> Result<Vec<String>, GitError> {
        let names = self.repo.tag_names(None)?;
        Ok(names
            .iter_bytes()
            .map(|bytes| {
                let name = String::from_utf8_lossy(bytes);
                if let Cow::Owned(_) = name {
                    warn!(tag = %name, "tag name is not valid UTF-8");
                }
                name.into_owned()
            })
            .collect())
    }

    /// Delete a local tag
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the tag does not exist or cannot be removed.
    pub fn delete_tag(&self, name: &str) -> Result<(), GitError> {
        self.repo.tag_delete(name)?;
        Ok(())
    }

    /// Creator date of a tag in seconds since the epoch
    ///
    /// Annotated tags use the tagger time, lightweight tags the committer
    /// time of the commit they point at. Tags that cannot be dated sort as 0.
    fn creator_time(&self, name: &str) -> i64 {
        let refname = format!("refs/tags/{name}");
        let Ok(obj) = self.repo.revparse_single(&refname) else {
            debug!(tag = name, "tag could not be resolved; treating as undated");
            return 0;
        };

        if let Some(tagger) = obj.as_tag().and_then(|tag| tag.tagger()) {
            return tagger.when().seconds();
        }

        match obj.peel_to_commit() {
            Ok(commit) => commit.time().seconds(),
            Err(e) => {
                debug!(tag = name, error = %e, "tag does not point at a commit");
                0
            }
        }
    }

    /// Resolve a tag name (or any revision) to the commit it points at
    fn resolve_commit(&self, reference: &str) -> Result<Oid, GitError> {
        let invalid = || GitError::InvalidReference {
            reference: reference.to_string(),
        };

        let obj = self
            .repo
            .revparse_single(&format!("refs/tags/{reference}"))
            .or_else(|_| self.repo.revparse_single(reference))
            .map_err(|_| invalid())?;

        let commit = obj.peel_to_commit().map_err(|_| invalid())?;
        Ok(commit.id())
    }

    /// Extract commit metadata from a git2 commit
    ///
    /// The timestamp is the author date. Messages that are not valid UTF-8
    /// are decoded lossily.
    fn extract_commit(git_commit: &git2::Commit<'_>) -> Commit {
        let timestamp =
            DateTime::<Utc>::from_timestamp(git_commit.author().when().seconds(), 0)
                .unwrap_or_default();

        Commit {
            sha: git_commit.id().to_string(),
            message: String::from_utf8_lossy(git_commit.message_bytes()).into_owned(),
            timestamp,
        }
    }
}

impl TagSource for GitRepo {
    fn tags_by_creation_desc(&self) -> Result<Vec<String>, GitError> {
        let mut dated: Vec<(i64, String)> = self
            .tag_names()?
            .into_iter()
            .map(|name| (self.creator_time(&name), name))
            .collect();

        // Same order as `git for-each-ref --sort=-creatordate`: ties by name
        dated.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        debug!(count = dated.len(), "listed tags");
        Ok(dated.into_iter().map(|(_, name)| name).collect())
    }

    fn history(
        &self,
        from_exclusive: Option<&str>,
        to: &str,
        max_count: usize,
    ) -> Result<Vec<Commit>, GitError> {
        let to_oid = self.resolve_commit(to)?;
        let hide_oid = from_exclusive
            .map(|from| self.resolve_commit(from))
            .transpose()?;

        if max_count == 0 {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        revwalk.push(to_oid)?;
        if let Some(oid) = hide_oid {
            revwalk.hide(oid)?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk.take(max_count) {
            let git_commit = self.repo.find_commit(oid_result?)?;
            commits.push(Self::extract_commit(&git_commit));
        }

        debug!(
            from = from_exclusive.unwrap_or("<root>"),
            to,
            count = commits.len(),
            "walked history"
        );
        Ok(commits)
    }
}
