// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Full tag resynchronisation with the remote
//!
//! A refresh deletes every local tag and then runs `git pull --prune --tags`.
//! `git pull` reports informational progress on stderr and can exit non-zero
//! after a fetch that did update the tags, so its output is classified by
//! [`classify_pull_output`] rather than trusted by exit status alone.

use std::path::Path;
use std::process::Command;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::GitError;
use crate::repo::GitRepo;

/// Phrases in `git pull` output that mark an otherwise failed-looking pull
/// as successful.
///
/// This is substring matching on human-readable git output and will break
/// if git rewords these messages or runs under a non-English locale.
pub const BENIGN_PULL_PHRASES: &[&str] = &["new tag", "Already up to date", "From "];

/// Classification of `git pull` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum PullOutcome {
    /// The pull updated (or confirmed) the local tags
    Succeeded,
    /// The pull genuinely failed; carries git's output
    Failed(String),
}

/// Classify the output of a `git pull` that did not exit cleanly
#[must_use]
pub fn classify_pull_output(message: &str) -> PullOutcome {
    if BENIGN_PULL_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
    {
        PullOutcome::Succeeded
    } else {
        PullOutcome::Failed(message.trim().to_string())
    }
}

/// What a refresh did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    /// Local tags removed before pulling
    pub tags_deleted: usize,
    /// Local tags that could not be removed
    pub tags_skipped: Vec<String>,
    /// Combined stdout and stderr of `git pull`
    pub pull_output: String,
}

/// Delete every local tag and re-pull all remote tags with pruning
///
/// # Errors
///
/// Returns `GitError::RepositoryNotFound` for an invalid path,
/// `GitError::BareRepository` when there is no working directory to pull
/// into, `GitError::Io` when `git` cannot be spawned, and
/// `GitError::RefreshFailed` when the pull fails for real.
pub fn resync_all_tags(path: impl AsRef<Path>) -> Result<RefreshSummary, GitError> {
    let repo = GitRepo::open(path.as_ref())?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| GitError::BareRepository {
            path: repo.path().display().to_string(),
        })?
        .to_path_buf();

    let names = repo.tag_names()?;
    info!(count = names.len(), "Deleting local tags");

    let mut tags_deleted = 0;
    let mut tags_skipped = Vec::new();
    for name in names {
        match repo.delete_tag(&name) {
            Ok(()) => tags_deleted += 1,
            Err(e) => {
                debug!(tag = %name, error = %e, "Skipping tag");
                tags_skipped.push(name);
            }
        }
    }

    info!("Pulling remote tags");
    let pull_output = pull_tags(&workdir)?;
    info!(tags_deleted, skipped = tags_skipped.len(), "Tag refresh complete");

    Ok(RefreshSummary {
        tags_deleted,
        tags_skipped,
        pull_output,
    })
}

/// Run `git pull --prune --tags` in `workdir`
fn pull_tags(workdir: &Path) -> Result<String, GitError> {
    let output = Command::new("git")
        .current_dir(workdir)
        .args(["pull", "--prune", "--tags"])
        .output()?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        return Ok(combined);
    }

    match classify_pull_output(&combined) {
        PullOutcome::Succeeded => {
            warn!(status = %output.status, "git pull exited non-zero but reported a fetch; treating as success");
            Ok(combined)
        }
        PullOutcome::Failed(message) => Err(GitError::RefreshFailed { message }),
    }
}
