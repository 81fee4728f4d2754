// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tagdelta-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (tag or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The `git` executable could not be spawned
    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// Repository has no working directory to pull into
    #[error("Repository has no working directory: {path}")]
    BareRepository {
        /// Path of the bare repository
        path: String,
    },

    /// Pulling tags from the remote failed
    #[error("Tag refresh failed: {message}")]
    RefreshFailed {
        /// Output reported by git
        message: String,
    },
}
