// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tagdelta-report

use thiserror::Error;

/// Errors that abort a report generation
///
/// Failures resolving a single tag's history never appear here; they are
/// logged and the tag is reported with no commits.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The tag list could not be read from the repository
    #[error("Repository access failed: {0}")]
    RepositoryAccess(#[source] tagdelta_git::GitError),

    /// A report option is outside its allowed range
    #[error("Invalid option {field}: {reason}")]
    InvalidOption {
        /// Name of the offending option
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Errors that can occur while rendering a report
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template parse or render failure
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
