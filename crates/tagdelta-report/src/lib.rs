// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tagdelta-report: release tag reports
//!
//! This library crate groups repository tags by name prefix, resolves the
//! commits each tag introduced relative to the previous tag in its group,
//! and renders the result as a self-contained HTML report.
//!
//! # Example
//!
//! ```no_run
//! use tagdelta_git::GitRepo;
//! use tagdelta_report::{ReportOptions, build_report, render::render_json};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let report = build_report(&repo, &ReportOptions::default()).expect("build report");
//! println!("{}", render_json(&report).expect("render"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod group;
pub mod memory;
pub mod options;
pub mod range;
pub mod render;
pub mod report;
pub mod window;

pub use error::{RenderError, ReportError};
pub use group::{TagGroup, classify, display_name, sort_prefixes};
pub use memory::MemorySource;
pub use options::{CommitMode, ReportOptions};
pub use report::{CommitRecord, GroupEntry, Report, TagEntry, build_report};
pub use window::{ResolvedTag, select_window};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::options::{CommitMode, ReportOptions};
    pub use crate::report::{Report, build_report};
    pub use tagdelta_git::TagSource;
}
