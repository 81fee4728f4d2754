// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tagdelta-git: Git tag and history access for tagdelta
//!
//! This library crate reads tags and commit history from a git repository
//! and resynchronises local tags with the remote.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use tagdelta_git::{GitRepo, TagSource};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let tags = repo.tags_by_creation_desc().expect("list tags");
//!
//! if let [newest, previous, ..] = tags.as_slice() {
//!     for c in repo.history(Some(previous), newest, 50).expect("walk range") {
//!         println!("{} - {}", c.short_sha(), c.subject());
//!     }
//! }
//! ```

pub mod commit;
pub mod error;
pub mod refresh;
pub mod repo;
pub mod source;

pub use commit::Commit;
pub use error::GitError;
pub use refresh::{PullOutcome, RefreshSummary, classify_pull_output, resync_all_tags};
pub use repo::GitRepo;
pub use source::TagSource;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::repo::GitRepo;
    pub use crate::source::TagSource;
}
