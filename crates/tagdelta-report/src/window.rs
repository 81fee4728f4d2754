// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-group tag window selection

use serde::Serialize;

use crate::group::TagGroup;

/// A tag chosen for display within its group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTag {
    /// Raw tag name
    pub name: String,
    /// Prefix of the owning group
    pub group: String,
    /// Position in the group window, 0 = newest
    pub position: usize,
}

/// The newest `tags_per_group` tags of a group
///
/// Order is inherited from the group, which in turn inherits it from the
/// tag source; nothing is re-sorted here.
#[must_use]
pub fn select_window(group: &TagGroup, tags_per_group: usize) -> Vec<ResolvedTag> {
    group
        .tags
        .iter()
        .take(tags_per_group)
        .enumerate()
        .map(|(position, name)| ResolvedTag {
            name: name.clone(),
            group: group.prefix.clone(),
            position,
        })
        .collect()
}
