// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tag grouping by name prefix
//!
//! Groups are ordered by a fixed priority table of well-known deployment
//! prefixes; any other prefix follows them in configured order. Each tag is
//! consumed by the first group, in that order, whose prefix it starts with.

/// Well-known prefixes in display priority order
pub const KNOWN_PREFIXES: [&str; 7] = [
    "prd-v",
    "uat-v",
    "v1.0.",
    "preview-v",
    "lab-athena",
    "lab-eevee",
    "lab-flareon",
];

/// Rank shared by every prefix outside [`KNOWN_PREFIXES`]
pub const UNKNOWN_PRIORITY: usize = KNOWN_PREFIXES.len();

/// The prefix displayed under an alias
pub const STAGING_PREFIX: &str = "v1.0.";

/// Display alias for [`STAGING_PREFIX`]
pub const STAGING_DISPLAY_NAME: &str = "stg";

/// Tags claimed by one prefix, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    /// The group's prefix
    pub prefix: String,
    /// Matching tag names in tag-source order
    pub tags: Vec<String>,
}

impl TagGroup {
    /// Display name for this group
    #[must_use]
    pub fn display_name(&self) -> &str {
        display_name(&self.prefix)
    }
}

/// Display priority of a prefix; lower sorts first
#[must_use]
pub fn priority(prefix: &str) -> usize {
    KNOWN_PREFIXES
        .iter()
        .position(|known| *known == prefix)
        .unwrap_or(UNKNOWN_PRIORITY)
}

/// Display name of a prefix
#[must_use]
pub fn display_name(prefix: &str) -> &str {
    if prefix == STAGING_PREFIX {
        STAGING_DISPLAY_NAME
    } else {
        prefix
    }
}

/// Order prefixes for display
///
/// Known prefixes come first in table order; unknown prefixes keep their
/// relative input order after them.
#[must_use]
pub fn sort_prefixes<S: AsRef<str>>(prefixes: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = prefixes.iter().map(|p| p.as_ref().to_string()).collect();
    sorted.sort_by_key(|prefix| priority(prefix));
    sorted
}

/// Partition tags into groups
///
/// `prefixes` must already be in priority order (see [`sort_prefixes`]).
/// Groups are returned in that order, including empty ones. Tags matching no
/// prefix are dropped; a tag matching several prefixes lands only in the
/// first.
#[must_use]
pub fn classify<S: AsRef<str>>(tags: &[String], prefixes: &[S]) -> Vec<TagGroup> {
    let mut claimed = vec![false; tags.len()];

    prefixes
        .iter()
        .map(|prefix| {
            let prefix = prefix.as_ref();
            let mut matched = Vec::new();
            for (tag, taken) in tags.iter().zip(claimed.iter_mut()) {
                if !*taken && tag.starts_with(prefix) {
                    *taken = true;
                    matched.push(tag.clone());
                }
            }
            TagGroup {
                prefix: prefix.to_string(),
                tags: matched,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_display_name_staging_alias() {
        assert_eq!(display_name("v1.0."), "stg");
        assert_eq!(display_name("prd-v"), "prd-v");
        assert_eq!(display_name("V1.0."), "V1.0.");
    }

    #[test]
    fn test_known_prefixes_sorted_by_table() {
        let sorted = sort_prefixes(&["lab-flareon", "v1.0.", "prd-v", "uat-v"]);
        assert_eq!(sorted, strings(&["prd-v", "uat-v", "v1.0.", "lab-flareon"]));
    }

    #[test]
    fn test_unknown_prefixes_after_known_in_input_order() {
        let sorted = sort_prefixes(&["zeta-", "prd-v", "alpha-", "uat-v", "mid-"]);
        assert_eq!(
            sorted,
            strings(&["prd-v", "uat-v", "zeta-", "alpha-", "mid-"])
        );
    }

    #[test]
    fn test_priority_unknown_sentinel() {
        assert_eq!(priority("prd-v"), 0);
        assert_eq!(priority("lab-flareon"), 6);
        assert_eq!(priority("custom-x"), UNKNOWN_PRIORITY);
        assert_eq!(priority("PRD-V"), UNKNOWN_PRIORITY);
    }

    #[test]
    fn test_classify_keeps_tag_source_order() {
        let tags = strings(&["prd-v3", "uat-v9", "prd-v2", "prd-v1"]);
        let groups = classify(&tags, &["prd-v", "uat-v"]);
        assert_eq!(groups[0].tags, strings(&["prd-v3", "prd-v2", "prd-v1"]));
        assert_eq!(groups[1].tags, strings(&["uat-v9"]));
    }

    #[test]
    fn test_classify_drops_unmatched_tags() {
        let tags = strings(&["prd-v1", "hotfix-1", "random"]);
        let groups = classify(&tags, &["prd-v"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tags, strings(&["prd-v1"]));
    }

    #[test]
    fn test_classify_first_prefix_wins() {
        // "lab-eevee-v1" also starts with the unknown "lab-"
        let tags = strings(&["lab-eevee-v1", "lab-misc"]);
        let prefixes = sort_prefixes(&["lab-", "lab-eevee"]);
        let groups = classify(&tags, &prefixes);

        assert_eq!(groups[0].prefix, "lab-eevee");
        assert_eq!(groups[0].tags, strings(&["lab-eevee-v1"]));
        assert_eq!(groups[1].prefix, "lab-");
        assert_eq!(groups[1].tags, strings(&["lab-misc"]));
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let tags = strings(&["PRD-v1", "prd-v1"]);
        let groups = classify(&tags, &["prd-v"]);
        assert_eq!(groups[0].tags, strings(&["prd-v1"]));
    }

    #[test]
    fn test_classify_returns_empty_groups() {
        let tags = strings(&["prd-v1"]);
        let groups = classify(&tags, &["prd-v", "uat-v"]);
        assert_eq!(groups.len(), 2);
        assert!(groups[1].tags.is_empty());
    }

    #[test]
    fn test_staging_tags_match_literal_dots() {
        let tags = strings(&["v1.0.12", "v1.01", "v1.0x"]);
        let groups = classify(&tags, &["v1.0."]);
        assert_eq!(groups[0].tags, strings(&["v1.0.12"]));
        assert_eq!(groups[0].display_name(), "stg");
    }
}
