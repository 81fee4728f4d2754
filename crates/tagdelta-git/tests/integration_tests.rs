// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for tagdelta-git
//!
//! These tests build real repositories to verify tag ordering, history
//! ranges and the refresh workflow.


use tagdelta_git::{Commit, GitError, GitRepo, TagSource, resync_all_tags};
use test_utils::TestGitRepo;

fn subjects(commits: &[Commit]) -> Vec<String> {
    commits.iter().map(|c| c.subject().to_string()).collect()
}

#[test]
fn test_tags_listed_newest_first_across_prefixes() {
    let mut fixture = TestGitRepo::new("listing");
    fixture.commit_and_tag("first", "uat-v1");
    fixture.commit_and_tag("second", "prd-v1");
    fixture.commit("third");
    fixture.annotated_tag("uat-v2");

    let repo = GitRepo::open(fixture.path()).expect("open");
    let tags = repo.tags_by_creation_desc().expect("tags");
    assert_eq!(tags, vec!["uat-v2", "prd-v1", "uat-v1"]);
}

#[test]
fn test_history_between_consecutive_tags() {
    let mut fixture = TestGitRepo::new("between");
    fixture.commit_and_tag("base", "v1");
    fixture.commits("feature", 3);
    fixture.commit_and_tag("release v2", "v2");

    let repo = GitRepo::open(fixture.path()).expect("open");
    let commits = repo.history(Some("v1"), "v2", 50).expect("history");

    assert_eq!(
        subjects(&commits),
        vec!["release v2", "feature 2", "feature 1", "feature 0"]
    );
    for window in commits.windows(2) {
        assert!(
            window[0].timestamp >= window[1].timestamp,
            "Commits should be ordered newest first"
        );
    }
}

#[test]
fn test_history_without_lower_bound_reaches_root() {
    let mut fixture = TestGitRepo::new("unbounded");
    fixture.commits("c", 4);
    fixture.tag("v1");

    let repo = GitRepo::open(fixture.path()).expect("open");
    let commits = repo.history_to("v1", 20).expect("history");
    assert_eq!(subjects(&commits), vec!["c 3", "c 2", "c 1", "c 0"]);
    assert!(commits.iter().all(|c| Commit::is_valid_sha(&c.sha)));
}

#[test]
fn test_history_of_identical_tags_is_empty() {
    let mut fixture = TestGitRepo::new("identical");
    fixture.commit("only");
    fixture.tag("prd-v1");
    fixture.tag("uat-v1");

    let repo = GitRepo::open(fixture.path()).expect("open");
    let commits = repo.history(Some("prd-v1"), "uat-v1", 10).expect("history");
    assert!(commits.is_empty());
}

#[test]
fn test_history_with_unknown_lower_bound_fails() {
    let mut fixture = TestGitRepo::new("unknown-bound");
    fixture.commit_and_tag("only", "v1");

    let repo = GitRepo::open(fixture.path()).expect("open");
    let result = repo.history(Some("missing"), "v1", 10);
    match result {
        Err(GitError::InvalidReference { reference }) => assert_eq!(reference, "missing"),
        other => panic!("Expected InvalidReference, got {other:?}"),
    }
}

#[test]
fn test_tag_resolves_over_branch_of_same_name() {
    let mut fixture = TestGitRepo::new("shadow");
    fixture.commit_and_tag("tagged", "release");
    fixture.commit("later");

    // A branch with the same name pointing at the newer commit
    let repo2 = git2::Repository::open(fixture.path()).expect("open");
    let head = repo2.head().unwrap().peel_to_commit().unwrap();
    repo2.branch("release", &head, false).unwrap();

    let repo = GitRepo::open(fixture.path()).expect("open");
    let commits = repo.history_to("release", 1).expect("history");
    assert_eq!(subjects(&commits), vec!["tagged"]);
}

#[test]
fn test_resync_restores_remote_tags_and_drops_local_ones() {
    let mut origin = TestGitRepo::new("origin");
    origin.commit_and_tag("one", "prd-v1");
    origin.commit_and_tag("two", "prd-v2");

    let mut clone = TestGitRepo::clone_from(&origin, "clone");
    clone.tag("local-only");
    let mut before = clone.tag_names();
    before.sort();
    assert_eq!(before, vec!["local-only", "prd-v1", "prd-v2"]);

    let summary = resync_all_tags(clone.path()).expect("refresh");
    assert_eq!(summary.tags_deleted, 3);
    assert!(summary.tags_skipped.is_empty());

    let mut after = clone.tag_names();
    after.sort();
    assert_eq!(after, vec!["prd-v1", "prd-v2"]);
}

#[test]
fn test_resync_is_idempotent() {
    let mut origin = TestGitRepo::new("origin-idem");
    origin.commit_and_tag("one", "uat-v1");

    let clone = TestGitRepo::clone_from(&origin, "clone-idem");
    resync_all_tags(clone.path()).expect("first refresh");
    resync_all_tags(clone.path()).expect("second refresh");
    assert_eq!(clone.tag_names(), vec!["uat-v1"]);
}

#[test]
fn test_resync_without_remote_fails() {
    let mut fixture = TestGitRepo::new("no-remote");
    fixture.commit_and_tag("one", "v1");

    let result = resync_all_tags(fixture.path());
    assert!(
        matches!(result, Err(GitError::RefreshFailed { .. })),
        "Expected RefreshFailed, got {result:?}"
    );
}
