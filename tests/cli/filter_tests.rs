//! Tests for --extensions, --languages, --exclude, and --restrict-to

use crate::common::{assert_counts, parse_json_rows, row_for, TestRepo};

fn mixed_repo() -> TestRepo {
    let repo = TestRepo::init();
    repo.add_file("main.go", "package main\n")
        .add_file("pkg/util/util.go", "package util\n\nfunc U() {}\n")
        .add_file("README.md", "# Title\n\nText\n")
        .add_file("scripts/build.sh", "#!/bin/sh\n")
        .commit_as("Alice", "Alice", "Initial layout");
    repo
}

fn lines_for(repo: &TestRepo, args: &[&str]) -> u64 {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    let rows = parse_json_rows(&repo.run_cli_success(&full));
    if rows.is_empty() {
        return 0;
    }
    row_for(&rows, "Alice")["lines"].as_u64().unwrap()
}

#[test]
fn test_no_filters_count_everything() {
    let repo = mixed_repo();
    assert_eq!(lines_for(&repo, &[]), 1 + 3 + 3 + 1);
}

#[test]
fn test_extensions_filter() {
    let repo = mixed_repo();
    assert_eq!(lines_for(&repo, &["--extensions", ".go"]), 4);
    assert_eq!(lines_for(&repo, &["--extensions", ".go,.md"]), 7);
}

#[test]
fn test_languages_filter() {
    let repo = mixed_repo();
    assert_eq!(lines_for(&repo, &["--languages", "markdown"]), 3);
    assert_eq!(lines_for(&repo, &["--languages", "Go,bash"]), 5);
}

#[test]
fn test_exclude_glob() {
    let repo = mixed_repo();
    assert_eq!(lines_for(&repo, &["--exclude", "pkg/*/*,*.md"]), 2);
}

#[test]
fn test_restrict_to_glob() {
    let repo = mixed_repo();
    let rows = parse_json_rows(&repo.run_cli_success(&[
        "--format",
        "json",
        "--restrict-to",
        "pkg/**",
    ]));
    assert_counts(row_for(&rows, "Alice"), 3, 1, 1);
}

#[test]
fn test_filters_can_remove_every_file() {
    let repo = mixed_repo();
    let output = repo.run_cli_success(&["--format", "json", "--extensions", ".rs"]);
    assert_eq!(output.trim(), "[]");
}
