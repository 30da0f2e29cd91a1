//! Per-author ownership accumulator

use std::collections::{HashMap, HashSet};

/// Aggregate ownership facts for one identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorStats {
    lines_owned: usize,
    commits: HashSet<String>,
    files: HashSet<String>,
}

impl AuthorStats {
    /// Total lines credited across every group of every file
    pub fn lines_owned(&self) -> usize {
        self.lines_owned
    }

    /// Distinct commits this identity was credited for
    pub fn commits(&self) -> &HashSet<String> {
        &self.commits
    }

    /// Distinct files this identity was credited in
    pub fn files(&self) -> &HashSet<String> {
        &self.files
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Run-scoped mapping from identity to [`AuthorStats`]
///
/// The ledger only grows: there is no way to remove credit once given.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    authors: HashMap<String, AuthorStats>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `author` with `line_count` lines of `file` from `commit`
    ///
    /// Commit and file membership are sets, so repeating a pair is a no-op
    /// for them, while `line_count` is added on every call.
    pub fn credit(&mut self, author: &str, commit: &str, file: &str, line_count: usize) {
        let stats = self.authors.entry(author.to_string()).or_default();
        stats.lines_owned += line_count;
        if !stats.commits.contains(commit) {
            stats.commits.insert(commit.to_string());
        }
        if !stats.files.contains(file) {
            stats.files.insert(file.to_string());
        }
    }

    pub fn get(&self, author: &str) -> Option<&AuthorStats> {
        self.authors.get(author)
    }

    /// Iterate identities and their stats in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuthorStats)> {
        self.authors.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}
