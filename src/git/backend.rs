//! The version-control collaborator consumed by the attribution engine

use std::path::PathBuf;

use super::{git_command, git_command_raw, is_git_repo};
use crate::attribution::IdentityField;
use crate::error::{FameError, Result};

/// Most recent commit touching a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommit {
    /// Commit SHA (full)
    pub commit: String,
    /// Author or committer name, depending on the selected field
    pub identity: String,
}

impl LastCommit {
    /// Parse the two-line `%H%n%an` (or `%cn`) log output
    ///
    /// Returns `None` when git reported no commit at all.
    pub fn parse(output: &str) -> Option<Self> {
        let mut lines = output.lines();
        let commit = lines.next().map(str::trim).filter(|c| !c.is_empty())?;
        let identity = lines.next().map(str::trim).unwrap_or_default();

        Some(Self {
            commit: commit.to_string(),
            identity: identity.to_string(),
        })
    }
}

/// Producer of the text streams the attribution engine interprets
pub trait Backend {
    /// Repository-relative paths tracked at `revision`, in listing order
    fn list_files(&self, revision: &str) -> Result<Vec<String>>;

    /// Porcelain blame stream for one file
    fn blame(&self, revision: &str, path: &str) -> Result<String>;

    /// Most recent commit that touched `path` at `revision`
    fn last_commit(&self, revision: &str, path: &str, field: IdentityField) -> Result<LastCommit>;
}

/// [`Backend`] implemented by invoking the `git` executable
#[derive(Debug, Clone)]
pub struct GitBackend {
    repository: PathBuf,
}

impl GitBackend {
    /// Create a backend rooted at `repository`, which must be a git work tree
    pub fn new(repository: impl Into<PathBuf>) -> Result<Self> {
        let repository = repository.into();
        if !repository.is_dir() || !is_git_repo(Some(repository.as_path())) {
            return Err(FameError::RepositoryNotFound {
                path: repository.display().to_string(),
            });
        }
        Ok(Self { repository })
    }
}

impl Backend for GitBackend {
    fn list_files(&self, revision: &str) -> Result<Vec<String>> {
        let output = git_command(
            &["ls-tree", "-r", revision, "--name-only", "--full-name", "."],
            Some(&self.repository),
        )?;

        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn blame(&self, revision: &str, path: &str) -> Result<String> {
        git_command_raw(
            &["blame", revision, "--porcelain", "--", path],
            Some(&self.repository),
        )
    }

    fn last_commit(&self, revision: &str, path: &str, field: IdentityField) -> Result<LastCommit> {
        let format = format!("--format=%H%n{}", field.log_placeholder());
        let output = git_command(
            &["log", revision, "-n", "1", "-s", &format, "--", path],
            Some(&self.repository),
        )?;

        LastCommit::parse(&output).ok_or_else(|| FameError::NoHistory {
            path: path.to_string(),
        })
    }
}
