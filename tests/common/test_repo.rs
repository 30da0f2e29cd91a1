//! TestRepo builder backed by a temporary git repository

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use gitfame::GitBackend;

/// Builder for creating test repositories with controlled history
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty directory (not yet a git repository)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create and initialize a git repository
    pub fn init() -> Self {
        let repo = Self::new();
        repo.init_git();
        repo
    }

    /// Get the path to the test repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get path as string
    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().to_string()
    }

    /// Add a file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add an empty file
    pub fn add_empty_file(&self, relative_path: &str) -> &Self {
        self.add_file(relative_path, "")
    }

    /// Initialize as a git repository
    pub fn init_git(&self) -> &Self {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test User"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self
    }

    /// Create a commit with all files as "Test User"
    pub fn commit(&self, message: &str) -> &Self {
        self.commit_as("Test User", "Test User", message)
    }

    /// Create a commit with all files, attributed to the given identities
    pub fn commit_as(&self, author: &str, committer: &str, message: &str) -> &Self {
        self.git(&["add", "-A"]);
        let output = Command::new("git")
            .current_dir(self.path())
            .args(["commit", "-q", "-m", message])
            .env("GIT_AUTHOR_NAME", author)
            .env("GIT_AUTHOR_EMAIL", email_for(author))
            .env("GIT_COMMITTER_NAME", committer)
            .env("GIT_COMMITTER_EMAIL", email_for(committer))
            .output()
            .expect("Failed to git commit");
        assert!(
            output.status.success(),
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        self
    }

    /// Full SHA of a revision
    pub fn rev_parse(&self, revision: &str) -> String {
        self.git(&["rev-parse", revision]).trim().to_string()
    }

    /// Backend rooted at this repository
    pub fn backend(&self) -> GitBackend {
        GitBackend::new(self.path()).expect("Failed to open test repository")
    }

    /// Run a git command in the repository and expect success, return stdout
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the gitfame CLI against this repository
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_gitfame"))
            .arg("--repository")
            .arg(self.path())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (stdout, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (String, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    // ========================================================================
    // PRE-BUILT HISTORIES
    // ========================================================================

    /// Alice writes a Go file, Bob appends to it and adds a README
    pub fn with_two_authors(&self) -> &Self {
        self.add_file("main.go", "package main\n\nfunc main() {}\n")
            .commit_as("Alice", "Alice", "Add main");
        self.add_file(
            "main.go",
            "package main\n\nfunc main() {}\n\nfunc helper() {}\n",
        )
        .add_file("README.md", "# Demo\n")
        .commit_as("Bob", "Bob", "Add helper and readme")
    }
}

fn email_for(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replace(' ', "."))
}
