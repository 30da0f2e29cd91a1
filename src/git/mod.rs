//! Git operations for blame-based attribution
//!
//! This module provides the git plumbing the attribution engine consumes.
//! It uses subprocess calls to git for maximum compatibility.

mod backend;

pub use backend::{Backend, GitBackend, LastCommit};

use std::path::Path;
use std::process::{Command, Output};

use crate::error::{FameError, Result};

/// Run a git command and return stdout as string (trimmed)
pub fn git_command(args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let output = run_git(args, cwd)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command and return stdout untouched
///
/// Porcelain streams are line oriented and a trailing tab-prefixed line is
/// meaningful, so they must not be trimmed.
pub fn git_command_raw(args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let output = run_git(args, cwd)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<Output> {
    let mut cmd = Command::new("git");
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| FameError::BackendInvocation {
        command: args.join(" "),
        message: format!("failed to execute git: {}", e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FameError::BackendInvocation {
            command: args.join(" "),
            message: stderr.trim().to_string(),
        });
    }

    Ok(output)
}

/// Check if a directory is inside a git work tree
pub fn is_git_repo(cwd: Option<&Path>) -> bool {
    git_command(&["rev-parse", "--is-inside-work-tree"], cwd)
        .map(|s| s == "true")
        .unwrap_or(false)
}
