//! Error types and exit codes for gitfame

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for gitfame operations
///
/// Every variant is fatal for the run: nothing in the attribution core
/// recovers locally.
#[derive(Error, Debug)]
pub enum FameError {
    #[error("Repository not found: {path}")]
    RepositoryNotFound { path: String },

    #[error("git {command} failed: {message}")]
    BackendInvocation { command: String, message: String },

    #[error("Malformed attribution for {path} at line {line}: {message}")]
    MalformedAttribution {
        path: String,
        line: usize,
        message: String,
    },

    #[error("No history found for {path}")]
    NoHistory { path: String },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FameError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: Repository not found / output serialization
    /// - 2: Invalid input pattern
    /// - 3: Malformed attribution stream
    /// - 4: File without history
    /// - 5: Git invocation error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::RepositoryNotFound { .. } => ExitCode::from(1),
            Self::Serialization(_) => ExitCode::from(1),
            Self::InvalidPattern { .. } => ExitCode::from(2),
            Self::MalformedAttribution { .. } => ExitCode::from(3),
            Self::NoHistory { .. } => ExitCode::from(4),
            Self::BackendInvocation { .. } => ExitCode::from(5),
        }
    }
}

/// Result type alias for gitfame operations
pub type Result<T> = std::result::Result<T, FameError>;
