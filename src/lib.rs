//! gitfame: per-contributor code ownership statistics
//!
//! This library computes how many lines, commits, and files each
//! contributor owns at a given revision of a git repository. It runs
//! `git blame --porcelain` on every tracked file, parses the attribution
//! groups, and rolls the results up per author (or committer).
//!
//! # Example
//!
//! ```ignore
//! use gitfame::{git::GitBackend, FameConfig};
//!
//! let config = FameConfig::default();
//! let backend = GitBackend::new(&config.repository)?;
//! let ledger = gitfame::attribution::run(&backend, &config)?;
//! print!("{}", gitfame::format::render(&ledger, config.format, config.order_by)?);
//! ```

pub mod attribution;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod git;
pub mod lang;
pub mod logging;

// Re-export commonly used types
pub use attribution::{AuthorStats, IdentityField, Ledger};
pub use cli::{Cli, OrderBy, OutputFormat};
pub use config::FameConfig;
pub use error::{FameError, Result};
pub use format::{render, AuthorSummary};
pub use git::{Backend, GitBackend};
