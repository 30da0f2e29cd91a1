//! Blame-driven ownership attribution
//!
//! The modules here turn per-file porcelain blame streams into per-author
//! rollups:
//! - `parser` - porcelain stream → attribution blocks
//! - `ledger` - per-author accumulator (lines, commits, files)
//! - `engine` - per-file flow including the last-committer fallback
//! - `pipeline` - strict-fail driver over the whole file set

pub mod engine;
pub mod ledger;
pub mod parser;
pub mod pipeline;

pub use engine::{AttributionEngine, FileOutcome};
pub use ledger::{AuthorStats, Ledger};
pub use parser::{parse_porcelain, AttributionBlock};
pub use pipeline::{aggregate, collect_files, run};

/// Which identity of a commit receives ownership credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityField {
    #[default]
    Author,
    Committer,
}

impl IdentityField {
    /// Select the field from the `--use-committer` switch
    pub fn from_use_committer(use_committer: bool) -> Self {
        if use_committer {
            Self::Committer
        } else {
            Self::Author
        }
    }

    /// Metadata line prefix in `git blame --porcelain` output
    pub fn porcelain_prefix(&self) -> &'static str {
        match self {
            Self::Author => "author ",
            Self::Committer => "committer ",
        }
    }

    /// `git log --format` placeholder for the name
    pub fn log_placeholder(&self) -> &'static str {
        match self {
            Self::Author => "%an",
            Self::Committer => "%cn",
        }
    }
}
