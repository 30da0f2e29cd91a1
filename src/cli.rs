//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::attribution::IdentityField;
use crate::config::FameConfig;
use crate::filter::{split_list, FilterConfig};

/// Per-author code ownership statistics from git blame
#[derive(Parser, Debug)]
#[command(name = "gitfame")]
#[command(about = "Count lines, commits, and files owned by each contributor of a git repository")]
#[command(version)]
pub struct Cli {
    /// Path to the git repository
    #[arg(short, long, default_value = ".", env = "GITFAME_REPOSITORY")]
    pub repository: PathBuf,

    /// Revision to attribute
    #[arg(long, default_value = "HEAD", env = "GITFAME_REVISION")]
    pub revision: String,

    /// Sort key for the results
    #[arg(long, default_value = "lines", value_enum)]
    pub order_by: OrderBy,

    /// Credit the committer instead of the author
    #[arg(long)]
    pub use_committer: bool,

    /// Output format
    #[arg(long, default_value = "tabular", value_enum)]
    pub format: OutputFormat,

    /// Comma-separated extensions to include (e.g. ".go,.md")
    #[arg(long, default_value = "")]
    pub extensions: String,

    /// Comma-separated language names to include (e.g. "go,markdown")
    #[arg(long, default_value = "")]
    pub languages: String,

    /// Comma-separated glob patterns of files to exclude
    #[arg(long, default_value = "")]
    pub exclude: String,

    /// Comma-separated glob patterns; only matching files are included
    #[arg(long, default_value = "")]
    pub restrict_to: String,

    /// Show verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert parsed arguments into the library configuration
    pub fn into_config(self) -> FameConfig {
        FameConfig {
            repository: self.repository,
            revision: self.revision,
            identity: IdentityField::from_use_committer(self.use_committer),
            order_by: self.order_by,
            format: self.format,
            filter: FilterConfig {
                extensions: split_list(&self.extensions),
                languages: split_list(&self.languages),
                exclude: split_list(&self.exclude),
                restrict_to: split_list(&self.restrict_to),
            },
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns for terminals
    #[default]
    Tabular,
    /// Comma-separated values with a header row
    Csv,
    /// A single JSON array
    Json,
    /// One JSON object per line
    JsonLines,
}

/// Primary sort key; ties fall through the remaining counters, then the name
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OrderBy {
    #[default]
    Lines,
    Commits,
    Files,
}
