//! Resolved run configuration

use std::path::PathBuf;

use crate::attribution::IdentityField;
use crate::cli::{OrderBy, OutputFormat};
use crate::filter::FilterConfig;

/// Everything one run needs, independent of how it was supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FameConfig {
    /// Repository root all git commands run in
    pub repository: PathBuf,
    /// Revision whose tree is attributed
    pub revision: String,
    /// Author or committer credit
    pub identity: IdentityField,
    pub order_by: OrderBy,
    pub format: OutputFormat,
    pub filter: FilterConfig,
}

impl Default for FameConfig {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            revision: "HEAD".to_string(),
            identity: IdentityField::Author,
            order_by: OrderBy::Lines,
            format: OutputFormat::Tabular,
            filter: FilterConfig::default(),
        }
    }
}
