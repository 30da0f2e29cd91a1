//! File-set filtering by extension, language, and glob

use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{FameError, Result};
use crate::lang::extensions_for;

/// Raw filter inputs; an empty list means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Extensions with leading dot, e.g. `.go`
    pub extensions: Vec<String>,
    /// Language names resolved through the language table
    pub languages: Vec<String>,
    /// Globs; matching files are dropped
    pub exclude: Vec<String>,
    /// Globs; when present a file must match one of them
    pub restrict_to: Vec<String>,
}

/// Compiled form of [`FilterConfig`]
#[derive(Debug)]
pub struct FileFilter {
    extensions: Option<Vec<String>>,
    language_extensions: Option<Vec<String>>,
    exclude: Option<GlobSet>,
    restrict_to: Option<GlobSet>,
}

impl FileFilter {
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let language_extensions = extensions_for(&config.languages);

        Ok(Self {
            extensions: non_empty(config.extensions.clone()),
            // Only known languages restrict the set: a list of unknown names is no filter
            language_extensions: non_empty(language_extensions),
            exclude: build_globset(&config.exclude)?,
            restrict_to: build_globset(&config.restrict_to)?,
        })
    }

    /// Whether `path` (repository-relative) passes every configured filter
    pub fn accepts(&self, path: &str) -> bool {
        if !has_extension(path, self.extensions.as_deref()) {
            return false;
        }
        if !has_extension(path, self.language_extensions.as_deref()) {
            return false;
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(path) {
                return false;
            }
        }
        if let Some(restrict_to) = &self.restrict_to {
            if !restrict_to.is_match(path) {
                return false;
            }
        }
        true
    }
}

/// Split a comma-separated flag value into its entries
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn has_extension(path: &str, allowed: Option<&[String]>) -> bool {
    let Some(allowed) = allowed else {
        return true;
    };
    let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let dotted = format!(".{}", ext);
    allowed.iter().any(|a| *a == dotted)
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| FameError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| FameError::InvalidPattern {
            pattern: patterns.join(","),
            message: e.to_string(),
        })
}
