//! Porcelain blame stream parsing
//!
//! `git blame --porcelain` emits one group per run of lines from the same
//! commit:
//!
//! ```text
//! <sha> <orig-line> <final-line> <num-lines>
//! author Alice
//! author-mail <alice@example.com>
//! ...
//! \t<source line>
//! <sha> <orig-line> <final-line>
//! \t<source line>
//! ```
//!
//! Full metadata is only printed the first time a commit appears in the
//! file. Later groups for the same commit carry just the header, so the
//! identity resolved at first sight is reused for them.

use std::collections::HashMap;

use super::IdentityField;
use crate::error::{FameError, Result};

/// One header group of a porcelain stream, resolved to an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionBlock {
    /// Commit SHA from the group header
    pub commit: String,
    /// Identity credited for the group
    pub author: String,
    /// Number of source lines the header announces
    pub line_count: usize,
    /// Whether this is the first group of `commit` within the file
    pub first_in_file: bool,
}

/// Parse one file's porcelain stream into attribution blocks
///
/// An empty stream yields no blocks; the caller decides how to attribute
/// such a file. A group whose stream ends before all announced content
/// lines were seen is still credited in full. A first group of a commit
/// without the selected identity line credits nothing.
pub fn parse_porcelain(
    path: &str,
    stream: &str,
    field: IdentityField,
) -> Result<Vec<AttributionBlock>> {
    let prefix = field.porcelain_prefix();
    let mut lines = stream
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .peekable();
    let mut resolved: HashMap<String, String> = HashMap::new();
    let mut blocks = Vec::new();

    while let Some((number, header)) = lines.next() {
        if header.is_empty() {
            continue;
        }

        let (commit, line_count) = parse_header(path, number, header)?;
        let known = resolved.get(commit).cloned();
        let mut found: Option<String> = None;

        let mut seen = 0;
        while seen < line_count {
            let Some((_, line)) = lines.next() else {
                break;
            };

            if line.starts_with('\t') {
                seen += 1;
                continue;
            }

            let Some(value) = line.strip_prefix(prefix) else {
                continue;
            };
            let value = value.trim();

            match &known {
                Some(existing) if existing != value => {
                    tracing::warn!(
                        "{}: commit {} repeats with {}'{}', keeping '{}'",
                        path,
                        commit,
                        prefix,
                        value,
                        existing
                    );
                }
                Some(_) => {}
                None => {
                    if found.is_none() {
                        found = Some(value.to_string());
                    }
                }
            }
        }

        // Metadata of a first occurrence may outlast its content lines (e.g. N = 0)
        if known.is_none() && found.is_none() {
            while let Some((_, line)) = lines.next_if(|(_, l)| is_metadata(l)) {
                if let Some(value) = line.strip_prefix(prefix) {
                    found = Some(value.trim().to_string());
                    break;
                }
            }
            while lines.next_if(|(_, l)| is_metadata(l)).is_some() {}
        }

        let block = match known {
            Some(author) => AttributionBlock {
                commit: commit.to_string(),
                author,
                line_count,
                first_in_file: false,
            },
            None => {
                let Some(author) = found else {
                    tracing::warn!(
                        "{}: commit {} at line {} has no '{}' line, group skipped",
                        path,
                        commit,
                        number,
                        prefix.trim_end()
                    );
                    continue;
                };
                resolved.insert(commit.to_string(), author.clone());
                AttributionBlock {
                    commit: commit.to_string(),
                    author,
                    line_count,
                    first_in_file: true,
                }
            }
        };

        blocks.push(block);
    }

    Ok(blocks)
}

/// A non-content line that cannot start a new group
fn is_metadata(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('\t') && !looks_like_header(line)
}

/// `<sha> <orig-line> <final-line> [<num-lines>]`
fn looks_like_header(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return false;
    };
    let Some(last) = tokens.last() else {
        return false;
    };
    first.chars().all(|c| c.is_ascii_hexdigit()) && last.parse::<usize>().is_ok()
}

/// Split a group header into its commit id and announced line count
fn parse_header<'a>(path: &str, number: usize, header: &'a str) -> Result<(&'a str, usize)> {
    let malformed = |message: String| FameError::MalformedAttribution {
        path: path.to_string(),
        line: number,
        message,
    };

    if header.starts_with('\t') {
        return Err(malformed("content line where a group header was expected".to_string()));
    }

    let mut tokens = header.split_whitespace();
    let commit = tokens
        .next()
        .ok_or_else(|| malformed("empty group header".to_string()))?;
    let count = tokens.last().unwrap_or(commit);

    let line_count = count.parse::<usize>().map_err(|_| {
        malformed(format!(
            "group size '{}' is not a non-negative integer",
            count
        ))
    })?;

    Ok((commit, line_count))
}
