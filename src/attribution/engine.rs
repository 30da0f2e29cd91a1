//! Per-file attribution: blame first, last committer when blame is empty

use super::ledger::Ledger;
use super::parser::parse_porcelain;
use super::IdentityField;
use crate::error::Result;
use crate::git::Backend;

/// How a file's ownership was settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The blame stream attributed lines to one or more identities
    Parsed { blocks: usize, lines: usize },
    /// The blame stream was empty; the last commit touching the file wins
    LastCommitter { commit: String, identity: String },
}

/// Attributes single files against a [`Backend`] at one revision
pub struct AttributionEngine<'a, B: Backend> {
    backend: &'a B,
    revision: &'a str,
    field: IdentityField,
}

impl<'a, B: Backend> AttributionEngine<'a, B> {
    pub fn new(backend: &'a B, revision: &'a str, field: IdentityField) -> Self {
        Self {
            backend,
            revision,
            field,
        }
    }

    /// Attribute one file and record the credit in `ledger`
    pub fn attribute_file(&self, path: &str, ledger: &mut Ledger) -> Result<FileOutcome> {
        let stream = self.backend.blame(self.revision, path)?;
        let blocks = parse_porcelain(path, &stream, self.field)?;

        if blocks.is_empty() {
            return self.attribute_to_last_committer(path, ledger);
        }

        let mut lines = 0;
        for block in &blocks {
            ledger.credit(&block.author, &block.commit, path, block.line_count);
            lines += block.line_count;
        }

        Ok(FileOutcome::Parsed {
            blocks: blocks.len(),
            lines,
        })
    }

    fn attribute_to_last_committer(&self, path: &str, ledger: &mut Ledger) -> Result<FileOutcome> {
        let last = self.backend.last_commit(self.revision, path, self.field)?;
        tracing::debug!(
            "{}: empty blame, attributing to {} ({})",
            path,
            last.identity,
            last.commit
        );

        ledger.credit(&last.identity, &last.commit, path, 0);

        Ok(FileOutcome::LastCommitter {
            commit: last.commit,
            identity: last.identity,
        })
    }
}
