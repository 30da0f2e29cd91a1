//! Sequential, strict-fail aggregation over a file set

use super::engine::{AttributionEngine, FileOutcome};
use super::ledger::Ledger;
use super::IdentityField;
use crate::config::FameConfig;
use crate::error::Result;
use crate::filter::FileFilter;
use crate::git::Backend;

/// List the files tracked at `config.revision` and apply the configured filters
pub fn collect_files<B: Backend>(backend: &B, config: &FameConfig) -> Result<Vec<String>> {
    let filter = FileFilter::new(&config.filter)?;
    let files = backend.list_files(&config.revision)?;
    let total = files.len();

    let selected: Vec<String> = files.into_iter().filter(|f| filter.accepts(f)).collect();
    tracing::debug!("{} of {} tracked files selected", selected.len(), total);

    Ok(selected)
}

/// Attribute every file in order, returning the finished ledger
///
/// The first failing file aborts the run; the partially filled ledger is
/// dropped with the error.
pub fn aggregate<B: Backend>(
    backend: &B,
    revision: &str,
    field: IdentityField,
    files: &[String],
) -> Result<Ledger> {
    let engine = AttributionEngine::new(backend, revision, field);
    let mut ledger = Ledger::new();
    let mut fallbacks = 0usize;

    for path in files {
        tracing::debug!("attributing {}", path);
        if let FileOutcome::LastCommitter { .. } = engine.attribute_file(path, &mut ledger)? {
            fallbacks += 1;
        }
    }

    tracing::info!(
        "attributed {} files to {} identities ({} via last committer)",
        files.len(),
        ledger.len(),
        fallbacks
    );

    Ok(ledger)
}

/// Full run: discover, filter, and aggregate
pub fn run<B: Backend>(backend: &B, config: &FameConfig) -> Result<Ledger> {
    let files = collect_files(backend, config)?;
    aggregate(backend, &config.revision, config.identity, &files)
}
