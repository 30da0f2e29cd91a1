//! Rendering a finished ledger as tabular, CSV, JSON, or JSON-lines text

use std::cmp::Ordering;

use serde::Serialize;

use crate::attribution::Ledger;
use crate::cli::{OrderBy, OutputFormat};
use crate::error::Result;

const HEADER: [&str; 4] = ["Name", "Lines", "Commits", "Files"];

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub name: String,
    pub lines: usize,
    pub commits: usize,
    pub files: usize,
}

impl AuthorSummary {
    fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.lines.to_string(),
            self.commits.to_string(),
            self.files.to_string(),
        ]
    }
}

/// Summarize the ledger and sort it by `order_by`
///
/// Counters sort descending in the key order of `order_by`; the name breaks
/// remaining ties ascending.
pub fn summarize(ledger: &Ledger, order_by: OrderBy) -> Vec<AuthorSummary> {
    let mut summaries: Vec<AuthorSummary> = ledger
        .iter()
        .map(|(name, stats)| AuthorSummary {
            name: name.to_string(),
            lines: stats.lines_owned(),
            commits: stats.commit_count(),
            files: stats.file_count(),
        })
        .collect();

    summaries.sort_by(|a, b| compare(a, b, order_by));
    summaries
}

fn compare(a: &AuthorSummary, b: &AuthorSummary, order_by: OrderBy) -> Ordering {
    let key = |s: &AuthorSummary| match order_by {
        OrderBy::Lines => (s.lines, s.commits, s.files),
        OrderBy::Commits => (s.commits, s.lines, s.files),
        OrderBy::Files => (s.files, s.lines, s.commits),
    };

    key(b).cmp(&key(a)).then_with(|| a.name.cmp(&b.name))
}

/// Render `ledger` in the requested format, newline-terminated
pub fn render(ledger: &Ledger, format: OutputFormat, order_by: OrderBy) -> Result<String> {
    let summaries = summarize(ledger, order_by);

    match format {
        OutputFormat::Tabular => Ok(render_tabular(&summaries)),
        OutputFormat::Csv => Ok(render_csv(&summaries)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&summaries)?)),
        OutputFormat::JsonLines => {
            let mut out = String::new();
            for summary in &summaries {
                out.push_str(&serde_json::to_string(summary)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

fn render_tabular(summaries: &[AuthorSummary]) -> String {
    let rows: Vec<[String; 4]> = summaries.iter().map(AuthorSummary::cells).collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_tabular_row(&mut out, &HEADER.map(str::to_string), &widths);
    for row in &rows {
        push_tabular_row(&mut out, row, &widths);
    }
    out
}

fn push_tabular_row(out: &mut String, row: &[String; 4], widths: &[usize; 4]) {
    let last = row.len() - 1;
    for (i, cell) in row.iter().enumerate() {
        if i == last {
            out.push_str(cell);
            out.push('\n');
        } else {
            out.push_str(&format!("{:<width$} ", cell, width = widths[i]));
        }
    }
}

fn render_csv(summaries: &[AuthorSummary]) -> String {
    let mut out = String::new();
    out.push_str(&HEADER.join(","));
    out.push('\n');

    for summary in summaries {
        let cells = summary.cells();
        let escaped: Vec<String> = cells.iter().map(|c| csv_field(c)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) || value.starts_with(char::is_whitespace) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
