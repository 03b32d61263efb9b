//! Presentation collaborator for load progress.
//!
//! The loader never decides how results are displayed and never inspects its
//! execution environment; it hands `(summary, table)` pairs to an injected
//! [`LoadReporter`]. Implementations can print plain text, render rich
//! previews, record metrics, or do nothing.

use std::fmt;
use std::sync::Arc;

use crate::types::{ShapeSummary, Table};

/// Number of preview rows [`StdErrReporter`] prints per loaded source.
const PREVIEW_ROWS: usize = 5;

/// Observer interface for loader progress.
pub trait LoadReporter: Send + Sync {
    /// Called once the metadata document has been read, with its entry count.
    fn on_manifest_read(&self, _entry_count: usize) {}

    /// Called after each source loads successfully.
    fn on_source_loaded(&self, _summary: &ShapeSummary, _table: &Table) {}
}

/// A reporter that ignores everything. The loader's default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl LoadReporter for NullReporter {}

/// Plain-text reporting to stderr: one summary line and a small preview of
/// each loaded table.
#[derive(Debug, Default)]
pub struct StdErrReporter;

impl LoadReporter for StdErrReporter {
    fn on_manifest_read(&self, entry_count: usize) {
        if entry_count == 1 {
            eprintln!("There is 1 file in the metadata document.");
        } else {
            eprintln!("There are {entry_count} files in the metadata document.");
        }
    }

    fn on_source_loaded(&self, summary: &ShapeSummary, table: &Table) {
        eprintln!("{summary}");
        eprint!("{}", table.head(PREVIEW_ROWS));
    }
}

/// A reporter that fans out callbacks to a list of reporters.
#[derive(Default)]
pub struct CompositeReporter {
    reporters: Vec<Arc<dyn LoadReporter>>,
}

impl CompositeReporter {
    /// Create a new composite reporter from a list of reporters.
    pub fn new(reporters: Vec<Arc<dyn LoadReporter>>) -> Self {
        Self { reporters }
    }
}

impl fmt::Debug for CompositeReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeReporter")
            .field("reporters_len", &self.reporters.len())
            .finish()
    }
}

impl LoadReporter for CompositeReporter {
    fn on_manifest_read(&self, entry_count: usize) {
        for r in &self.reporters {
            r.on_manifest_read(entry_count);
        }
    }

    fn on_source_loaded(&self, summary: &ShapeSummary, table: &Table) {
        for r in &self.reporters {
            r.on_source_loaded(summary, table);
        }
    }
}
