use std::fmt;

use thiserror::Error;

/// Convenience result type for loader operations.
pub type LoadResult<T> = Result<T, Error>;

/// Convenience result type for reader functions.
pub type ReadResult<T> = Result<T, ReadError>;

/// Top-level error type returned by [`crate::loader::DataLoader::load`].
#[derive(Debug, Error)]
pub enum Error {
    /// The metadata document could not be read or parsed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// One or more manifest entries failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A declared source failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// The metadata source is missing, unreadable, or malformed.
///
/// Surfaced at [`crate::loader::DataLoader`] construction; never retried.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("failed to read metadata: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed JSON, or not an array of entries.
    #[error("malformed metadata document: {0}")]
    Json(#[from] serde_json::Error),
}

/// What is wrong with a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// `file_name` is missing or empty.
    MissingFileName,
    /// `file_name` already appeared in an earlier entry.
    DuplicateFileName,
    /// `import_instructions.function` is missing or empty.
    MissingFunction,
    /// `import_instructions.function` does not resolve in the registry.
    UnknownFunction(String),
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::MissingFileName => write!(f, "missing or empty 'file_name'"),
            IssueKind::DuplicateFileName => write!(f, "duplicate 'file_name'"),
            IssueKind::MissingFunction => write!(f, "missing or empty 'function'"),
            IssueKind::UnknownFunction(name) => {
                write!(f, "unknown operation '{name}' (not in registry)")
            }
        }
    }
}

/// One validation finding, tied to a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// 1-based entry position in the manifest.
    pub entry: usize,
    /// The entry's `file_name` (may be empty when that is the problem).
    pub file_name: String,
    /// What failed.
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file_name.is_empty() {
            write!(f, "entry {}: {}", self.entry, self.kind)
        } else {
            write!(f, "entry {} ('{}'): {}", self.entry, self.file_name, self.kind)
        }
    }
}

/// Aggregate validation failure listing every offending entry.
///
/// Validation never stops at the first problem; callers get the full list and
/// can fix the manifest in one pass.
#[derive(Debug, Error)]
#[error("invalid manifest: {}", format_issues(.issues))]
pub struct ValidationError {
    /// All findings, in manifest order.
    pub issues: Vec<ValidationIssue>,
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type returned by reader functions.
///
/// This is a single error enum shared across CSV/JSON/Parquet (and optional
/// Excel) readers.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "excel")]
    /// Excel reader error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Parquet reader error.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// A required named argument was not supplied.
    #[error("missing required argument '{name}'")]
    MissingArgument { name: &'static str },

    /// A named argument has the wrong type or an unusable value.
    #[error("bad argument '{name}': {message}")]
    BadArgument { name: String, message: String },

    /// A named argument the operation does not accept.
    #[error("unknown argument '{name}'")]
    UnknownArgument { name: String },

    /// The input itself is malformed (bad shape, empty workbook, etc.).
    #[error("malformed input: {message}")]
    Malformed { message: String },

    /// A value could not be converted at a specific position.
    #[error("failed to read value at row {row} column '{column}': {message}")]
    Value {
        row: usize,
        column: String,
        message: String,
    },
}

/// A specific entry's operation invocation failed.
///
/// Carries the failing `file_name` and the underlying cause. Once one entry
/// fails, the remaining entries are not attempted.
#[derive(Debug, Error)]
#[error("failed to load data from '{file_name}': {source}")]
pub struct LoadError {
    /// `file_name` of the entry that failed.
    pub file_name: String,
    /// Underlying reader failure.
    #[source]
    pub source: ReadError,
}
