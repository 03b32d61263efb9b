//! The metadata document ("manifest") declaring which sources to load.
//!
//! Wire format: a JSON array of entry records.
//!
//! ```json
//! [
//!   {
//!     "file_name": "people.csv",
//!     "import_instructions": {
//!       "function": "read_csv",
//!       "arguments": { "path": "data/people.csv" }
//!     }
//!   }
//! ]
//! ```
//!
//! Entry order is preserved; it only matters for deterministic iteration and
//! result ordering, entries never depend on each other.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IssueKind, MetadataError, ValidationError, ValidationIssue};
use crate::registry::Registry;

/// Named arguments for a loading operation, as found in the document.
pub type ArgMap = serde_json::Map<String, serde_json::Value>;

/// How to load one source: a registry key plus named arguments.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ImportInstructions {
    /// Registry key of the loading operation (e.g. `read_csv`).
    #[serde(default)]
    pub function: String,
    /// Named parameters passed to the operation.
    #[serde(default)]
    pub arguments: ArgMap,
}

/// One declared data source.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Entry {
    /// Display label, and result-collection key when several entries exist.
    #[serde(default)]
    pub file_name: String,
    /// How to load this source.
    #[serde(default)]
    pub import_instructions: ImportInstructions,
}

/// An ordered metadata document.
///
/// Missing `file_name`/`function` fields deserialize as empty strings so a
/// structurally-sloppy document still parses; [`Manifest::validate`] then
/// reports every such entry in one aggregate error instead of failing on the
/// first.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Manifest {
    /// Entries in document order.
    pub entries: Vec<Entry>,
}

impl Manifest {
    /// Read and parse a manifest from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read and parse a manifest from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, MetadataError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a manifest from an in-memory JSON string.
    pub fn from_str(input: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Number of entries in the document.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document declares no sources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry against `registry`.
    ///
    /// Checks, per entry: non-empty `file_name`, non-empty `function`, and
    /// that `function` resolves in the registry; plus `file_name` uniqueness
    /// across the document (duplicates would make the result collection keys
    /// ambiguous, so they are rejected outright).
    ///
    /// Validate-all, fail-with-aggregate: the returned [`ValidationError`]
    /// lists every offending entry, not just the first.
    pub fn validate(&self, registry: &Registry) -> Result<(), ValidationError> {
        let mut issues: Vec<ValidationIssue> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for (idx0, entry) in self.entries.iter().enumerate() {
            let pos = idx0 + 1;
            let name = entry.file_name.trim();

            if name.is_empty() {
                issues.push(ValidationIssue {
                    entry: pos,
                    file_name: String::new(),
                    kind: IssueKind::MissingFileName,
                });
            } else if !seen.insert(name) {
                issues.push(ValidationIssue {
                    entry: pos,
                    file_name: name.to_string(),
                    kind: IssueKind::DuplicateFileName,
                });
            }

            let function = entry.import_instructions.function.trim();
            if function.is_empty() {
                issues.push(ValidationIssue {
                    entry: pos,
                    file_name: name.to_string(),
                    kind: IssueKind::MissingFunction,
                });
            } else if !registry.contains(function) {
                issues.push(ValidationIssue {
                    entry: pos,
                    file_name: name.to_string(),
                    kind: IssueKind::UnknownFunction(function.to_string()),
                });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}
