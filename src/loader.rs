//! Metadata-driven loader.
//!
//! [`DataLoader`] reads a manifest once at construction, validates it against
//! a [`Registry`], and on [`DataLoader::load`] invokes each entry's operation
//! in document order, producing either a single [`Table`] or an
//! order-preserving [`TableSet`] keyed by `file_name`.

use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, LoadError, LoadResult, MetadataError, ValidationError};
use crate::manifest::Manifest;
use crate::registry::Registry;
use crate::report::{LoadReporter, NullReporter};
use crate::types::{ShapeSummary, Table};

/// Order-preserving collection of named tables.
///
/// Keys are manifest `file_name`s; iteration order matches document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSet {
    entries: Vec<(String, Table)>,
}

impl TableSet {
    /// Look up a table by `file_name`.
    pub fn get(&self, file_name: &str) -> Option<&Table> {
        self.entries
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, table)| table)
    }

    /// File names, in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(file_name, table)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.entries.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tables were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, file_name: String, table: Table) {
        self.entries.push((file_name, table));
    }
}

impl IntoIterator for TableSet {
    type Item = (String, Table);
    type IntoIter = std::vec::IntoIter<(String, Table)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The result of a load: a bare table for single-entry manifests, otherwise
/// a name-keyed collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    /// The manifest had exactly one entry.
    Single(Table),
    /// The manifest had zero or several entries.
    Tables(TableSet),
}

impl Loaded {
    /// The single table, when the manifest had exactly one entry.
    pub fn as_single(&self) -> Option<&Table> {
        match self {
            Loaded::Single(table) => Some(table),
            Loaded::Tables(_) => None,
        }
    }

    /// Consume into the single table, when there is one.
    pub fn into_single(self) -> Option<Table> {
        match self {
            Loaded::Single(table) => Some(table),
            Loaded::Tables(_) => None,
        }
    }

    /// The named collection, when the manifest had zero or several entries.
    pub fn as_tables(&self) -> Option<&TableSet> {
        match self {
            Loaded::Single(_) => None,
            Loaded::Tables(set) => Some(set),
        }
    }
}

/// Loads the sources declared in a metadata document.
///
/// The manifest is read eagerly at construction and kept; load results are
/// not cached, so calling [`DataLoader::load`] twice re-reads every source.
pub struct DataLoader {
    manifest: Manifest,
    registry: Registry,
    reporter: Arc<dyn LoadReporter>,
}

impl std::fmt::Debug for DataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

impl DataLoader {
    /// Read the manifest at `path` and build a loader dispatching through
    /// `registry`.
    ///
    /// Fails with [`MetadataError`] when the file is missing, unreadable, or
    /// not a well-formed document. Validation is deferred to
    /// [`DataLoader::validate`] / [`DataLoader::load`] so all entry problems
    /// can be reported together.
    pub fn from_path(path: impl AsRef<Path>, registry: Registry) -> Result<Self, MetadataError> {
        Ok(Self::from_manifest(Manifest::from_path(path)?, registry))
    }

    /// Build a loader from an already-parsed manifest.
    pub fn from_manifest(manifest: Manifest, registry: Registry) -> Self {
        Self {
            manifest,
            registry,
            reporter: Arc::new(NullReporter),
        }
    }

    /// Attach a presentation reporter.
    ///
    /// The manifest has already been read at this point, so the reporter is
    /// immediately told the entry count.
    pub fn with_reporter(mut self, reporter: Arc<dyn LoadReporter>) -> Self {
        reporter.on_manifest_read(self.entry_count());
        self.reporter = reporter;
        self
    }

    /// Number of entries in the manifest.
    pub fn entry_count(&self) -> usize {
        self.manifest.len()
    }

    /// The parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Validate the manifest against this loader's registry.
    ///
    /// See [`Manifest::validate`]: all offending entries are reported in one
    /// aggregate [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.manifest.validate(&self.registry)
    }

    /// Load every declared source, in document order.
    ///
    /// Validation runs first; on [`ValidationError`] no operation is invoked.
    /// Each entry's operation is then resolved and called with the entry's
    /// named arguments. After each success the reporter receives the table's
    /// [`ShapeSummary`]. The first failure aborts the whole load with a
    /// [`LoadError`] naming the offending `file_name`; remaining entries are
    /// never invoked and nothing is retained from the partial run.
    pub fn load(&self) -> LoadResult<Loaded> {
        self.validate()?;

        let singular = self.manifest.len() == 1;
        let mut set = TableSet::default();

        for entry in &self.manifest.entries {
            let function = entry.import_instructions.function.trim();
            // Validation above guarantees resolution succeeds.
            let op = self.registry.get(function).ok_or_else(|| {
                Error::Load(LoadError {
                    file_name: entry.file_name.clone(),
                    source: crate::error::ReadError::Malformed {
                        message: format!("operation '{function}' disappeared from registry"),
                    },
                })
            })?;

            let table = op(&entry.import_instructions.arguments).map_err(|source| LoadError {
                file_name: entry.file_name.clone(),
                source,
            })?;

            let summary = ShapeSummary::of(&entry.file_name, &table);
            self.reporter.on_source_loaded(&summary, &table);

            if singular {
                return Ok(Loaded::Single(table));
            }
            set.push(entry.file_name.clone(), table);
        }

        Ok(Loaded::Tables(set))
    }
}
