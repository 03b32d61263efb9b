//! Closed registry of loading operations.
//!
//! The manifest selects behavior by name, but names only ever resolve
//! against this fixed mapping; nothing in the document is evaluated as
//! code. Unknown names are a validation error.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ReadResult;
use crate::manifest::ArgMap;
use crate::types::Table;

/// A loading operation: named JSON arguments in, [`Table`] out.
pub type LoaderFn = Arc<dyn Fn(&ArgMap) -> ReadResult<Table> + Send + Sync>;

/// Closed mapping from operation name to loading function.
#[derive(Default, Clone)]
pub struct Registry {
    ops: BTreeMap<String, LoaderFn>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    /// An empty registry. Useful for tests and fully custom operation sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with the built-in readers:
    ///
    /// - `read_csv` → [`crate::readers::csv::read_csv`]
    /// - `read_json` → [`crate::readers::json::read_json`]
    /// - `read_parquet` → [`crate::readers::parquet::read_parquet`]
    /// - `read_excel` (only with the `excel` feature)
    pub fn with_default_readers() -> Self {
        let mut reg = Self::new();
        reg.register("read_csv", crate::readers::csv::read_csv);
        reg.register("read_json", crate::readers::json::read_json);
        reg.register("read_parquet", crate::readers::parquet::read_parquet);
        #[cfg(feature = "excel")]
        reg.register("read_excel", crate::readers::excel::read_excel);
        reg
    }

    /// Register (or replace) an operation under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&ArgMap) -> ReadResult<Table> + Send + Sync + 'static,
    {
        self.ops.insert(name.into(), Arc::new(f));
    }

    /// True when `name` resolves to an operation.
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&LoaderFn> {
        self.ops.get(name)
    }

    /// Registered operation names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(|k| k.as_str())
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when no operations are registered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
