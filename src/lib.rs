//! `manifest-ingest` is a small library for loading the data sources declared
//! in a metadata document ("manifest") into in-memory [`types::Table`]s.
//!
//! A manifest is a JSON array of entries, each naming a loading operation and
//! its arguments:
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
//! Operation names resolve against a closed [`registry::Registry`] — never
//! against arbitrary code — and the whole document is validated up front:
//! every malformed entry, unknown operation, and duplicate `file_name` is
//! reported in one aggregate error.
//!
//! ## Built-in operations
//!
//! - `read_csv` (`.csv`, configurable delimiter/headers)
//! - `read_json` (array-of-objects and NDJSON)
//! - `read_parquet`
//! - `read_excel` (requires the Cargo feature `excel`)
//!
//! ## Quick example
//!
//! ```no_run
//! use manifest_ingest::loader::{DataLoader, Loaded};
//! use manifest_ingest::registry::Registry;
//!
//! # fn main() -> Result<(), manifest_ingest::Error> {
//! let loader = DataLoader::from_path("metadata/metadata.json", Registry::with_default_readers())?;
//! match loader.load()? {
//!     Loaded::Single(table) => println!("rows={}", table.row_count()),
//!     Loaded::Tables(set) => {
//!         for (name, table) in set.iter() {
//!             println!("{name}: rows={}", table.row_count());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A single-entry manifest yields `Loaded::Single`; anything else yields an
//! order-preserving name-keyed collection. Loading is all-or-nothing: the
//! first failing source aborts the run with an error naming that source.
//!
//! ## Progress reporting
//!
//! Display is a collaborator, not core behavior: attach a
//! [`report::LoadReporter`] to receive the manifest entry count and a
//! `(summary, table)` pair per loaded source. [`report::StdErrReporter`]
//! prints plain text; the default reporter does nothing.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use manifest_ingest::loader::DataLoader;
//! use manifest_ingest::registry::Registry;
//! use manifest_ingest::report::StdErrReporter;
//!
//! # fn main() -> Result<(), manifest_ingest::Error> {
//! let loader = DataLoader::from_path("metadata/metadata.json", Registry::with_default_readers())?
//!     .with_reporter(Arc::new(StdErrReporter));
//! let _ = loader.load()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Project layout
//!
//! [`paths::ProjectPaths`] resolves the fixed four-directory convention
//! (root, `data`, `extracted_data`, `metadata`) without touching the
//! filesystem:
//!
//! ```rust
//! use manifest_ingest::paths::{ProjectLayout, ProjectPaths};
//!
//! let paths = ProjectPaths::new(ProjectLayout {
//!     root: Some("/srv/project".into()),
//!     ..Default::default()
//! });
//! let manifest_file = paths.metadata_path().join("metadata.json");
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: the metadata-driven loader and its result types
//! - [`manifest`]: the metadata document model and validation
//! - [`registry`]: the closed operation registry
//! - [`readers`]: built-in CSV/JSON/Parquet/Excel readers
//! - [`report`]: presentation collaborator
//! - [`paths`]: project path resolver
//! - [`types`]: table model
//! - [`error`]: error types

pub mod error;
pub mod loader;
pub mod manifest;
pub mod paths;
pub mod readers;
pub mod registry;
pub mod report;
pub mod types;

pub use error::{Error, LoadError, LoadResult, MetadataError, ReadError, ValidationError};
