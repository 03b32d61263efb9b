//! Core tabular types.
//!
//! Readers produce an in-memory [`Table`]: ordered column names plus
//! row-major [`Value`] storage. The loader only relies on two properties of
//! a table (row count and column count/names) for its [`ShapeSummary`]
//! reporting; everything else is for the caller.

use std::fmt;

/// A single value in a [`Table`] cell.
///
/// Readers infer types from the source; there is no user-supplied schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(v) => write!(f, "{v}"),
        }
    }
}

/// In-memory tabular structure: rows by named columns.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the table.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }

    /// Returns the index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// A new table containing at most the first `n` rows (same columns).
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

impl fmt::Display for Table {
    /// Plain-text rendering: one header line, then one line per row,
    /// values separated by two spaces. Presentation layers that want
    /// anything richer should format the table themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join("  "))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join("  "))?;
        }
        Ok(())
    }
}

/// Shape statistics for one loaded source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSummary {
    /// `file_name` of the manifest entry that produced the table.
    pub file_name: String,
    /// Number of rows in the loaded table.
    pub row_count: usize,
    /// Number of columns in the loaded table.
    pub column_count: usize,
    /// Column names, in table order.
    pub column_names: Vec<String>,
}

impl ShapeSummary {
    /// Build a summary for a table loaded under `file_name`.
    pub fn of(file_name: impl Into<String>, table: &Table) -> Self {
        Self {
            file_name: file_name.into(),
            row_count: table.row_count(),
            column_count: table.column_count(),
            column_names: table.columns.clone(),
        }
    }
}

impl fmt::Display for ShapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded {} with {} rows and {} columns.",
            self.file_name, self.row_count, self.column_count
        )
    }
}
