//! CSV reader.
//!
//! Columns come from the header row (or are synthesized as
//! `column_1..column_N` when `has_headers` is false). Cell types are
//! inferred per cell: empty → null, then integer, float, bool literal,
//! otherwise string.

use std::path::Path;

use crate::error::ReadResult;
use crate::manifest::ArgMap;
use crate::types::{Table, Value};

use super::{check_accepted, opt_bool, opt_char, require_str};

/// Options controlling CSV reading.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: u8,
    /// Whether the first record is a header row. Defaults to true.
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Registry entry point. Named arguments:
///
/// - `path` (string, required)
/// - `delimiter` (single-character string, default `,`)
/// - `has_headers` (bool, default true)
pub fn read_csv(args: &ArgMap) -> ReadResult<Table> {
    check_accepted(args, &["path", "delimiter", "has_headers"])?;
    let path = require_str(args, "path")?;

    let mut options = CsvOptions::default();
    if let Some(d) = opt_char(args, "delimiter")? {
        options.delimiter = d;
    }
    if let Some(h) = opt_bool(args, "has_headers")? {
        options.has_headers = h;
    }
    read_csv_from_path(path, &options)
}

/// Read a CSV file into an in-memory [`Table`].
pub fn read_csv_from_path(path: impl AsRef<Path>, options: &CsvOptions) -> ReadResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr, options.has_headers)
}

/// Read CSV data from an existing CSV reader.
///
/// `has_headers` must match how the reader was built: it decides whether
/// column names come from the header record or are synthesized.
pub fn read_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    has_headers: bool,
) -> ReadResult<Table> {
    let mut columns: Vec<String> = if has_headers {
        rdr.headers()?.iter().map(|h| h.trim().to_string()).collect()
    } else {
        Vec::new()
    };

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if columns.is_empty() {
            columns = (1..=record.len()).map(|i| format!("column_{i}")).collect();
        }
        rows.push(record.iter().map(infer_value).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Infer a typed [`Value`] from a raw CSV cell.
fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Value::Int64(v);
    }
    if let Ok(v) = trimmed.parse::<f64>() {
        return Value::Float64(v);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Utf8(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_cell_types() {
        assert_eq!(infer_value(""), Value::Null);
        assert_eq!(infer_value("  "), Value::Null);
        assert_eq!(infer_value("42"), Value::Int64(42));
        assert_eq!(infer_value("98.5"), Value::Float64(98.5));
        assert_eq!(infer_value("TRUE"), Value::Bool(true));
        assert_eq!(infer_value("Ada"), Value::Utf8("Ada".to_string()));
    }
}
