//! JSON reader.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Columns come from the first record's keys, in document order. Later
//! records may omit keys (those cells become null); keys not present in the
//! first record are ignored. Nested objects/arrays are not supported.

use std::fs;
use std::path::Path;

use crate::error::{ReadError, ReadResult};
use crate::manifest::ArgMap;
use crate::types::{Table, Value};

use super::{check_accepted, require_str};

/// Registry entry point. Named arguments:
///
/// - `path` (string, required)
pub fn read_json(args: &ArgMap) -> ReadResult<Table> {
    check_accepted(args, &["path"])?;
    let path = require_str(args, "path")?;
    read_json_from_path(path)
}

/// Read a JSON or NDJSON file into an in-memory [`Table`].
pub fn read_json_from_path(path: impl AsRef<Path>) -> ReadResult<Table> {
    let text = fs::read_to_string(path)?;
    read_json_from_str(&text)
}

/// Read JSON from an in-memory string into a [`Table`].
pub fn read_json_from_str(input: &str) -> ReadResult<Table> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ReadError::Malformed {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => table_from_values(&items),
            serde_json::Value::Object(_) => table_from_values(std::slice::from_ref(&v)),
            _ => Err(ReadError::Malformed {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                ReadError::Malformed {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        table_from_values(&values)
    }
}

fn table_from_values(values: &[serde_json::Value]) -> ReadResult<Table> {
    let mut columns: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row_num = idx0 + 1;
        let obj = v.as_object().ok_or_else(|| ReadError::Malformed {
            message: format!("row {row_num} is not a json object"),
        })?;

        // Column order follows the first record.
        if columns.is_empty() {
            columns = obj.keys().cloned().collect();
        }

        let mut row: Vec<Value> = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = match obj.get(column) {
                None => Value::Null,
                Some(jv) => convert_json_value(row_num, column, jv)?,
            };
            row.push(cell);
        }
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

fn convert_json_value(row: usize, column: &str, v: &serde_json::Value) -> ReadResult<Value> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::String(s) => Ok(Value::Utf8(s.clone())),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int64(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float64(f))
            } else {
                Err(ReadError::Value {
                    row,
                    column: column.to_string(),
                    message: format!("unrepresentable number {n}"),
                })
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(ReadError::Value {
            row,
            column: column.to_string(),
            message: "nested values are not supported".to_string(),
        }),
    }
}
