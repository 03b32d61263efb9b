#![cfg(feature = "excel")]

//! Excel reader (feature-gated behind `excel`).
//!
//! Reads one sheet of a workbook (`.xlsx`, `.xls`, `.ods`, ...). The first
//! non-empty row is the header row; remaining rows become typed cells.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{ReadError, ReadResult};
use crate::manifest::ArgMap;
use crate::types::{Table, Value};

use super::{check_accepted, opt_str, require_str};

/// Registry entry point. Named arguments:
///
/// - `path` (string, required)
/// - `sheet` (string, optional; defaults to the first sheet)
pub fn read_excel(args: &ArgMap) -> ReadResult<Table> {
    check_accepted(args, &["path", "sheet"])?;
    let path = require_str(args, "path")?;
    let sheet = opt_str(args, "sheet")?;
    read_excel_from_path(path, sheet)
}

/// Read one sheet of a workbook into an in-memory [`Table`].
///
/// Picks `sheet_name` if provided; otherwise uses the first sheet in the
/// workbook.
pub fn read_excel_from_path(path: impl AsRef<Path>, sheet_name: Option<&str>) -> ReadResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ReadError::Malformed {
                message: "workbook has no sheets".to_string(),
            })?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    table_from_range(&range)
}

fn table_from_range(range: &calamine::Range<Data>) -> ReadResult<Table> {
    let mut header_row_idx: Option<usize> = None;
    let mut columns: Vec<String> = Vec::new();

    for (idx0, row) in range.rows().enumerate() {
        if row.iter().any(|c| !matches!(c, Data::Empty)) {
            header_row_idx = Some(idx0);
            columns = row.iter().map(cell_to_header_string).collect();
            break;
        }
    }

    let header_row_idx = header_row_idx.ok_or_else(|| ReadError::Malformed {
        message: "sheet has no non-empty rows (no header row found)".to_string(),
    })?;

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (idx0, row) in range.rows().enumerate() {
        if idx0 <= header_row_idx {
            continue;
        }
        let mut out_row: Vec<Value> = Vec::with_capacity(columns.len());
        for col_idx in 0..columns.len() {
            let cell = row.get(col_idx).unwrap_or(&Data::Empty);
            out_row.push(convert_cell(cell));
        }
        rows.push(out_row);
    }

    Ok(Table::new(columns, rows))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}

fn convert_cell(c: &Data) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => {
            // Spreadsheets store many integers as floats.
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                Value::Int64(*f as i64)
            } else {
                Value::Float64(*f)
            }
        }
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => {
            if s.trim().is_empty() {
                Value::Null
            } else {
                Value::Utf8(s.clone())
            }
        }
        other => Value::Utf8(other.to_string()),
    }
}
