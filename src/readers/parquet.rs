//! Parquet reader.
//!
//! Uses the Parquet record API (`RowIter`). Columns come from the file's
//! leaf column paths; integer widths are widened to `Int64`, floats to
//! `Float64`. Other logical types are carried as their string rendering.

use std::path::Path;

use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::SerializedFileReader;
use parquet::record::Field;

use crate::error::ReadResult;
use crate::manifest::ArgMap;
use crate::types::{Table, Value};

use super::{check_accepted, require_str};

/// Registry entry point. Named arguments:
///
/// - `path` (string, required)
pub fn read_parquet(args: &ArgMap) -> ReadResult<Table> {
    check_accepted(args, &["path"])?;
    let path = require_str(args, "path")?;
    read_parquet_from_path(path)
}

/// Read a Parquet file into an in-memory [`Table`].
pub fn read_parquet_from_path(path: impl AsRef<Path>) -> ReadResult<Table> {
    let reader = SerializedFileReader::try_from(path.as_ref())?;

    // Leaf column paths, in file order.
    let columns: Vec<String> = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .columns()
        .iter()
        .map(|c| c.path().string())
        .collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for row_res in reader.into_iter() {
        let row = row_res?;
        let mut out_row: Vec<Value> = Vec::with_capacity(columns.len());
        for (_name, field) in row.get_column_iter() {
            out_row.push(convert_parquet_field(field));
        }
        rows.push(out_row);
    }

    Ok(Table::new(columns, rows))
}

fn convert_parquet_field(f: &Field) -> Value {
    match f {
        Field::Null => Value::Null,
        Field::Bool(b) => Value::Bool(*b),
        Field::Byte(v) => Value::Int64(i64::from(*v)),
        Field::Short(v) => Value::Int64(i64::from(*v)),
        Field::Int(v) => Value::Int64(i64::from(*v)),
        Field::Long(v) => Value::Int64(*v),
        Field::UByte(v) => Value::Int64(i64::from(*v)),
        Field::UShort(v) => Value::Int64(i64::from(*v)),
        Field::UInt(v) => Value::Int64(i64::from(*v)),
        // u64 values beyond i64 range lose no magnitude as floats.
        Field::ULong(v) => match i64::try_from(*v) {
            Ok(i) => Value::Int64(i),
            Err(_) => Value::Float64(*v as f64),
        },
        Field::Float(v) => Value::Float64(f64::from(*v)),
        Field::Double(v) => Value::Float64(*v),
        Field::Str(s) => Value::Utf8(s.clone()),
        other => Value::Utf8(other.to_string()),
    }
}
