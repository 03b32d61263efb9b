use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parquet::column::writer::ColumnWriter;
use parquet::data_type::ByteArray;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;

use manifest_ingest::manifest::ArgMap;
use manifest_ingest::readers::parquet::{read_parquet, read_parquet_from_path};
use manifest_ingest::types::Value;

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("manifest-ingest-parquet-{nanos}.{ext}"))
}

fn write_people_parquet(path: &PathBuf) {
    let schema_str = r#"
    message schema {
      REQUIRED INT64 id;
      REQUIRED BINARY name (UTF8);
      REQUIRED DOUBLE score;
      REQUIRED BOOLEAN active;
    }
    "#;

    let schema = Arc::new(parse_message_type(schema_str).unwrap());
    let props = Arc::new(WriterProperties::builder().build());
    let file = File::create(path).unwrap();
    let mut writer = SerializedFileWriter::new(file, schema, props).unwrap();

    let mut rg = writer.next_row_group().unwrap();
    while let Some(mut col) = rg.next_column().unwrap() {
        match col.untyped() {
            ColumnWriter::Int64ColumnWriter(w) => {
                w.write_batch(&[1_i64, 2_i64], None, None).unwrap();
            }
            ColumnWriter::ByteArrayColumnWriter(w) => {
                let v1 = ByteArray::from("Ada");
                let v2 = ByteArray::from("Grace");
                w.write_batch(&[v1, v2], None, None).unwrap();
            }
            ColumnWriter::DoubleColumnWriter(w) => {
                w.write_batch(&[98.5_f64, 87.25_f64], None, None).unwrap();
            }
            ColumnWriter::BoolColumnWriter(w) => {
                w.write_batch(&[true, false], None, None).unwrap();
            }
            _ => panic!("unexpected column writer in test"),
        }
        col.close().unwrap();
    }
    rg.close().unwrap();
    writer.close().unwrap();
}

#[test]
fn read_parquet_from_path_happy_path() {
    let path = tmp_file("parquet");
    write_people_parquet(&path);

    let t = read_parquet_from_path(&path).unwrap();
    assert_eq!(t.columns, vec!["id", "name", "score", "active"]);
    assert_eq!(t.row_count(), 2);
    assert_eq!(
        t.rows[1],
        vec![
            Value::Int64(2),
            Value::Utf8("Grace".to_string()),
            Value::Float64(87.25),
            Value::Bool(false),
        ]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn read_parquet_via_named_arguments() {
    let path = tmp_file("parquet");
    write_people_parquet(&path);

    let mut args = ArgMap::new();
    args.insert(
        "path".to_string(),
        serde_json::Value::String(path.to_string_lossy().into_owned()),
    );
    let t = read_parquet(&args).unwrap();
    assert_eq!(t.row_count(), 2);
    assert_eq!(t.column_count(), 4);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_errors() {
    assert!(read_parquet_from_path("tests/fixtures/nope.parquet").is_err());
}

#[test]
fn unknown_argument_is_rejected() {
    let mut args = ArgMap::new();
    args.insert("path".to_string(), serde_json::Value::String("x.parquet".to_string()));
    args.insert("columns".to_string(), serde_json::Value::Array(Vec::new()));
    let err = read_parquet(&args).unwrap_err();
    assert!(err.to_string().contains("unknown argument 'columns'"));
}
