use manifest_ingest::manifest::ArgMap;
use manifest_ingest::readers::csv::{read_csv, read_csv_from_path, read_csv_from_reader, CsvOptions};
use manifest_ingest::types::Value;

fn args(json: &str) -> ArgMap {
    serde_json::from_str(json).unwrap()
}

#[test]
fn read_csv_from_path_happy_path() {
    let t = read_csv_from_path("tests/fixtures/people.csv", &CsvOptions::default()).unwrap();

    assert_eq!(t.columns, vec!["id", "name", "score", "active"]);
    assert_eq!(t.row_count(), 2);
    assert_eq!(
        t.rows[0],
        vec![
            Value::Int64(1),
            Value::Utf8("Ada".to_string()),
            Value::Float64(98.5),
            Value::Bool(true),
        ]
    );
}

#[test]
fn read_csv_via_named_arguments() {
    let t = read_csv(&args(r#"{"path":"tests/fixtures/people.csv"}"#)).unwrap();
    assert_eq!(t.row_count(), 2);
    assert_eq!(t.column_count(), 4);
}

#[test]
fn custom_delimiter() {
    let input = "id;name\n1;Ada\n";
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(input.as_bytes());

    let t = read_csv_from_reader(&mut rdr, true).unwrap();
    assert_eq!(t.columns, vec!["id", "name"]);
    assert_eq!(t.rows[0], vec![Value::Int64(1), Value::Utf8("Ada".to_string())]);
}

#[test]
fn headerless_input_synthesizes_column_names() {
    let input = "1,Ada\n2,Grace\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input.as_bytes());

    let t = read_csv_from_reader(&mut rdr, false).unwrap();
    assert_eq!(t.columns, vec!["column_1", "column_2"]);
    assert_eq!(t.row_count(), 2);
}

#[test]
fn empty_cells_become_null() {
    let input = "id,name\n1,\n,Grace\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let t = read_csv_from_reader(&mut rdr, true).unwrap();
    assert_eq!(t.rows[0][1], Value::Null);
    assert_eq!(t.rows[1][0], Value::Null);
}

#[test]
fn missing_file_is_an_io_flavored_error() {
    let err = read_csv(&args(r#"{"path":"tests/fixtures/nope.csv"}"#)).unwrap_err();
    // csv wraps the underlying io error; the message should still say so.
    assert!(err.to_string().to_lowercase().contains("no such file") || err.to_string().contains("os error"));
}

#[test]
fn unknown_argument_is_rejected_before_any_io() {
    let err = read_csv(&args(r#"{"path":"tests/fixtures/people.csv","sep":";"}"#)).unwrap_err();
    assert!(err.to_string().contains("unknown argument 'sep'"));
}

#[test]
fn bad_delimiter_argument() {
    let err = read_csv(&args(r#"{"path":"tests/fixtures/people.csv","delimiter":"--"}"#)).unwrap_err();
    assert!(err.to_string().contains("bad argument 'delimiter'"));
}
