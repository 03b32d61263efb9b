use manifest_ingest::error::IssueKind;
use manifest_ingest::manifest::{ArgMap, Manifest};
use manifest_ingest::registry::Registry;
use manifest_ingest::types::Table;

fn stub_registry(names: &[&str]) -> Registry {
    let mut reg = Registry::new();
    for name in names {
        reg.register(*name, |_args: &ArgMap| Ok(Table::new(Vec::new(), Vec::new())));
    }
    reg
}

#[test]
fn well_formed_manifest_passes_validation() {
    let m = Manifest::from_str(
        r#"[
            {"file_name":"a.csv","import_instructions":{"function":"read_csv","arguments":{"path":"a.csv"}}},
            {"file_name":"b.csv","import_instructions":{"function":"read_csv","arguments":{"path":"b.csv"}}}
        ]"#,
    )
    .unwrap();
    assert!(m.validate(&stub_registry(&["read_csv"])).is_ok());
}

#[test]
fn duplicate_file_names_are_rejected() {
    let m = Manifest::from_str(
        r#"[
            {"file_name":"a.csv","import_instructions":{"function":"read_csv"}},
            {"file_name":"a.csv","import_instructions":{"function":"read_csv"}}
        ]"#,
    )
    .unwrap();
    let err = m.validate(&stub_registry(&["read_csv"])).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].entry, 2);
    assert_eq!(err.issues[0].kind, IssueKind::DuplicateFileName);
    assert!(err.to_string().contains("entry 2 ('a.csv')"));
}

#[test]
fn unknown_operation_names_the_entry_and_function() {
    let m = Manifest::from_str(
        r#"[
            {"file_name":"a.csv","import_instructions":{"function":"read_csv","arguments":{"path":"a.csv"}}},
            {"file_name":"b.xlsx","import_instructions":{"function":"read_xlsx_v2","arguments":{"path":"b.xlsx"}}}
        ]"#,
    )
    .unwrap();
    let err = m.validate(&stub_registry(&["read_csv"])).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].entry, 2);
    assert_eq!(
        err.issues[0].kind,
        IssueKind::UnknownFunction("read_xlsx_v2".to_string())
    );

    let msg = err.to_string();
    assert!(msg.contains("entry 2"));
    assert!(msg.contains("read_xlsx_v2"));
}

#[test]
fn all_problems_are_reported_together() {
    // Entry 1: no file_name. Entry 2: fine. Entry 3: duplicate of 2 plus an
    // unknown function. Entry 4: no function at all.
    let m = Manifest::from_str(
        r#"[
            {"import_instructions":{"function":"read_csv"}},
            {"file_name":"b.csv","import_instructions":{"function":"read_csv"}},
            {"file_name":"b.csv","import_instructions":{"function":"read_nothing"}},
            {"file_name":"d.csv","import_instructions":{}}
        ]"#,
    )
    .unwrap();
    let err = m.validate(&stub_registry(&["read_csv"])).unwrap_err();

    let kinds: Vec<(usize, &IssueKind)> = err.issues.iter().map(|i| (i.entry, &i.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (1, &IssueKind::MissingFileName),
            (3, &IssueKind::DuplicateFileName),
            (3, &IssueKind::UnknownFunction("read_nothing".to_string())),
            (4, &IssueKind::MissingFunction),
        ]
    );
}

#[test]
fn whitespace_only_file_name_is_missing() {
    let m = Manifest::from_str(r#"[{"file_name":"  ","import_instructions":{"function":"read_csv"}}]"#)
        .unwrap();
    let err = m.validate(&stub_registry(&["read_csv"])).unwrap_err();
    assert_eq!(err.issues[0].kind, IssueKind::MissingFileName);
}

#[test]
fn unreadable_or_malformed_sources_are_metadata_errors() {
    assert!(Manifest::from_path("tests/fixtures/does_not_exist.json").is_err());
    assert!(Manifest::from_str("{not json").is_err());
    // A JSON value that is not an array of entries.
    assert!(Manifest::from_str("42").is_err());
}
