//! Configuration and persisted document tests
//!
//! Tool config loading from YAML/JSON and the saved document format.

use table_block::config::{ExtraSetting, DEFAULT_COLS, DEFAULT_ROWS};
use table_block::{TableConfig, TableDocument};

// ========================================================================
// Table Config Tests
// ========================================================================

#[test]
fn test_empty_yaml_uses_defaults() {
    let config = TableConfig::from_yaml("{}").unwrap();

    assert_eq!(config.rows, DEFAULT_ROWS);
    assert_eq!(config.cols, DEFAULT_COLS);
    assert!(!config.with_headings);
    assert_eq!(config.max_rows, None);
    assert_eq!(config.max_cols, None);
}

#[test]
fn test_full_yaml() {
    let yaml = r#"
rows: 4
cols: 5
withHeadings: true
maxRows: 20
maxCols: 8
"#;
    let config = TableConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.rows, 4);
    assert_eq!(config.cols, 5);
    assert!(config.with_headings);
    assert_eq!(config.max_rows, Some(20));
    assert_eq!(config.max_cols, Some(8));
}

#[test]
fn test_invalid_yaml_has_context() {
    let err = TableConfig::from_yaml("rows: many").unwrap_err();

    assert_eq!(err.to_string(), "Failed to parse table config");
    assert!(err.chain().count() > 1);
}

#[test]
fn test_json_config() {
    let config = TableConfig::from_json(r#"{"cols": 1, "maxCols": 3}"#).unwrap();

    assert_eq!(config.rows, DEFAULT_ROWS);
    assert_eq!(config.cols, 1);
    assert_eq!(config.max_cols, Some(3));
}

#[test]
fn test_settings_are_attached_in_code() {
    let config = TableConfig::from_yaml("rows: 3")
        .unwrap()
        .with_setting(ExtraSetting::new("<svg/>", "Export", |_| {}))
        .with_setting(ExtraSetting::new("<svg/>", "Sort", |_| {}));

    assert_eq!(config.settings.len(), 2);
    assert_eq!(config.settings[1].title, "Sort");
}

#[test]
fn test_zero_size_falls_back_to_defaults() {
    let config = TableConfig::from_yaml("rows: 0\ncols: 0").unwrap();

    assert_eq!(config.initial_rows(), DEFAULT_ROWS);
    assert_eq!(config.initial_cols(), DEFAULT_COLS);
}

// ========================================================================
// Document Format Tests
// ========================================================================

#[test]
fn test_document_missing_fields_default() {
    let doc = TableDocument::from_json(r#"{"content":[["a","b"]]}"#).unwrap();

    assert!(!doc.with_headings);
    assert!(!doc.read_only);
    assert_eq!(doc.content, vec![vec!["a".to_string(), "b".to_string()]]);
}

#[test]
fn test_document_json_round_trip() {
    let doc = TableDocument::new(
        true,
        true,
        vec![
            vec!["Name".into(), "\"quoted\"".into()],
            vec!["ünïcode".into(), "".into()],
        ],
    );

    let json = doc.to_json().unwrap();
    assert_eq!(TableDocument::from_json(&json).unwrap(), doc);
}

#[test]
fn test_document_rejects_non_string_cells() {
    assert!(TableDocument::from_json(r#"{"content":[[1]]}"#).is_err());
}

#[test]
fn test_rectangular_check() {
    let ragged = TableDocument::new(false, false, vec![vec!["a".into()], vec![]]);
    assert!(!ragged.is_rectangular());
    assert!(TableDocument::default().is_rectangular());
}
