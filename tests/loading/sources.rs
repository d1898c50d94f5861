//! Tests for loading glossary tables.

use super::common::{fixture, fixture_entries, fixture_index};
use glossa::{load_entries, ColumnMap, GlossaryError, GlossaryIndex, MatchMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_fixture_csv() {
    let entries = fixture_entries();
    assert_eq!(entries.len(), 9, "Should load 9 rows");
    assert_eq!(
        entries[0].term_primary.as_deref(),
        Some("contratto / accordo")
    );
    assert_eq!(entries[2].term_secondary.as_deref(), Some("tort / delict"));
    assert_eq!(entries[2].field, "Civil Law");
}

#[test]
fn test_fixture_expansion_counts() {
    let index = fixture_index();
    assert_eq!(index.source_len(), 9);
    assert_eq!(index.len(), 13);
}

#[test]
fn test_load_fixture_json() {
    let entries = load_entries(&fixture("glossary.json"), &ColumnMap::default()).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].field, "", "null field should load as empty");

    let index = GlossaryIndex::from_entries(&entries).unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(index.search("appeal", MatchMode::Exact).len(), 1);
}

#[test]
fn test_csv_and_json_agree() {
    let csv = fixture_index();
    let json =
        GlossaryIndex::from_entries(&load_entries(&fixture("glossary.json"), &ColumnMap::default()).unwrap())
            .unwrap();
    assert_eq!(
        csv.search("contract", MatchMode::Exact),
        json.search("contract", MatchMode::Exact)
    );
}

#[test]
fn test_custom_column_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("glossario.csv");
    fs::write(
        &path,
        "Termine,Term,Definizione,Materia\nsentenza / pronuncia,judgment,Court decision,Procedure\n",
    )
    .unwrap();

    let columns = ColumnMap {
        term_primary: "Termine".to_string(),
        term_secondary: "Term".to_string(),
        definition: "Definizione".to_string(),
        field: "Materia".to_string(),
    };
    let entries = load_entries(&path, &columns).unwrap();
    let index = GlossaryIndex::from_entries(&entries).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.search("pronuncia", MatchMode::Exact)[0].field, "Procedure");

    let err = load_entries(&path, &ColumnMap::default()).unwrap_err();
    assert!(matches!(err, GlossaryError::InvalidSource { .. }));
}

#[test]
fn test_missing_source_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_entries(&temp_dir.path().join("legal_dictionary.csv"), &ColumnMap::default())
        .unwrap_err();
    assert!(
        matches!(err, GlossaryError::SourceUnavailable { .. }),
        "Expected SourceUnavailable, got {:?}",
        err
    );
    assert!(err.to_string().contains("legal_dictionary.csv"));
}

#[test]
fn test_load_is_deterministic() {
    assert_eq!(fixture_entries(), fixture_entries());
}
