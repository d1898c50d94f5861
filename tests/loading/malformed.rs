//! Rows with a missing term, under both caller policies.

use super::common::fixture;
use glossa::{load_entries, ColumnMap, GlossaryIndex, MatchMode, TermField};

fn malformed_entries() -> Vec<glossa::Entry> {
    load_entries(&fixture("malformed.csv"), &ColumnMap::default()).unwrap()
}

#[test]
fn test_strict_build_names_row_and_field() {
    let err = GlossaryIndex::from_entries(&malformed_entries()).unwrap_err();
    assert_eq!(err.malformed_at(), Some((1, TermField::Primary)));
    assert!(err.to_string().contains("row 1"));
    assert!(err.to_string().contains("term_primary"));
}

#[test]
fn test_lenient_build_skips_and_reports() {
    let (index, skipped) = GlossaryIndex::from_entries_lenient(&malformed_entries());

    assert_eq!(index.len(), 2);
    assert_eq!(index.source_len(), 3);
    assert_eq!(index.skipped_len(), 1);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].malformed_at(), Some((1, TermField::Primary)));

    assert!(index.search("orphan", MatchMode::Exact).is_empty());
    assert_eq!(index.search("sentenza", MatchMode::Exact).len(), 1);
}
