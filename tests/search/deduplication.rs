//! Deduplication of search results by the four-field identity tuple.

use super::common::{assert_no_duplicates, expanded, fixture_index, primary_terms};
use glossa::{search, MatchMode, ResultMerger};

#[test]
fn test_repeated_source_rows_appear_once() {
    let index = fixture_index();
    let results = index.search("contract", MatchMode::Exact);

    // The fixture repeats the contratto/accordo row.
    assert_eq!(primary_terms(&results), vec!["contratto", "accordo"]);
    assert_no_duplicates(&results);
}

#[test]
fn test_first_occurrence_wins() {
    let index = fixture_index();
    let results = index.search("accordo", MatchMode::Exact);
    assert_eq!(results.len(), 1);
    assert!(std::ptr::eq(results[0], &index.entries()[1]));
}

#[test]
fn test_empty_partial_returns_each_identity_once() {
    let index = fixture_index();
    let results = index.search("", MatchMode::Partial);

    // 13 expanded rows, 2 of them repeats.
    assert_eq!(index.len(), 13);
    assert_eq!(results.len(), 11);
    assert_no_duplicates(&results);
}

#[test]
fn test_rows_differing_only_in_field_are_both_kept() {
    let rows = vec![
        expanded("recesso", "withdrawal", "Exit from a contract", "Civil Law"),
        expanded("recesso", "withdrawal", "Exit from a contract", "Labour Law"),
        expanded("recesso", "withdrawal", "Exit from a contract", "Civil Law"),
    ];
    let results = search("recesso", &rows, MatchMode::Exact);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].field, "Civil Law");
    assert_eq!(results[1].field, "Labour Law");
}

#[test]
fn test_merger_preserves_arrival_order() {
    let rows = vec![
        expanded("b", "", "", ""),
        expanded("a", "", "", ""),
        expanded("b", "", "", ""),
        expanded("c", "", "", ""),
    ];
    let mut merger = ResultMerger::new();
    merger.merge_all(rows.iter());
    assert_eq!(primary_terms(&merger.into_results()), vec!["b", "a", "c"]);
}
