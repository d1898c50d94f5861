//! Case-insensitive matching in both modes.

use super::common::{entry, fixture_index};
use glossa::{GlossaryIndex, MatchMode};

#[test]
fn test_exact_ignores_case() {
    let index = GlossaryIndex::from_entries(&[entry("Contratto", "Contract", "", "")]).unwrap();
    let lower = index.search("contratto", MatchMode::Exact);
    assert_eq!(lower.len(), 1);
    assert_eq!(index.search("Contratto", MatchMode::Exact), lower);
    assert_eq!(index.search("CONTRATTO", MatchMode::Exact), lower);
    assert_eq!(index.search("cOnTrAcT", MatchMode::Exact), lower);
}

#[test]
fn test_partial_ignores_case() {
    let index = fixture_index();
    assert_eq!(
        index.search("CASSAZ", MatchMode::Partial),
        index.search("cassaz", MatchMode::Partial)
    );
}

#[test]
fn test_accented_capitals_fold() {
    let index = fixture_index();
    let results = index.search("RESPONSABILITÀ CIVILE", MatchMode::Exact);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].term_secondary, "civil liability");
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let index = fixture_index();
    assert_eq!(
        index.search("\t sentenza  ", MatchMode::Exact),
        index.search("sentenza", MatchMode::Exact)
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_decomposed_query_matches_composed_term() {
    let index = fixture_index();
    let decomposed = "volonta\u{0300}";
    assert_eq!(index.search(decomposed, MatchMode::Exact).len(), 1);
}
