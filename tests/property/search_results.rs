//! Search result invariants over random glossaries and queries.

use super::common::assert_no_duplicates;
use glossa::{search, ExpandedEntry, GlossaryIndex, MatchMode};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so that random queries actually hit something.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcABC]{0,4}").unwrap()
}

fn row_strategy() -> impl Strategy<Value = ExpandedEntry> {
    (word_strategy(), word_strategy(), "[xy]{0,2}", "[xy]{0,1}").prop_map(|(p, s, d, f)| {
        ExpandedEntry {
            term_primary: p,
            term_secondary: s,
            definition: d,
            field: f,
        }
    })
}

/// Index with deliberate repeats: rows are drawn and then some are duplicated.
fn index_strategy() -> impl Strategy<Value = Vec<ExpandedEntry>> {
    prop::collection::vec(row_strategy(), 0..15).prop_flat_map(|rows| {
        let n = rows.len();
        let repeats = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            prop::collection::vec(0..n, 0..5).boxed()
        };
        (Just(rows), repeats).prop_map(|(mut rows, picks)| {
            for i in picks {
                let dup = rows[i].clone();
                rows.push(dup);
            }
            rows
        })
    })
}

fn mode_strategy() -> impl Strategy<Value = MatchMode> {
    prop_oneof![Just(MatchMode::Exact), Just(MatchMode::Partial)]
}

/// Reference matcher written independently of the crate's predicates.
fn oracle_matches(row: &ExpandedEntry, query: &str, mode: MatchMode) -> bool {
    let q = query.trim().to_lowercase();
    let p = row.term_primary.to_lowercase();
    let s = row.term_secondary.to_lowercase();
    match mode {
        MatchMode::Exact => p == q || s == q,
        MatchMode::Partial => p.contains(&q) || s.contains(&q),
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Exact results ⊆ partial results.
    #[test]
    fn prop_exact_subset_of_partial(index in index_strategy(), query in word_strategy()) {
        let exact = search(&query, &index, MatchMode::Exact);
        let partial: HashSet<*const ExpandedEntry> = search(&query, &index, MatchMode::Partial)
            .into_iter()
            .map(|e| e as *const _)
            .collect();
        for e in exact {
            prop_assert!(partial.contains(&(e as *const _)));
        }
    }

    /// Same arguments, same rows in the same order; never a duplicate tuple.
    #[test]
    fn prop_search_idempotent(
        index in index_strategy(),
        query in word_strategy(),
        mode in mode_strategy(),
    ) {
        let a = search(&query, &index, mode);
        let b = search(&query, &index, mode);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert!(std::ptr::eq(*x, *y));
        }
        assert_no_duplicates(&a);
    }

    /// Result case does not depend on query case.
    #[test]
    fn prop_case_insensitive(
        index in index_strategy(),
        query in word_strategy(),
        mode in mode_strategy(),
    ) {
        let lower = search(&query.to_lowercase(), &index, mode);
        prop_assert_eq!(&search(&query, &index, mode), &lower);
        prop_assert_eq!(&search(&query.to_uppercase(), &index, mode), &lower);
    }

    /// Results are exactly the first occurrence of every matching identity,
    /// in index order.
    #[test]
    fn prop_matches_oracle(
        index in index_strategy(),
        query in word_strategy(),
        mode in mode_strategy(),
    ) {
        let mut seen = HashSet::new();
        let expected: Vec<&ExpandedEntry> = index
            .iter()
            .filter(|e| oracle_matches(e, &query, mode))
            .filter(|e| seen.insert(e.key()))
            .collect();
        prop_assert_eq!(search(&query, &index, mode), expected);
    }

    /// The index folds its terms once at build time; the answers must not change.
    #[test]
    fn prop_index_agrees_with_slice_search(
        rows in index_strategy(),
        query in word_strategy(),
        mode in mode_strategy(),
    ) {
        let index = GlossaryIndex::from_expanded(rows.clone());
        prop_assert_eq!(index.search(&query, mode), search(&query, &rows, mode));
    }

    /// An empty partial query returns every distinct row.
    #[test]
    fn prop_empty_partial_matches_all(index in index_strategy()) {
        let distinct: HashSet<_> = index.iter().map(ExpandedEntry::key).collect();
        prop_assert_eq!(search("", &index, MatchMode::Partial).len(), distinct.len());
    }
}
