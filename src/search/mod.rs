// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Glossary search: filter, then deduplicate.
//!
//! A query is folded once (trim + lowercase), then every row is tested with
//! the predicate for the chosen [`MatchMode`] against both term fields. Rows
//! that pass are fed to a [`ResultMerger`] in index order, so the output is
//! stable and free of duplicate identity tuples.
//!
//! There is no ranking. Results come back in the order they sit in the index.

pub mod dedup;

use crate::types::{ExpandedEntry, MatchMode};
use crate::utils::{case_fold, fold};

pub use dedup::ResultMerger;

/// A folded query bound to a match mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
    mode: MatchMode,
}

impl Query {
    pub fn new(raw: &str, mode: MatchMode) -> Self {
        Self {
            needle: fold(raw),
            mode,
        }
    }

    /// The folded query text.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Does either term field of `entry` match? (OR across the two fields.)
    pub fn matches(&self, entry: &ExpandedEntry) -> bool {
        self.term_matches(&case_fold(&entry.term_primary))
            || self.term_matches(&case_fold(&entry.term_secondary))
    }

    /// Same as [`Query::matches`], against terms folded ahead of time.
    pub fn matches_folded(&self, terms: &FoldedTerms) -> bool {
        self.term_matches(&terms.primary) || self.term_matches(&terms.secondary)
    }

    fn term_matches(&self, folded_term: &str) -> bool {
        match self.mode {
            MatchMode::Exact => exact_match(folded_term, &self.needle),
            MatchMode::Partial => partial_match(folded_term, &self.needle),
        }
    }
}

/// The two term fields of one row, case-folded once at index build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedTerms {
    pub primary: String,
    pub secondary: String,
}

impl FoldedTerms {
    pub fn of(entry: &ExpandedEntry) -> Self {
        Self {
            primary: case_fold(&entry.term_primary),
            secondary: case_fold(&entry.term_secondary),
        }
    }
}

/// Both arguments are already folded.
#[inline]
fn exact_match(term: &str, needle: &str) -> bool {
    term == needle
}

/// Both arguments are already folded. An empty needle matches everything.
#[inline]
fn partial_match(term: &str, needle: &str) -> bool {
    term.contains(needle)
}

/// Search `entries` for `query`, returning matching rows in index order with
/// duplicate identity tuples removed (first occurrence wins).
///
/// An empty result means "not found"; it is not an error.
pub fn search<'a>(
    query: &str,
    entries: &'a [ExpandedEntry],
    mode: MatchMode,
) -> Vec<&'a ExpandedEntry> {
    search_query(&Query::new(query, mode), entries)
}

/// Like [`search`], with a pre-built [`Query`].
pub fn search_query<'a>(query: &Query, entries: &'a [ExpandedEntry]) -> Vec<&'a ExpandedEntry> {
    let mut merger = ResultMerger::new();
    merger.merge_all(entries.iter().filter(|e| query.matches(e)));
    merger.into_results()
}

/// Like [`search_query`], with `folded[i]` holding the folded terms of
/// `entries[i]`. Both slices must be the same length.
pub fn search_folded<'a>(
    query: &Query,
    entries: &'a [ExpandedEntry],
    folded: &[FoldedTerms],
) -> Vec<&'a ExpandedEntry> {
    debug_assert_eq!(entries.len(), folded.len());
    let mut merger = ResultMerger::new();
    merger.merge_all(
        entries
            .iter()
            .zip(folded)
            .filter(|(_, terms)| query.matches_folded(terms))
            .map(|(entry, _)| entry),
    );
    merger.into_results()
}
