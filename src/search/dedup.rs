// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-safe result deduplication.
//!
//! The same glossary row can show up more than once in a result: the source
//! table may repeat a row, and two Italian synonyms of one row can both match
//! a partial query only if they are identical pieces. Either way the user
//! should see it once.
//!
//! `ResultMerger` keys on the full four-field [`EntryKey`]. Two rows that
//! share a term but differ in definition or field are distinct and both kept.
//!
//! **Invariant**: Each identity tuple appears at most once in search results,
//! at the position of its first occurrence.

use std::collections::HashSet;

use crate::types::{EntryKey, ExpandedEntry};

/// First-occurrence-wins merger that preserves arrival order.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_all(matching_rows);
/// let results = merger.into_results();
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger<'a> {
    seen: HashSet<EntryKey<'a>>,
    results: Vec<&'a ExpandedEntry>,
}

impl<'a> ResultMerger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a single row. Returns `false` if an identical row was already kept.
    pub fn merge(&mut self, entry: &'a ExpandedEntry) -> bool {
        let fresh = self.seen.insert(entry.key());
        if fresh {
            self.results.push(entry);
        }
        fresh
    }

    /// Merge multiple rows in order.
    pub fn merge_all(&mut self, entries: impl IntoIterator<Item = &'a ExpandedEntry>) {
        for entry in entries {
            self.merge(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Kept rows, in first-occurrence order.
    pub fn into_results(self) -> Vec<&'a ExpandedEntry> {
        self.results
    }
}
