// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory glossary index.
//!
//! Built once, right after loading, and never mutated. Storage is an
//! `Arc<[ExpandedEntry]>`, so clones share rows and the index can be handed
//! to several threads that search it at the same time.

use std::sync::Arc;

use tracing::info;

use crate::error::{GlossaryError, Result};
use crate::expand::{expand, expand_lenient};
use crate::search::{search_folded, FoldedTerms, Query};
use crate::types::{Entry, ExpandedEntry, MatchMode};

/// Read-only collection of expanded glossary rows.
#[derive(Debug, Clone)]
pub struct GlossaryIndex {
    entries: Arc<[ExpandedEntry]>,
    /// `folded[i]` holds the case-folded terms of `entries[i]`.
    folded: Arc<[FoldedTerms]>,
    /// Number of raw rows loaded, malformed ones included.
    source_len: usize,
    /// Raw rows left out because a term was missing.
    skipped_len: usize,
}

impl GlossaryIndex {
    /// Expand `entries` and freeze the result. Fails on the first malformed row.
    pub fn from_entries(entries: &[Entry]) -> Result<Self> {
        let expanded = expand(entries)?;
        Ok(Self::build(expanded, entries.len(), 0))
    }

    /// Expand `entries`, skipping malformed rows. One error per skipped row
    /// is returned alongside the index so the caller can report them.
    pub fn from_entries_lenient(entries: &[Entry]) -> (Self, Vec<GlossaryError>) {
        let expansion = expand_lenient(entries);
        let skipped_len = expansion.skipped.len();
        let index = Self::build(expansion.entries, entries.len(), skipped_len);
        (index, expansion.skipped)
    }

    /// Freeze rows that are already expanded.
    pub fn from_expanded(entries: Vec<ExpandedEntry>) -> Self {
        let len = entries.len();
        Self::build(entries, len, 0)
    }

    fn build(entries: Vec<ExpandedEntry>, source_len: usize, skipped_len: usize) -> Self {
        info!(
            skipped = skipped_len,
            "Original row count: {}, expanded row count after splitting terms: {}",
            source_len,
            entries.len()
        );
        let folded: Arc<[FoldedTerms]> = entries.iter().map(FoldedTerms::of).collect();
        Self {
            entries: entries.into(),
            folded,
            source_len,
            skipped_len,
        }
    }

    pub fn entries(&self) -> &[ExpandedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw rows loaded, including any that were skipped.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Raw rows left out of the index by a lenient build.
    pub fn skipped_len(&self) -> usize {
        self.skipped_len
    }

    pub fn search(&self, query: &str, mode: MatchMode) -> Vec<&ExpandedEntry> {
        self.search_query(&Query::new(query, mode))
    }

    pub fn search_query(&self, query: &Query) -> Vec<&ExpandedEntry> {
        search_folded(query, &self.entries, &self.folded)
    }
}
