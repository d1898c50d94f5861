// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary text at both match modes over a fixed glossary and checks
//! that search never panics and its results keep their invariants: no
//! duplicate identity tuples, index order, and exact ⊆ partial.

#![no_main]

use glossa::testing::sample_glossary;
use glossa::{ExpandedEntry, GlossaryIndex, MatchMode};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

fuzz_target!(|query: &[u8]| {
    static INDEX: OnceLock<GlossaryIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        GlossaryIndex::from_entries(&sample_glossary()).expect("sample glossary is well-formed")
    });

    let query = String::from_utf8_lossy(query);
    let query = &query[..query.floor_char_boundary_compat(200)];

    let exact = index.search(query, MatchMode::Exact);
    let partial = index.search(query, MatchMode::Partial);

    for results in [&exact, &partial] {
        // INVARIANT 1: no duplicate identity tuples
        let mut seen = HashSet::new();
        for r in results.iter() {
            assert!(seen.insert(r.key()), "duplicate result {:?}", r);
        }

        // INVARIANT 2: results follow index order
        let base = index.entries().as_ptr();
        let positions: Vec<usize> = results
            .iter()
            .map(|r| {
                let addr = *r as *const ExpandedEntry as usize;
                (addr - base as usize) / std::mem::size_of::<ExpandedEntry>()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order");
    }

    // INVARIANT 3: exact ⊆ partial
    for r in &exact {
        assert!(
            partial.iter().any(|p| std::ptr::eq(*p, *r)),
            "exact hit missing from partial"
        );
    }
});

/// Largest char boundary ≤ `max`, for capping query length.
trait FloorCharBoundary {
    fn floor_char_boundary_compat(&self, max: usize) -> usize;
}

impl FloorCharBoundary for str {
    fn floor_char_boundary_compat(&self, max: usize) -> usize {
        if max >= self.len() {
            return self.len();
        }
        (0..=max).rev().find(|&i| self.is_char_boundary(i)).unwrap_or(0)
    }
}
