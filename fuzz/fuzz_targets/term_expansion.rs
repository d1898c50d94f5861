// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for split-term expansion.
//!
//! Arbitrary rows, including null term cells and cells made of nothing but
//! slashes and whitespace. Expansion must either name the first malformed row
//! or produce exactly one row per `/`-separated piece, in order.

#![no_main]

use arbitrary::Arbitrary;
use glossa::{expand, expand_lenient, Entry};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RawRow {
    primary: Option<String>,
    secondary: Option<String>,
    definition: String,
    field: String,
}

fuzz_target!(|rows: Vec<RawRow>| {
    let entries: Vec<Entry> = rows
        .into_iter()
        .map(|r| Entry {
            term_primary: r.primary,
            term_secondary: r.secondary,
            definition: r.definition,
            field: r.field,
        })
        .collect();

    let first_bad = entries
        .iter()
        .position(|e| e.term_primary.is_none() || e.term_secondary.is_none());

    match expand(&entries) {
        Ok(out) => {
            // INVARIANT 1: only well-formed input succeeds
            assert!(first_bad.is_none());

            // INVARIANT 2: one row per piece
            let expected: usize = entries
                .iter()
                .map(|e| e.term_primary.as_deref().map_or(0, |p| p.split('/').count()))
                .sum();
            assert_eq!(out.len(), expected);

            // INVARIANT 3: no piece keeps a slash or surrounding whitespace
            for row in &out {
                assert!(!row.term_primary.contains('/'));
                assert_eq!(row.term_primary.trim(), row.term_primary);
            }
        }
        Err(err) => {
            // INVARIANT 4: the error names the first malformed row
            let (row, _) = err.malformed_at().expect("only malformed rows can fail");
            assert_eq!(Some(row), first_bad);
        }
    }

    // INVARIANT 5: lenient expansion reports every malformed row
    let bad_rows = entries
        .iter()
        .filter(|e| e.term_primary.is_none() || e.term_secondary.is_none())
        .count();
    assert_eq!(expand_lenient(&entries).skipped.len(), bad_rows);
});
