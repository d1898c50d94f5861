// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term expansion: one row per Italian synonym.
//!
//! A source row like `"contratto / accordo" | "contract" | ...` becomes two
//! rows, one for "contratto" and one for "accordo", each carrying the same
//! English term, definition and field. Only the Italian cell is split; an
//! English cell such as `"tort / delict"` stays a single compound string in
//! every resulting row.
//!
//! **Invariants**:
//! - Output length is the sum over input rows of the number of `/`-separated
//!   pieces in `term_primary` (at least 1 per row, empty pieces included).
//! - Rows are emitted in input order; pieces of one row in left-to-right order.
//! - Nothing is deduplicated here. Duplicate rows are dropped by `search`.

use tracing::{debug, warn};

use crate::error::{GlossaryError, Result};
use crate::types::{Entry, ExpandedEntry, TermField};
use crate::utils::split_terms;

/// Outcome of [`expand_lenient`]: the rows that expanded, plus every row that
/// was skipped and why.
#[derive(Debug, Default)]
pub struct Expansion {
    pub entries: Vec<ExpandedEntry>,
    pub skipped: Vec<GlossaryError>,
}

/// Expand every entry, failing on the first row with a missing term.
///
/// The error names the 0-based row and the missing column. No partial output
/// is returned.
pub fn expand(entries: &[Entry]) -> Result<Vec<ExpandedEntry>> {
    let mut expanded = Vec::with_capacity(entries.len());
    for (row, entry) in entries.iter().enumerate() {
        expand_entry(row, entry, &mut expanded)?;
    }
    debug!(
        original = entries.len(),
        expanded = expanded.len(),
        "expanded split terms"
    );
    Ok(expanded)
}

/// Expand every well-formed entry and report the malformed ones.
///
/// Whether skipping is acceptable is the caller's decision; this only makes
/// sure each skipped row is surfaced.
pub fn expand_lenient(entries: &[Entry]) -> Expansion {
    let mut out = Expansion {
        entries: Vec::with_capacity(entries.len()),
        skipped: Vec::new(),
    };
    for (row, entry) in entries.iter().enumerate() {
        if let Err(err) = expand_entry(row, entry, &mut out.entries) {
            warn!("skipping {}", err);
            out.skipped.push(err);
        }
    }
    out
}

/// Push the expansion of one row, or nothing if the row is malformed.
fn expand_entry(row: usize, entry: &Entry, out: &mut Vec<ExpandedEntry>) -> Result<()> {
    let primary = entry
        .term_primary
        .as_deref()
        .ok_or(GlossaryError::MalformedRecord {
            row,
            field: TermField::Primary,
        })?;
    let secondary = entry
        .term_secondary
        .as_deref()
        .ok_or(GlossaryError::MalformedRecord {
            row,
            field: TermField::Secondary,
        })?;

    out.extend(split_terms(primary).map(|term| ExpandedEntry {
        term_primary: term.to_string(),
        term_secondary: secondary.to_string(),
        definition: entry.definition.clone(),
        field: entry.field.clone(),
    }));
    Ok(())
}
