//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Entry, ExpandedEntry, TermField};

/// Create a well-formed raw entry.
pub fn entry(primary: &str, secondary: &str, definition: &str, field: &str) -> Entry {
    Entry::new(primary, secondary, definition, field)
}

/// Create a raw entry whose given term column is null.
pub fn entry_missing(missing: TermField) -> Entry {
    let mut e = entry("termine", "term", "Definition", "Field");
    match missing {
        TermField::Primary => e.term_primary = None,
        TermField::Secondary => e.term_secondary = None,
    }
    e
}

/// Create an expanded entry directly, bypassing the expander.
pub fn expanded(primary: &str, secondary: &str, definition: &str, field: &str) -> ExpandedEntry {
    ExpandedEntry {
        term_primary: primary.to_string(),
        term_secondary: secondary.to_string(),
        definition: definition.to_string(),
        field: field.to_string(),
    }
}

/// A small glossary covering the shapes seen in real legal tables:
/// split Italian terms, a compound English term, and a repeated row.
pub fn sample_glossary() -> Vec<Entry> {
    vec![
        entry("contratto / accordo", "contract", "A legal agreement", "Civil Law"),
        entry("reato", "crime", "An act punishable by law", "Criminal Law"),
        entry("illecito", "tort / delict", "A civil wrong", "Civil Law"),
        entry("Corte di Cassazione", "Supreme Court of Cassation", "Highest court of appeal", "Procedure"),
        entry("contratto / accordo", "contract", "A legal agreement", "Civil Law"),
        entry("recesso", "withdrawal", "Unilateral exit from a contract", "Civil Law"),
    ]
}
