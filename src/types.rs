// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a glossary is made of.
//!
//! A raw [`Entry`] is one row of the source table. Its Italian term cell may
//! hold several synonyms separated by `/`, so the expander turns it into one
//! [`ExpandedEntry`] per synonym. Expanded entries are what the index stores
//! and what searches return.
//!
//! # Invariants
//!
//! - **Entry**: identity is structural. Two rows with the same four cells are
//!   the same entry; there is no id column.
//!
//! - **ExpandedEntry**: `term_primary` never contains a `/` that came from the
//!   source cell, and it is already trimmed. `term_secondary` is copied as-is
//!   and may still contain `/` (only the Italian side is split).
//!
//! - **EntryKey**: borrows all four fields, so two expanded entries are
//!   duplicates iff their keys are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw glossary row before term splitting.
///
/// The term cells are optional because the source table may leave them
/// blank. A blank term is rejected by the expander rather than coerced
/// to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Italian term cell, possibly `"contratto / accordo"`.
    pub term_primary: Option<String>,
    /// English term cell. Never split.
    pub term_secondary: Option<String>,
    #[serde(default)]
    pub definition: String,
    /// Legal field (category label), e.g. "Civil Law".
    #[serde(default)]
    pub field: String,
}

impl Entry {
    pub fn new(
        term_primary: impl Into<String>,
        term_secondary: impl Into<String>,
        definition: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            term_primary: Some(term_primary.into()),
            term_secondary: Some(term_secondary.into()),
            definition: definition.into(),
            field: field.into(),
        }
    }
}

/// One glossary row carrying a single Italian term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpandedEntry {
    pub term_primary: String,
    pub term_secondary: String,
    pub definition: String,
    pub field: String,
}

impl ExpandedEntry {
    /// Borrowed identity tuple used for result deduplication.
    #[inline]
    pub fn key(&self) -> EntryKey<'_> {
        EntryKey {
            term_primary: &self.term_primary,
            term_secondary: &self.term_secondary,
            definition: &self.definition,
            field: &self.field,
        }
    }
}

/// The four-field identity of an [`ExpandedEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey<'a> {
    pub term_primary: &'a str,
    pub term_secondary: &'a str,
    pub definition: &'a str,
    pub field: &'a str,
}

/// How a query is compared against the term fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Whole-string, case-insensitive equality.
    #[default]
    Exact,
    /// Case-insensitive substring.
    Partial,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Partial => write!(f, "partial"),
        }
    }
}

/// Names a term column, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermField {
    Primary,
    Secondary,
}

impl fmt::Display for TermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermField::Primary => write!(f, "term_primary"),
            TermField::Secondary => write!(f, "term_secondary"),
        }
    }
}
