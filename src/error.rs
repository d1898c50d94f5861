// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for loading and expanding a glossary.
//!
//! A query that matches nothing is not an error: `search` returns an empty
//! `Vec` for that.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::TermField;

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[derive(Debug, Error)]
pub enum GlossaryError {
    /// The source table is missing or unreadable.
    #[error("source '{}' is unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row has no value in one of its term columns.
    #[error("malformed record at row {row}: {field} is missing")]
    MalformedRecord { row: usize, field: TermField },

    /// The source was read but is not a usable table.
    #[error("invalid source '{}': {message}", path.display())]
    InvalidSource { path: PathBuf, message: String },

    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl GlossaryError {
    /// Row and field of a malformed record, if this is one.
    pub fn malformed_at(&self) -> Option<(usize, TermField)> {
        match self {
            GlossaryError::MalformedRecord { row, field } => Some((*row, *field)),
            _ => None,
        }
    }
}
