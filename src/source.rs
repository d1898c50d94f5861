// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading raw glossary rows from a table on disk.
//!
//! Two formats, picked by extension:
//! - `.json`: an array of objects keyed by the configured column names
//! - anything else: CSV with a header row
//!
//! Every text cell is trimmed. A term cell with no bytes at all (or no cell)
//! becomes `None` so the expander can report it; a whitespace-only term is
//! `Some("")`. An empty definition or field stays `""`.

use std::fs::File;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::config::ColumnMap;
use crate::error::{GlossaryError, Result};
use crate::types::Entry;

/// Load every row of the table at `path`.
pub fn load_entries(path: &Path, columns: &ColumnMap) -> Result<Vec<Entry>> {
    let file = File::open(path).map_err(|source| GlossaryError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let entries = if is_json {
        read_json(path, file, columns)?
    } else {
        read_csv(path, file, columns)?
    };

    info!(path = %path.display(), rows = entries.len(), "Data loaded successfully");
    Ok(entries)
}

/// Positions of the four mapped columns in a CSV header.
struct ColumnPositions {
    term_primary: usize,
    term_secondary: usize,
    definition: usize,
    field: usize,
}

impl ColumnPositions {
    fn locate(path: &Path, headers: &csv::StringRecord, columns: &ColumnMap) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| GlossaryError::InvalidSource {
                    path: path.to_path_buf(),
                    message: format!("missing column '{}'", name),
                })
        };
        Ok(Self {
            term_primary: find(&columns.term_primary)?,
            term_secondary: find(&columns.term_secondary)?,
            definition: find(&columns.definition)?,
            field: find(&columns.field)?,
        })
    }
}

fn read_csv(path: &Path, file: File, columns: &ColumnMap) -> Result<Vec<Entry>> {
    let invalid = |e: csv::Error| GlossaryError::InvalidSource {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    // Cells are trimmed by hand: emptiness is decided on the raw bytes.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers().map_err(invalid)?.clone();
    let pos = ColumnPositions::locate(path, &headers, columns)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(invalid)?;
        let cell = |i: usize| record.get(i).filter(|s| !s.is_empty()).map(str::trim);
        entries.push(Entry {
            term_primary: cell(pos.term_primary).map(str::to_string),
            term_secondary: cell(pos.term_secondary).map(str::to_string),
            definition: cell(pos.definition).unwrap_or_default().to_string(),
            field: cell(pos.field).unwrap_or_default().to_string(),
        });
    }
    Ok(entries)
}

fn read_json(path: &Path, file: File, columns: &ColumnMap) -> Result<Vec<Entry>> {
    let rows: Vec<serde_json::Map<String, Value>> =
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|e| {
            GlossaryError::InvalidSource {
                path: path.to_path_buf(),
                message: format!("Invalid JSON: {}", e),
            }
        })?;

    Ok(rows
        .iter()
        .map(|row| Entry {
            term_primary: json_cell(row, &columns.term_primary),
            term_secondary: json_cell(row, &columns.term_secondary),
            definition: json_cell(row, &columns.definition).unwrap_or_default(),
            field: json_cell(row, &columns.field).unwrap_or_default(),
        })
        .collect())
}

/// A trimmed cell, or `None` if the key is absent or `null`.
/// Numbers and booleans are rendered as text.
fn json_cell(row: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}
