//! Bilingual (Italian/English) legal glossary lookup.
//!
//! A glossary table is loaded once, its slash-separated Italian synonyms are
//! expanded into one row each, and the result is frozen into an index that
//! answers exact or partial, case-insensitive queries against both term
//! columns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  source.rs  │────▶│  expand.rs   │────▶│   index.rs    │────▶│  search/    │
//! │ (CSV, JSON) │     │ (split "/")  │     │(GlossaryIndex)│     │(filter,dedup)│
//! └─────────────┘     └──────────────┘     └───────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use glossa::{Entry, GlossaryIndex, MatchMode};
//!
//! let raw = vec![Entry::new("contratto / accordo", "contract", "A legal agreement", "Civil Law")];
//! let index = GlossaryIndex::from_entries(&raw).unwrap();
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.search("ACCORDO", MatchMode::Exact).len(), 1);
//! assert_eq!(index.search("cord", MatchMode::Partial).len(), 1);
//! assert!(index.search("zzz", MatchMode::Exact).is_empty());
//! ```

pub mod config;
pub mod error;
mod expand;
mod index;
pub mod search;
pub mod source;
pub mod testing;
mod types;
mod utils;

pub use config::{ColumnMap, GlossaryConfig, MalformedPolicy};
pub use error::{GlossaryError, Result};
pub use expand::{expand, expand_lenient, Expansion};
pub use index::GlossaryIndex;
pub use search::{search, search_query, FoldedTerms, Query, ResultMerger};
pub use source::load_entries;
pub use types::{Entry, EntryKey, ExpandedEntry, MatchMode, TermField};
pub use utils::{case_fold, fold};
