//! Glossary configuration (`glossa.json`).
//!
//! Every field has a default matching the stock legal dictionary export, so
//! an empty object `{}` (or no file at all) is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{GlossaryError, Result};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "glossa.json";

pub const DEFAULT_SOURCE: &str = "legal_dictionary.csv";

pub const DEFAULT_PARTIAL_MARKER: char = '*';

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryConfig {
    pub source: PathBuf,
    pub columns: ColumnMap,
    pub on_malformed: MalformedPolicy,
    pub partial_marker: char,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            columns: ColumnMap::default(),
            on_malformed: MalformedPolicy::default(),
            partial_marker: DEFAULT_PARTIAL_MARKER,
        }
    }
}

/// Source column names for the four entry fields.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMap {
    pub term_primary: String,
    pub term_secondary: String,
    pub definition: String,
    pub field: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            term_primary: "Term_Italian".to_string(),
            term_secondary: "Term_English".to_string(),
            definition: "Definition_English".to_string(),
            field: "Legal_Field".to_string(),
        }
    }
}

/// What to do with a row whose term column is empty.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Refuse to start.
    #[default]
    Abort,
    /// Log the row and leave it out of the index.
    Skip,
}

impl GlossaryConfig {
    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GlossaryError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| GlossaryError::Config {
            path: path.to_path_buf(),
            message: format!("Invalid config JSON: {}", e),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else `glossa.json` in the working directory
    /// if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
