//! Config file loading.

use super::common::fixture;
use glossa::{GlossaryConfig, MalformedPolicy};
use std::path::PathBuf;

#[test]
fn test_fixture_config_overrides_defaults() {
    let config = GlossaryConfig::from_file(&fixture("glossa_config.json")).unwrap();
    assert_eq!(config.source, PathBuf::from("data/fixtures/glossary.json"));
    assert_eq!(config.on_malformed, MalformedPolicy::Skip);
    assert_eq!(config.partial_marker, '%');
    assert_eq!(config.columns.term_primary, "Term_Italian");
}

#[test]
fn test_discover_explicit_path() {
    let path = fixture("glossa_config.json");
    let config = GlossaryConfig::discover(Some(&path)).unwrap();
    assert_eq!(config.partial_marker, '%');
}
