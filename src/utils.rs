//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a query: trim surrounding whitespace, then case-fold.
pub fn fold(value: &str) -> String {
    case_fold(value.trim())
}

/// Case-fold a stored term for comparison.
///
/// With the `unicode-normalization` feature the value is NFC-composed first,
/// so a decomposed "responsabilità" (a + U+0300) compares equal to the
/// precomposed one. Diacritics are kept: "citta" still does not match "città".
#[cfg(feature = "unicode-normalization")]
pub fn case_fold(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Lightweight case folding without unicode-normalization.
/// Assumes the source table is already NFC, which exported spreadsheets are.
#[cfg(not(feature = "unicode-normalization"))]
pub fn case_fold(value: &str) -> String {
    value.to_lowercase()
}

/// Split a term cell on `/` and trim every piece.
///
/// Always yields at least one piece; an empty cell yields `[""]`.
pub fn split_terms(cell: &str) -> impl Iterator<Item = &str> {
    cell.split('/').map(str::trim)
}
