// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the glossa CLI.
//!
//! OneDark colours for dark terminals, One Light for light ones. The theme is
//! taken from `GLOSSA_THEME` first, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` and non-TTY stdout turn colour off entirely, so piped output is
//! plain text.
//!
//! Renderers write to any `io::Write` so they can be checked in tests.

use std::io::{self, Write};
use std::sync::OnceLock;

use glossa::{ExpandedEntry, MatchMode};

/// Width of the separator line between results.
pub const RULE_WIDTH: usize = 50;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("GLOSSA_THEME") {
        if let Some(t) = parse_theme(&theme) {
            return t;
        }
    }

    // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

/// Whether renderers emit ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub colors: bool,
}

impl Style {
    /// Colors on for a TTY stdout unless `NO_COLOR` is set.
    pub fn detect() -> Self {
        let colors = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
        Self { colors }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { colors: false }
    }

    /// Apply theme color with optional modifiers
    pub fn themed(self, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
        if self.colors {
            format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn welcome(out: &mut impl Write, style: Style, marker: char) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style.themed(CYAN, &[BOLD], "Welcome to the Legal Terms Dictionary!")
    )?;
    writeln!(out, "Enter the term you want to search for, or type 'exit' to quit.")?;
    writeln!(out, "For an exact match, enter the term directly.")?;
    writeln!(
        out,
        "For a partial match, add ' {} ' (space and marker) after the term.",
        marker
    )
}

pub fn goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Closing the dictionary. Goodbye!")
}

/// Announce the search about to run.
pub fn searching(out: &mut impl Write, style: Style, term: &str, mode: MatchMode) -> io::Result<()> {
    let quoted = style.themed(YELLOW, &[], &format!("'{}'", term));
    match mode {
        MatchMode::Exact => writeln!(out, "Searching for an exact match for {}...", quoted),
        MatchMode::Partial => writeln!(out, "Performing partial search for {}...", quoted),
    }
}

/// Print every result, or a not-found line if there are none.
///
/// `query` is echoed back folded, as it was compared.
pub fn results(
    out: &mut impl Write,
    style: Style,
    query: &str,
    entries: &[&ExpandedEntry],
) -> io::Result<()> {
    if entries.is_empty() {
        let msg = format!(
            "The term '{}' was not found in the dictionary. Please try another term.",
            query
        );
        return writeln!(out, "{}", style.themed(RED, &[], &msg));
    }

    writeln!(
        out,
        "{}",
        style.themed(GREEN, &[BOLD], &format!("Results found for '{}':", query))
    )?;
    let rule = style.themed(GRAY, &[], &"-".repeat(RULE_WIDTH));
    for entry in entries {
        writeln!(out, "{}", rule)?;
        field_line(out, style, "Italian Term", &entry.term_primary)?;
        field_line(out, style, "English Term", &entry.term_secondary)?;
        field_line(out, style, "Definition (English)", &entry.definition)?;
        field_line(out, style, "Legal Field", &entry.field)?;
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}

fn field_line(out: &mut impl Write, style: Style, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", style.themed(CYAN, &[], label), value)
}

/// Raw and expanded row counts. The skipped line only appears when rows were skipped.
pub fn stats(
    out: &mut impl Write,
    style: Style,
    source_len: usize,
    skipped_len: usize,
    expanded_len: usize,
) -> io::Result<()> {
    writeln!(out, "Original row count: {}", style.themed(YELLOW, &[], &source_len.to_string()))?;
    if skipped_len > 0 {
        writeln!(
            out,
            "Skipped malformed rows: {}",
            style.themed(RED, &[], &skipped_len.to_string())
        )?;
    }
    writeln!(
        out,
        "Expanded row count after splitting terms: {}",
        style.themed(YELLOW, &[], &expanded_len.to_string())
    )
}
