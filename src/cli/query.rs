//! Parsing one line of interactive input.
//!
//! - `exit` (any case) ends the session
//! - a trailing marker (`*` by default), optionally preceded by spaces,
//!   selects a partial match on whatever comes before it
//! - anything else is an exact match

use glossa::MatchMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    Exit,
    Search { term: String, mode: MatchMode },
}

pub fn parse_line(line: &str, marker: char) -> QueryCommand {
    let line = line.trim();

    if line.eq_ignore_ascii_case("exit") {
        return QueryCommand::Exit;
    }

    match line.strip_suffix(marker) {
        Some(rest) => QueryCommand::Search {
            term: rest.trim().to_string(),
            mode: MatchMode::Partial,
        },
        None => QueryCommand::Search {
            term: line.to_string(),
            mode: MatchMode::Exact,
        },
    }
}
