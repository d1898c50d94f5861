//! The interactive lookup loop.
//!
//! One line in, one result block out, until `exit` or end of input.

use std::io::{self, BufRead, Write};

use glossa::{GlossaryIndex, Query};
use tracing::debug;

use super::display::{self, Style};
use super::query::{parse_line, QueryCommand};

const PROMPT: &str = "Enter the term you want to search: ";

pub fn run(
    index: &GlossaryIndex,
    marker: char,
    style: Style,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    display::welcome(out, style, marker)?;

    let mut line = String::new();
    loop {
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_line(&line, marker) {
            QueryCommand::Exit => break,
            QueryCommand::Search { term, mode } => {
                display::searching(out, style, &term, mode)?;
                let query = Query::new(&term, mode);
                let hits = index.search_query(&query);
                debug!(query = query.needle(), %mode, hits = hits.len(), "lookup");
                display::results(out, style, query.needle(), &hits)?;
            }
        }
    }

    display::goodbye(out)
}
