// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glossa command-line interface.
//!
//! With no subcommand the tool starts the interactive lookup loop. `lookup`
//! answers a single query and `stats` reports how many rows the split-term
//! expansion produced.

pub mod display;
pub mod query;
pub mod repl;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glossa",
    about = "Bilingual legal-terms glossary lookup",
    version
)]
pub struct Cli {
    /// Config file (default: glossa.json in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Glossary table (.csv or .json); overrides the config file
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Leave rows with a missing term out of the index instead of aborting
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive lookup loop (the default)
    Repl,

    /// Look up a single term and exit (status 1 if nothing matched)
    Lookup {
        /// Italian or English term
        query: String,

        /// Substring match instead of whole-term match
        #[arg(short, long)]
        partial: bool,
    },

    /// Print raw and expanded row counts
    Stats,
}
