use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use glossa::{load_entries, GlossaryConfig, GlossaryIndex, MalformedPolicy, MatchMode};

mod cli;
use cli::display::{self, Style};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; stdout carries results only.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = GlossaryConfig::discover(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    if cli.skip_malformed {
        config.on_malformed = MalformedPolicy::Skip;
    }

    let index = build_index(&config)?;
    let style = Style::detect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            cli::repl::run(&index, config.partial_marker, style, io::stdin().lock(), &mut out)?;
        }
        Commands::Lookup { query, partial } => {
            let mode = if partial { MatchMode::Partial } else { MatchMode::Exact };
            let hits = index.search(&query, mode);
            display::results(&mut out, style, &glossa::fold(&query), &hits)?;
            out.flush()?;
            if hits.is_empty() {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Stats => {
            display::stats(&mut out, style, index.source_len(), index.skipped_len(), index.len())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn build_index(config: &GlossaryConfig) -> Result<GlossaryIndex> {
    let entries = load_entries(&config.source, &config.columns).with_context(|| {
        format!(
            "'{}' could not be loaded. Please ensure the file exists or pass --source",
            config.source.display()
        )
    })?;

    match config.on_malformed {
        MalformedPolicy::Abort => GlossaryIndex::from_entries(&entries)
            .context("glossary has malformed rows (use --skip-malformed to skip them)"),
        MalformedPolicy::Skip => {
            let (index, skipped) = GlossaryIndex::from_entries_lenient(&entries);
            if !skipped.is_empty() {
                warn!(skipped = skipped.len(), "rows left out of the index");
            }
            Ok(index)
        }
    }
}
