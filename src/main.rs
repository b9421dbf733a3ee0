// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use wex::{parse_dataset, rank, search_with_options, Record, SearchOptions};

mod cli;
use cli::display::{render_match, render_record, render_summary, Style};
use cli::{init_tracing, load_dataset, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Parse { file, json } => run_parse(&file, json),
        Commands::Search {
            file,
            query,
            limit,
            json,
        } => run_search(&file, &query, limit, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_parse(file: &str, json: bool) -> Result<()> {
    let text = load_dataset(file)?;
    let records = parse_dataset(&text);

    if json {
        return print_json(&records);
    }

    let style = Style::detect();
    for record in &records {
        print!("{}", render_record(record, &style));
    }
    println!("{}", render_summary(records.len(), records.len(), &style));
    Ok(())
}

fn run_search(file: &str, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let text = load_dataset(file)?;
    let records = parse_dataset(&text);

    if json {
        return print_json(&json_hits(query, &records, limit));
    }

    let ranked = rank(query, &records);
    let shown = limit.unwrap_or(ranked.len()).min(ranked.len());
    let style = Style::detect();
    for (position, hit) in ranked[..shown].iter().enumerate() {
        print!("{}", render_match(position + 1, hit, &style));
    }
    println!("{}", render_summary(shown, ranked.len(), &style));
    Ok(())
}

/// Records `wex search --json` prints: the library's own limited search.
fn json_hits(query: &str, records: &[Record], limit: Option<usize>) -> Vec<Record> {
    search_with_options(query, records, &SearchOptions { limit })
}

fn print_json(records: &[Record]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
