// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wex command-line interface.
//!
//! Two subcommands: `parse` to list what a dataset file parses into, and
//! `search` to rank it against a query. Both read the dataset from a file, or
//! from stdin when the path is `-`.

pub mod display;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "WEX_LOG";

#[derive(Parser)]
#[command(
    name = "wex",
    about = "Parse record datasets and rank them against a query",
    version
)]
pub struct Cli {
    /// Log skipped lines and search summaries to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a dataset file and print its records
    Parse {
        /// Path to the dataset file (`-` for stdin)
        file: String,

        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Search a dataset file and display ranked results
    Search {
        /// Path to the dataset file (`-` for stdin)
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print matching records as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Install the stderr subscriber.
///
/// `WEX_LOG` wins when set; otherwise `--verbose` picks `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "wex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read a dataset file, or stdin for `-`.
pub fn load_dataset(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read dataset from stdin")?;
        return Ok(text);
    }

    let path = Path::new(file);
    fs::read_to_string(path).with_context(|| format!("failed to read dataset {}", path.display()))
}
