// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mitcham command-line interface.
//!
//! Three subcommands: `search` to query a dataset, `inspect` to summarize
//! one, and `aliases` to show how city names resolve. Logs go to stderr so
//! `search --json` output can be piped.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mitcham",
    about = "Fuzzy Hebrew search over urban-renewal complexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More logging (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log filter implied by `-v`/`-q`, used when RUST_LOG is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "mitcham=debug,info",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a dataset and print the matching complexes
    Search {
        #[command(flatten)]
        data: DataArg,

        /// City, any common spelling ("ת״א", "תל אביב")
        #[arg(long)]
        city: Option<String>,

        /// Free text matched against name, neighborhood, number and developer
        #[arg(long)]
        q: Option<String>,

        /// Developer name or part of it
        #[arg(long)]
        developer: Option<String>,

        /// Street name; ignored when --q is given
        #[arg(long)]
        street: Option<String>,

        /// Maximum number of records to return
        #[arg(short, long, default_value_t = mitcham::config::DEFAULT_LIMIT)]
        limit: usize,

        /// Print the response as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,

        /// Show how each result was scored
        #[arg(long)]
        explain: bool,
    },

    /// Summarize a dataset: record count, cities, developer coverage
    Inspect {
        #[command(flatten)]
        data: DataArg,
    },

    /// Show the city alias table, or what one city resolves to
    Aliases {
        /// City to resolve
        city: Option<String>,
    },
}

#[derive(Args)]
pub struct DataArg {
    /// Dataset JSON file, or "-" for stdin
    #[arg(short, long, value_name = "FILE")]
    pub data: String,
}
