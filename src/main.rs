// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mitcham::scoring::{RelevanceQuery, StreetQuery};
use mitcham::{
    resolve_city, search_scored, Dataset, Query, Record, ScoredRecord, SearchConfig,
    SearchResponse, CITY_ALIASES, PROVENANCE,
};

mod cli;
use cli::display::{self, pad_left, row, section_bot, section_top, themed, BOLD};
use cli::{Cli, Commands, DataArg};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // stdout stays clean for --json
        .init();

    let result = match cli.command {
        Commands::Search {
            data,
            city,
            q,
            developer,
            street,
            limit,
            json,
            explain,
        } => {
            let query = Query::from_parts(city, q, developer, street);
            let config = SearchConfig::default().with_limit(limit);
            run_search(&data, &query, &config, json, explain)
        }
        Commands::Inspect { data } => run_inspect(&data),
        Commands::Aliases { city } => {
            run_aliases(city.as_deref());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_dataset(data: &DataArg) -> Result<Dataset> {
    if data.data == "-" {
        let dataset = Dataset::from_reader(io::stdin().lock())
            .context("failed to read dataset from stdin")?;
        info!(records = dataset.len(), "loaded dataset from stdin");
        Ok(dataset)
    } else {
        Ok(Dataset::load(&data.data)?)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    data: &DataArg,
    query: &Query,
    config: &SearchConfig,
    json: bool,
    explain: bool,
) -> Result<()> {
    query.validate()?;
    let dataset = load_dataset(data)?;
    debug!(?query, limit = config.limit, "running search");

    let ranked = search_scored(&dataset, query, config);
    let response = response_from(&dataset, &ranked, config.limit);

    if json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
        return Ok(());
    }

    print_results(&dataset, query, &ranked, &response, explain);
    Ok(())
}

/// Same truncation as `search_with_config`, reusing an already ranked list.
fn response_from(dataset: &Dataset, ranked: &[ScoredRecord], limit: usize) -> SearchResponse {
    SearchResponse {
        records: ranked
            .iter()
            .take(limit)
            .filter_map(|s| dataset.get(s.index).cloned())
            .collect(),
        total: ranked.len(),
        source: PROVENANCE.to_string(),
    }
}

fn print_results(
    dataset: &Dataset,
    query: &Query,
    ranked: &[ScoredRecord],
    response: &SearchResponse,
    explain: bool,
) {
    let scored = query.q.is_some() || query.street.is_some();
    let relevance = query.q.as_deref().map(RelevanceQuery::new);
    let street = query.street.as_deref().map(StreetQuery::new);

    section_top(&format!(
        "{} of {} · {}",
        response.records.len(),
        response.total,
        response.source
    ));

    if response.records.is_empty() {
        row(&themed(display::GRAY, &[], "  no matching complexes"));
    }

    for (s, record) in ranked.iter().zip(&response.records) {
        let score = if scored {
            display::score_value(s.score)
        } else {
            pad_left("·", 4)
        };
        row(&format!(" {} {}", score, themed(display::CYAN, &[BOLD], &record.complex_name)));
        row(&format!("      {}", record_details(record)));

        if explain {
            if let Some(relevance) = &relevance {
                for field in relevance.explain(record).contributing() {
                    row(&display::field_score_line(field));
                }
            } else if let Some(street) = &street {
                row(&format!("    street score {}", street.score(record)));
            }
        }
    }
    section_bot();

    debug!(dataset = dataset.len(), shown = response.records.len(), "printed results");
}

fn record_details(record: &Record) -> String {
    let mut parts = vec![record.city.clone()];
    if let Some(neighborhood) = &record.neighborhood {
        parts.push(neighborhood.clone());
    }
    if let Some(number) = &record.complex_number {
        parts.push(format!("#{}", number));
    }
    if let Some(developer) = &record.developer_name {
        parts.push(developer.clone());
    }
    themed(display::GRAY, &[], &parts.join(" · "))
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(data: &DataArg) -> Result<()> {
    let dataset = load_dataset(data)?;

    let mut cities: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &dataset {
        *cities.entry(record.city.as_str()).or_default() += 1;
    }
    let with_developer = dataset
        .iter()
        .filter(|r| r.developer_name.is_some())
        .count();
    let with_neighborhood = dataset
        .iter()
        .filter(|r| r.neighborhood.is_some())
        .count();

    section_top("DATASET");
    row(&format!(" records        {}", dataset.len()));
    row(&format!(" cities         {}", cities.len()));
    row(&format!(" developer      {}", coverage(with_developer, dataset.len())));
    row(&format!(" neighborhood   {}", coverage(with_neighborhood, dataset.len())));
    section_bot();

    let mut by_count: Vec<(&str, usize)> = cities.into_iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(&a.1));

    section_top("CITIES");
    for (city, count) in by_count {
        row(&format!(" {} {}", pad_left(&count.to_string(), 5), city));
    }
    section_bot();
    Ok(())
}

fn coverage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{} ({:.0}%)", count, count as f64 * 100.0 / total as f64)
}

// ═══════════════════════════════════════════════════════════════════════════
// ALIASES
// ═══════════════════════════════════════════════════════════════════════════

fn run_aliases(city: Option<&str>) {
    match city {
        Some(city) => {
            section_top(city);
            for candidate in resolve_city(city) {
                row(&format!(" {}", candidate));
            }
            section_bot();
        }
        None => {
            section_top("CITY ALIASES");
            for (canonical, aliases) in CITY_ALIASES {
                row(&format!(
                    " {} {}",
                    themed(display::CYAN, &[BOLD], canonical),
                    themed(display::GRAY, &[], &aliases.join(", "))
                ));
            }
            section_bot();
        }
    }
}
