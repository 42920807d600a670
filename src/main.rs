// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use catalens::{
    Category, Dataset, Explorer, ExplorerConfig, FilterCriteria, Interface, JsonFileStore,
    PreferencesStore, Section,
};

mod cli;
use cli::display::{
    category_badge, dim, favorite_marker, obligation_badge, pad_right, row, section_bot,
    section_mid, section_top, themed, truncate, BOLD, CYAN, YELLOW,
};
use cli::{Cli, Commands};

fn main() {
    // Diagnostics go to stderr; stdout carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ExplorerConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExplorerConfig::default(),
    };
    let mut store = JsonFileStore::new(&cli.prefs).with_recent_limit(config.recent_limit);

    match cli.command {
        Commands::Search {
            dataset,
            query,
            filters,
            limit,
            json,
        } => {
            let mut explorer = open(&dataset, config, &store)?;
            run_search(&mut explorer, &filters.criteria(query), limit, json)
        }
        Commands::Show { dataset, id } => {
            let mut explorer = open(&dataset, config, &store)?;
            run_show(&explorer, &id)?;
            explorer.record_view(&id);
            store
                .save(explorer.preferences())
                .context("saving preferences")
        }
        Commands::Favorite { dataset, id } => {
            let mut explorer = open(&dataset, config, &store)?;
            if explorer.record(&id).is_none() {
                bail!("no interface with id '{}'", id);
            }
            let now_favorite = explorer.toggle_favorite(&id);
            store
                .save(explorer.preferences())
                .context("saving preferences")?;
            println!(
                "{} {}",
                id,
                if now_favorite {
                    "added to favorites"
                } else {
                    "removed from favorites"
                }
            );
            Ok(())
        }
        Commands::Codes { dataset, query } => {
            let explorer = open(&dataset, config, &store)?;
            run_codes(&explorer, &query);
            Ok(())
        }
        Commands::Suggest { dataset, query } => {
            let explorer = open(&dataset, config, &store)?;
            for suggestion in explorer.suggestions(&query) {
                println!("{}", suggestion);
            }
            Ok(())
        }
        Commands::Inspect { dataset } => {
            let dataset = load_dataset(&dataset)?;
            run_inspect(&dataset);
            Ok(())
        }
    }
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::from_path(path).with_context(|| format!("loading dataset {}", path.display()))
}

fn open(path: &Path, config: ExplorerConfig, store: &JsonFileStore) -> Result<Explorer> {
    let dataset = load_dataset(path)?;
    Ok(Explorer::with_config(dataset, config).with_preferences(store.load_or_default()))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit<'a> {
    id: &'a str,
    name: &'a str,
    category: Category,
    item_count: usize,
    favorite: bool,
}

fn run_search(
    explorer: &mut Explorer,
    criteria: &FilterCriteria,
    limit: usize,
    json: bool,
) -> Result<()> {
    let ids: Vec<String> = explorer
        .filter(criteria)
        .iter()
        .map(|record| record.id.clone())
        .collect();
    let total = ids.len();
    let shown = if limit == 0 { total } else { limit.min(total) };

    let hits: Vec<SearchHit<'_>> = ids[..shown]
        .iter()
        .filter_map(|id| explorer.record(id))
        .map(|record| SearchHit {
            id: &record.id,
            name: &record.name,
            category: record.category,
            item_count: explorer.composed_item_count(&record.id).unwrap_or(0),
            favorite: explorer.is_favorite(&record.id),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No interfaces match.");
        return Ok(());
    }
    for hit in &hits {
        println!(
            "{} {} {} {} {}",
            favorite_marker(hit.favorite),
            category_badge(hit.category),
            pad_right(&themed(CYAN, &[BOLD], hit.id), 10),
            pad_right(&truncate(hit.name, 52), 52),
            dim(&format!("{:>3} items", hit.item_count))
        );
    }
    if shown < total {
        println!("{}", dim(&format!("… {} more", total - shown)));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SHOW
// ═══════════════════════════════════════════════════════════════════════════

fn run_show(explorer: &Explorer, id: &str) -> Result<()> {
    let Some(record) = explorer.record(id) else {
        bail!("no interface with id '{}'", id);
    };

    section_top(&format!("{} {}", record.id, record.name));
    row(&format!(
        "{} {}",
        category_badge(record.category),
        record.category.label()
    ));
    print_field("Sender", record.sender.as_deref());
    print_field("Receiver", record.receiver.as_deref());
    print_field("Context", record.context.as_deref());
    if !record.description.is_empty() {
        for line in wrap(&record.description, 76) {
            row(&line);
        }
    }
    print_composition(explorer, record);

    let codes = explorer.rejection_codes_for(id);
    if !codes.is_empty() {
        section_mid("Rejection codes");
        for entry in codes {
            row(&format!(
                "{} {}",
                themed(YELLOW, &[BOLD], entry.id),
                entry.code.description
            ));
        }
    }
    section_bot();
    Ok(())
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        row(&format!("{} {}", dim(&format!("{:<9}", label)), value));
    }
}

fn print_composition(explorer: &Explorer, record: &Interface) {
    let count = explorer.composed_item_count(&record.id).unwrap_or(0);
    section_mid(&format!("Composition ({} items)", count));

    for section in explorer.composition_view(&record.id).unwrap_or_default() {
        match section {
            Section::Header { title } => row(&themed(CYAN, &[BOLD], title)),
            Section::Block { id, title, items } => {
                row(&format!("{} {}", themed(CYAN, &[], title), dim(id)));
                for item in items {
                    row(&format!(
                        "  {} {} {}",
                        obligation_badge(item.item.cmo),
                        pad_right(item.id, 8),
                        truncate(&item.item.name, 60)
                    ));
                }
            }
            Section::Item { row: item } => row(&format!(
                "{} {} {}",
                obligation_badge(item.item.cmo),
                pad_right(item.id, 8),
                truncate(&item.item.name, 62)
            )),
        }
    }
}

/// Greedy word wrap on whitespace.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// CODES / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_codes(explorer: &Explorer, query: &str) {
    let codes = explorer.search_rejection_codes(query);
    if codes.is_empty() {
        println!("No rejection codes match.");
        return;
    }
    for entry in codes {
        println!(
            "{} {}",
            pad_right(&themed(YELLOW, &[BOLD], entry.id), 10),
            entry.code.description
        );
        if let Some(reason) = &entry.code.reason {
            println!("{:10} {}", "", dim(&format!("reason: {}", reason)));
        }
        if let Some(resolution) = &entry.code.resolution {
            println!("{:10} {}", "", dim(&format!("resolution: {}", resolution)));
        }
    }
}

fn run_inspect(dataset: &Dataset) {
    let catalogue = dataset.catalogue();

    section_top("Dataset");
    row(&format!("{:<18}{}", "Interfaces", dataset.len()));
    row(&format!("{:<18}{}", "Data items", catalogue.data_items.len()));
    row(&format!("{:<18}{}", "Data blocks", catalogue.data_blocks.len()));
    row(&format!("{:<18}{}", "Rejection codes", catalogue.rejection_codes.len()));

    section_mid("Categories");
    for category in Category::ALL.into_iter().chain([Category::Unspecified]) {
        let count = dataset
            .interfaces()
            .iter()
            .filter(|record| record.category == category)
            .count();
        row(&format!("{} {:<24}{}", category_badge(category), category.label(), count));
    }

    let missing = dataset.unresolved_references();
    section_mid(&format!("Unresolved references ({})", missing.len()));
    for reference in &missing {
        row(&format!(
            "{:<10} {:<16} {}",
            reference.record_id,
            reference.kind.as_str(),
            reference.missing_id
        ));
    }
    section_bot();
}
