// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catalens command-line interface.
//!
//! Every subcommand takes the dataset file first. `search` mirrors the
//! browser controls one flag per control; `show` and `favorite` read and write
//! the preferences file so favorites and history carry across runs.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use catalens::{AdvancedFilters, CategoryFilter, FilterCriteria, RawAdvancedFilters};

#[derive(Parser)]
#[command(
    name = "catalens",
    about = "Search and inspect interface catalogues",
    version
)]
pub struct Cli {
    /// Session configuration (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Preferences file holding favorites and recently viewed interfaces
    #[arg(long, global = true, default_value = ".catalens/preferences.json")]
    pub prefs: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and rank interfaces
    Search {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Free-text search; whitespace-separated terms match if any term matches
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of results to print (0 prints all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one interface: details, composition and rejection codes
    Show {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Interface id
        id: String,
    },

    /// Toggle an interface's favorite state
    Favorite {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Interface id
        id: String,
    },

    /// Search the rejection code catalogue
    Codes {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Text to look for in code ids, descriptions, reasons and resolutions
        #[arg(default_value = "")]
        query: String,
    },

    /// Search-box suggestions for a partial query
    Suggest {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Partial query (at least two characters)
        query: String,
    },

    /// Summarize a dataset and list dangling references
    Inspect {
        /// Path to the dataset JSON
        dataset: PathBuf,
    },
}

/// The category and advanced-filter controls.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Category view: all, supplier_send, supplier_receive, supplier_both, none
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Sender must contain this text (case-sensitive)
    #[arg(long, default_value = "")]
    pub sender: String,

    /// Receiver must contain this text (case-sensitive)
    #[arg(long, default_value = "")]
    pub receiver: String,

    /// Minimum composed data items (non-numeric reads as 0)
    #[arg(long, default_value = "")]
    pub min_items: String,

    /// Maximum composed data items (non-numeric reads as unbounded)
    #[arg(long, default_value = "")]
    pub max_items: String,

    /// Only interfaces with rejection codes
    #[arg(long)]
    pub has_rejection_codes: bool,

    /// Only favorited interfaces
    #[arg(long)]
    pub favorites_only: bool,
}

impl FilterArgs {
    /// Build the criteria snapshot these flags describe.
    pub fn criteria(self, query: String) -> FilterCriteria {
        let advanced = AdvancedFilters::from(RawAdvancedFilters {
            sender: self.sender,
            receiver: self.receiver,
            min_data_items: self.min_items,
            max_data_items: self.max_items,
            has_rejection_codes: self.has_rejection_codes,
            favorites_only: self.favorites_only,
        });
        FilterCriteria::new()
            .with_category(self.category)
            .with_search(query)
            .with_advanced(advanced)
    }
}
