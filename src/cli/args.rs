//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::pipeline::{FilterSelection, OrderTable, DEFAULT_DATA_PATH, MISSING_CATEGORY};

/// Restaurant analytics - filter order data and print the dashboard views
#[derive(Parser, Debug)]
#[command(name = "restaurant-dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_PATH)]
    pub input: PathBuf,

    /// Weather conditions to keep (comma-separated).
    /// Defaults to every weather condition in the dataset, missing included.
    #[arg(short, long, value_delimiter = ',')]
    pub weather: Option<Vec<String>>,

    /// Delivery platforms to keep (comma-separated).
    /// Defaults to every named platform.
    #[arg(short, long, value_delimiter = ',')]
    pub platform: Option<Vec<String>>,

    /// Also keep orders that have no weather condition
    #[arg(long, default_value = "false")]
    pub include_missing_weather: bool,

    /// Also keep orders that have no delivery platform
    #[arg(long, default_value = "false")]
    pub include_missing_platform: bool,

    /// Write all views to this JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the distinct weather conditions and delivery platforms
    Values,
}

impl Cli {
    /// Build the filter selection, falling back to the dashboard defaults
    /// for dimensions not given on the command line.
    pub fn selection(&self, table: &OrderTable) -> FilterSelection {
        let defaults = FilterSelection::dashboard_default(table);

        let mut selection = FilterSelection {
            weather: self
                .weather
                .as_ref()
                .map(|w| collect_values(w))
                .unwrap_or(defaults.weather),
            platforms: self
                .platform
                .as_ref()
                .map(|p| collect_values(p))
                .unwrap_or(defaults.platforms),
        };

        if self.include_missing_weather {
            selection.weather.insert(MISSING_CATEGORY.to_string());
        }
        if self.include_missing_platform {
            selection.platforms.insert(MISSING_CATEGORY.to_string());
        }
        selection
    }
}

fn collect_values(values: &[String]) -> BTreeSet<String> {
    values.iter().map(|v| v.trim().to_string()).collect()
}
