//! Restaurant analytics dashboard CLI
//!
//! Loads the order dataset once, applies the weather and platform selection
//! and prints every dashboard view as a table.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use restaurant_dash::cli::{Cli, Commands};
use restaurant_dash::pipeline::{
    display_category, load_orders, run_pipeline, OrderTable, MISSING_CATEGORY,
};
use restaurant_dash::report::{display_views, export_views, ExportParams, FilterSummary};
use restaurant_dash::utils::{
    create_spinner, finish_with_failure, finish_with_success, print_banner, print_completion,
    print_config, print_info, print_success, print_values,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    let table = load_with_spinner(&cli)?;

    if let Some(Commands::Values) = &cli.command {
        print_filter_values(&table);
        return Ok(());
    }

    let selection = cli.selection(&table);
    print_config(&cli.input, &selection);

    let step_start = Instant::now();
    let (filtered, views) = run_pipeline(&table, &selection);
    log::info!(
        "Computed views for {} of {} rows in {:.2?}",
        filtered.len(),
        table.len(),
        step_start.elapsed()
    );

    FilterSummary::new(&table, &filtered, &selection).display();
    display_views(&views);

    if let Some(json_path) = &cli.json {
        let input_file = cli.input.display().to_string();
        let params = ExportParams {
            input_file: &input_file,
            rows_loaded: table.len(),
            rows_kept: filtered.len(),
            selection: &selection,
        };
        export_views(&views, json_path, &params)?;
        println!();
        print_success(&format!("Views written to {}", json_path.display()));
    }

    print_completion();
    Ok(())
}

fn load_with_spinner(cli: &Cli) -> Result<OrderTable> {
    let spinner = create_spinner(&format!("Loading {}...", cli.input.display()));

    match load_orders(&cli.input) {
        Ok(table) => {
            finish_with_success(&spinner, &format!("Loaded {} orders", table.len()));
            if table.is_empty() {
                print_info("The dataset has no rows");
            }
            Ok(table)
        }
        Err(e) => {
            finish_with_failure(&spinner);
            Err(e)
        }
    }
}

fn print_filter_values(table: &OrderTable) {
    let mut weather: Vec<String> = table.distinct_weather().into_iter().collect();
    if table.has_missing_weather() {
        weather.push(display_category(MISSING_CATEGORY));
    }
    let mut platforms: Vec<String> = table.distinct_platforms().into_iter().collect();
    if table.has_missing_platform() {
        platforms.push(display_category(MISSING_CATEGORY));
    }

    print_values("Weather conditions", &weather);
    print_values("Delivery platforms", &platforms);

    if table.has_missing_platform() {
        println!();
        println!(
            "    {}",
            style("Use --include-missing-platform to keep orders listed as (none)").dim()
        );
    }
}
