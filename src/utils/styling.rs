//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::{display_category, FilterSelection};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static WEATHER: Emoji<'_, '_> = Emoji("🌦️  ", "");
pub static TRUCK: Emoji<'_, '_> = Emoji("🚚 ", "");
pub static DONE: Emoji<'_, '_> = Emoji("🚀 ", ">> ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        CHART,
        style("Restaurant Analytics Dashboard").cyan().bold()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the configuration card: input file and current selection
pub fn print_config(input: &Path, selection: &FilterSelection) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);
    let weather: Vec<String> = selection
        .weather
        .iter()
        .map(|w| display_category(w))
        .collect();
    let platforms: Vec<String> = selection
        .platforms
        .iter()
        .map(|p| display_category(p))
        .collect();

    println!("    ┌{}┐", line);
    println!("    │ {:<52} │", style("Configuration").cyan().bold());
    println!("    ├{}┤", line);
    println!(
        "    │  {}Input:     {:<38}│",
        FOLDER,
        truncate_path(input, 37)
    );
    println!(
        "    │  {}Weather:   {:<38}│",
        WEATHER,
        truncate_string(&weather.join(", "), 37)
    );
    println!(
        "    │  {}Platforms: {:<38}│",
        TRUCK,
        truncate_string(&platforms.join(", "), 37)
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print a labelled list of category values
pub fn print_values(label: &str, values: &[String]) {
    println!();
    println!(
        "    {} {}",
        style(label).white().bold(),
        style(format!("({})", values.len())).dim()
    );
    for value in values {
        println!("      {} {}", style("•").dim(), value);
    }
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("    {}{}", DONE, style("Dashboard views ready").green().bold());
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Shorten `s` to at most `max_len` characters, keeping its tail.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count + 3 - max_len).collect();
        format!("...{}", tail)
    }
}
