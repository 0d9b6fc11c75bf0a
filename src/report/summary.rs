//! Filter summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{display_category, FilterSelection, OrderTable};

use super::views_table::format_value;

/// How much of the dataset survived the current selection
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterSummary {
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub total_orders: f64,
    pub unparsed_timestamps: usize,
    pub weather: Vec<String>,
    pub platforms: Vec<String>,
}

impl FilterSummary {
    pub fn new(raw: &OrderTable, filtered: &OrderTable, selection: &FilterSelection) -> Self {
        Self {
            rows_loaded: raw.len(),
            rows_kept: filtered.len(),
            total_orders: filtered.total_orders(),
            unparsed_timestamps: filtered.unparsed_timestamps(),
            weather: selection.weather.iter().map(|w| display_category(w)).collect(),
            platforms: selection.platforms.iter().map(|p| display_category(p)).collect(),
        }
    }

    /// Share of loaded rows kept by the filter, in percent.
    pub fn kept_pct(&self) -> f64 {
        if self.rows_loaded > 0 {
            self.rows_kept as f64 / self.rows_loaded as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Rows Loaded"), Cell::new(self.rows_loaded)]);

        let kept_color = if self.rows_kept == 0 {
            Color::Red
        } else {
            Color::Green
        };
        table.add_row(vec![
            Cell::new("✅ Rows Kept"),
            Cell::new(format!("{} ({:.1}%)", self.rows_kept, self.kept_pct()))
                .fg(kept_color)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🧾 Total Orders"),
            Cell::new(format_value(self.total_orders)),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Unreadable Timestamps"),
            Cell::new(self.unparsed_timestamps).fg(if self.unparsed_timestamps == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🌦️  Weather"),
            Cell::new(self.weather.join(", ")),
        ]);
        table.add_row(vec![
            Cell::new("🚚 Platforms"),
            Cell::new(self.platforms.join(", ")),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("FILTER SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }

        if self.rows_kept == 0 {
            println!();
            println!(
                "    {} {}",
                style("!").yellow().bold(),
                style("No rows match the selection; every view is empty").yellow()
            );
        }
    }
}
