//! Terminal tables for the dashboard views

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{
    CategoryTotal, DailyTrendPoint, DashboardViews, HourTotal, OrdersVsStaff, PlatformAverage,
    TOP_MENU_ITEMS,
};

/// Format a numeric cell: whole numbers without decimals, others with two.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| "-".to_string())
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn add_empty_row(table: &mut Table, columns: usize) {
    let mut row = vec![Cell::new("no data").fg(Color::DarkGrey)];
    row.extend((1..columns).map(|_| Cell::new("")));
    table.add_row(row);
}

fn numeric_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn daily_trend_table(points: &[DailyTrendPoint]) -> Table {
    let mut table = new_table(&["Date", "Orders", "7-day Average"]);
    if points.is_empty() {
        add_empty_row(&mut table, 3);
    }
    for p in points {
        table.add_row(vec![
            Cell::new(p.date.format("%d-%b-%Y")),
            numeric_cell(format_value(p.orders)),
            numeric_cell(format!("{:.2}", p.moving_average)).fg(Color::Cyan),
        ]);
    }
    table
}

fn category_table(label: &str, value_label: &str, rows: &[CategoryTotal]) -> Table {
    let mut table = new_table(&[label, value_label]);
    if rows.is_empty() {
        add_empty_row(&mut table, 2);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.category),
            numeric_cell(format_value(row.value)),
        ]);
    }
    table
}

fn hour_table(rows: &[HourTotal]) -> Table {
    let mut table = new_table(&["Hour", "Total Orders"]);
    if rows.is_empty() {
        add_empty_row(&mut table, 2);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(format!("{:02}:00", row.hour)),
            numeric_cell(format_value(row.orders)),
        ]);
    }
    table
}

fn delivery_table(rows: &[PlatformAverage]) -> Table {
    let mut table = new_table(&["Platform", "Avg Delivery (min)"]);
    if rows.is_empty() {
        add_empty_row(&mut table, 2);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.platform),
            numeric_cell(format_optional(row.average_minutes)),
        ]);
    }
    table
}

fn staff_table(view: &OrdersVsStaff) -> Table {
    let mut table = new_table(&["Hour", "Total Orders", "Staff On Duty"]);
    if view.is_empty() {
        add_empty_row(&mut table, 3);
    }
    for ((hour, orders), staff) in view
        .hours
        .iter()
        .zip(&view.orders)
        .zip(&view.staff_on_duty)
    {
        table.add_row(vec![
            Cell::new(format!("{:02}:00", hour)),
            numeric_cell(format_value(*orders)).fg(Color::Blue),
            numeric_cell(format_optional(*staff)).fg(Color::DarkYellow),
        ]);
    }
    table
}

/// Build one titled table per view, in dashboard order.
pub fn render_view_tables(views: &DashboardViews) -> Vec<(String, Table)> {
    vec![
        (
            "Orders Per Day".to_string(),
            daily_trend_table(&views.daily_trend),
        ),
        (
            "Revenue by Delivery Platform".to_string(),
            category_table("Platform", "Total Revenue", &views.revenue_by_platform),
        ),
        (
            "Orders by Weather Condition".to_string(),
            category_table("Weather", "Total Orders", &views.orders_by_weather),
        ),
        (
            "Total Orders by Hour of the Day".to_string(),
            hour_table(&views.orders_by_hour),
        ),
        (
            format!("Top {} Best-Selling Menu Items", TOP_MENU_ITEMS),
            category_table("Menu Item", "Total Orders", &views.top_menu_items),
        ),
        (
            "Average Delivery Time by Platform".to_string(),
            delivery_table(&views.delivery_time_by_platform),
        ),
        (
            "Orders vs. Staff On Duty Throughout the Day".to_string(),
            staff_table(&views.orders_vs_staff),
        ),
    ]
}

/// Print every view as an indented table.
pub fn display_views(views: &DashboardViews) {
    for (title, table) in render_view_tables(views) {
        println!();
        println!(
            "    {} {}",
            style("📊").cyan(),
            style(title.to_uppercase()).white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
