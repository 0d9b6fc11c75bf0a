//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use restaurant_dash::pipeline::{parse_order_time, OrderRecord, OrderTable};
use tempfile::TempDir;

pub const HEADER: &str = "Order_Time,Weather_Condition,Delivery_Platform_Used,Total_Orders_Per_Hour,Total_Revenue,Delivery_Time_Minutes,Staff_On_Duty,Menu_Item";

/// Ten rows over three days with known totals
///
/// - weather: Rain 47 orders, Clear 38, Snow 15 (100 total)
/// - one row without a platform (Clear, 9 orders)
/// - one row with an unreadable timestamp (Snow, 6 orders)
/// - menu items: Burger 30, Pizza 25, Salad 17, Tacos 15, Soup 9, Sushi 4
pub const SAMPLE_ROWS: &[&str] = &[
    "2024-01-01 11:00:00,Rain,UberEats,10,150.0,30,4,Burger",
    "2024-01-01 12:00:00,Clear,DoorDash,12,180.0,25,5,Pizza",
    "2024-01-01 12:30:00,Rain,Grubhub,8,96.5,40,5,Salad",
    "2024-01-02 11:15:00,Clear,,9,110.0,35,3,Tacos",
    "2024-01-02 18:00:00,Snow,UberEats,9,120.0,50,6,Soup",
    "2024-01-02 19:00:00,Rain,DoorDash,20,300.0,28,6,Burger",
    "not-a-time,Snow,DoorDash,6,70.0,45,2,Tacos",
    "2024-01-03 12:00:00,Clear,UberEats,13,160.0,22,4,Pizza",
    "2024-01-03 18:00:00,Rain,Grubhub,9,100.0,33,5,Salad",
    "2024-01-03 19:00:00,Clear,DoorDash,4,50.0,,3,Sushi",
];

/// Write a CSV with the given header and rows into a temporary directory
pub fn write_csv(header: &str, rows: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("orders.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    drop(file);

    (temp_dir, csv_path)
}

/// Write the standard sample dataset
pub fn create_sample_csv() -> (TempDir, PathBuf) {
    write_csv(HEADER, SAMPLE_ROWS)
}

/// Build a record directly, without going through a file
pub fn order(
    time: &str,
    weather: &str,
    platform: Option<&str>,
    orders: f64,
    menu_item: Option<&str>,
) -> OrderRecord {
    OrderRecord {
        order_time: parse_order_time(time),
        weather: Some(weather.to_string()),
        platform: platform.map(String::from),
        orders: Some(orders),
        revenue: Some(orders * 10.0),
        delivery_minutes: Some(30.0),
        staff_on_duty: Some(4.0),
        menu_item: menu_item.map(String::from),
    }
}

/// One order per day for `days` consecutive days, with `orders = day + 1`
pub fn daily_series(days: u32) -> OrderTable {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .map(|d| {
            let date = start + chrono::Duration::days(d as i64);
            let time = format!("{} 12:00:00", date.format("%Y-%m-%d"));
            order(&time, "Clear", Some("UberEats"), (d + 1) as f64, Some("Burger"))
        })
        .collect()
}

/// Random table for property checks
pub fn create_random_table(rows: usize, seed: u64) -> OrderTable {
    use rand::prelude::*;
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let weather = ["Clear", "Rain", "Snow", "Fog"];
    let platforms = [Some("UberEats"), Some("DoorDash"), Some("Grubhub"), None];
    let items = ["Burger", "Pizza", "Salad", "Tacos", "Sushi", "Soup", "Pasta"];

    (0..rows)
        .map(|_| {
            let day = rng.gen_range(1..=28);
            let hour = rng.gen_range(0..24);
            let time = format!("2024-02-{:02} {:02}:00:00", day, hour);
            let mut record = order(
                &time,
                weather[rng.gen_range(0..weather.len())],
                platforms[rng.gen_range(0..platforms.len())],
                rng.gen_range(0..50) as f64,
                Some(items[rng.gen_range(0..items.len())]),
            );
            record.staff_on_duty = Some(rng.gen_range(1..10) as f64);
            if rng.gen_range(0..10) == 0 {
                record.weather = None;
            }
            record
        })
        .collect()
}

/// Compare floats produced by sums and means
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}
