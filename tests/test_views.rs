//! Integration tests for the dashboard views

use chrono::NaiveDate;
use restaurant_dash::pipeline::*;

mod common;

use common::*;

fn load_sample() -> OrderTable {
    let (_temp_dir, csv_path) = create_sample_csv();
    load_orders(&csv_path).unwrap()
}

fn lookup<'a>(rows: &'a [CategoryTotal], category: &str) -> Option<&'a CategoryTotal> {
    rows.iter().find(|r| r.category == category)
}

#[test]
fn test_daily_trend_on_sample() {
    let table = load_sample();

    let trend = daily_trend(&table);

    assert_eq!(trend.len(), 3, "Unreadable timestamp is left out of the trend");
    assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_close(trend[0].orders, 30.0, "day 1 orders");
    assert_close(trend[1].orders, 38.0, "day 2 orders");
    assert_close(trend[2].orders, 26.0, "day 3 orders");

    assert_close(trend[0].moving_average, 30.0, "day 1 average");
    assert_close(trend[1].moving_average, 34.0, "day 2 average");
    assert_close(trend[2].moving_average, 94.0 / 3.0, "day 3 average");
}

#[test]
fn test_daily_trend_window_of_seven() {
    let table = daily_series(10);

    let trend = daily_trend(&table);

    assert_eq!(trend.len(), 10);
    assert_close(trend[0].moving_average, trend[0].orders, "first point");
    // days 1..=7 -> mean 4, days 4..=10 -> mean 7
    assert_close(trend[6].moving_average, 4.0, "first full window");
    assert_close(trend[9].moving_average, 7.0, "last window");
    assert!(trend.windows(2).all(|w| w[0].date < w[1].date), "Dates ascending");
}

#[test]
fn test_daily_trend_groups_by_calendar_date() {
    let table = OrderTable::new(vec![
        order("2024-01-01 09:00:00", "Rain", Some("UberEats"), 3.0, None),
        order("2024-01-01 21:00:00", "Rain", Some("UberEats"), 4.0, None),
    ]);

    let trend = daily_trend(&table);

    assert_eq!(trend.len(), 1);
    assert_close(trend[0].orders, 7.0, "same-day rows are summed");
}

#[test]
fn test_revenue_by_platform_skips_missing_platform() {
    let table = load_sample();

    let revenue = revenue_by_platform(&table);

    let names: Vec<&str> = revenue.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(names, vec!["DoorDash", "Grubhub", "UberEats"]);
    assert_close(lookup(&revenue, "DoorDash").unwrap().value, 600.0, "DoorDash");
    assert_close(lookup(&revenue, "Grubhub").unwrap().value, 196.5, "Grubhub");
    assert_close(lookup(&revenue, "UberEats").unwrap().value, 430.0, "UberEats");
}

#[test]
fn test_orders_by_weather_on_sample() {
    let table = load_sample();

    let weather = orders_by_weather(&table);

    assert_eq!(weather.len(), 3);
    assert_close(lookup(&weather, "Rain").unwrap().value, 47.0, "Rain");
    assert_close(lookup(&weather, "Clear").unwrap().value, 38.0, "Clear");
    assert_close(lookup(&weather, "Snow").unwrap().value, 15.0, "Snow");
}

#[test]
fn test_orders_by_hour_excludes_unparsed_timestamps() {
    let table = load_sample();

    let hours = orders_by_hour(&table);

    let buckets: Vec<u32> = hours.iter().map(|h| h.hour).collect();
    assert_eq!(buckets, vec![11, 12, 18, 19]);
    let total: f64 = hours.iter().map(|h| h.orders).sum();
    assert_close(total, 94.0, "hourly total misses the unparsed row");
}

#[test]
fn test_top_menu_items_on_sample() {
    let table = load_sample();

    let top = top_menu_items(&table);

    let names: Vec<&str> = top.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(names, vec!["Burger", "Pizza", "Salad", "Tacos", "Soup"]);
    assert_close(top[0].value, 30.0, "Burger");
}

#[test]
fn test_top_menu_items_ties_keep_grouping_order() {
    let table = OrderTable::new(vec![
        order("2024-01-01 10:00:00", "Rain", Some("UberEats"), 5.0, Some("Wrap")),
        order("2024-01-01 10:00:00", "Rain", Some("UberEats"), 5.0, Some("Bagel")),
        order("2024-01-01 10:00:00", "Rain", Some("UberEats"), 9.0, Some("Curry")),
        order("2024-01-01 10:00:00", "Rain", Some("UberEats"), 5.0, Some("Donut")),
    ]);

    let top = top_menu_items(&table);

    let names: Vec<&str> = top.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(names, vec!["Curry", "Bagel", "Donut", "Wrap"]);
}

#[test]
fn test_top_menu_items_properties() {
    let table = create_random_table(400, 42);
    let items: std::collections::BTreeSet<String> =
        table.iter().filter_map(|r| r.menu_item.clone()).collect();

    let top = top_menu_items(&table);

    assert!(top.len() <= TOP_MENU_ITEMS);
    assert!(top.windows(2).all(|w| w[0].value >= w[1].value), "Sorted descending");
    assert!(top.iter().all(|r| items.contains(&r.category)));
}

#[test]
fn test_top_menu_items_empty_without_menu_column() {
    let table = OrderTable::new(vec![
        order("2024-01-01 10:00:00", "Rain", Some("UberEats"), 10.0, None),
        order("2024-01-01 10:00:00", "Clear", Some("DoorDash"), 5.0, None),
    ]);

    let filtered = apply_filter(&table, &FilterSelection::new(["Rain"], ["UberEats", "DoorDash"]));

    assert!(top_menu_items(&filtered).is_empty());
    let weather = orders_by_weather(&filtered);
    assert_eq!(
        weather,
        vec![CategoryTotal {
            category: "Rain".to_string(),
            value: 10.0
        }]
    );
}

#[test]
fn test_delivery_time_by_platform_on_sample() {
    let table = load_sample();

    let delivery = delivery_time_by_platform(&table);

    assert_eq!(delivery.len(), 3);
    let doordash = delivery.iter().find(|d| d.platform == "DoorDash").unwrap();
    assert_close(doordash.average_minutes.unwrap(), 98.0 / 3.0, "DoorDash mean skips missing");
    let grubhub = delivery.iter().find(|d| d.platform == "Grubhub").unwrap();
    assert_close(grubhub.average_minutes.unwrap(), 36.5, "Grubhub");
}

#[test]
fn test_delivery_time_group_without_values() {
    let mut record = order("2024-01-01 10:00:00", "Rain", Some("Postmates"), 2.0, None);
    record.delivery_minutes = None;
    let table = OrderTable::new(vec![record]);

    let delivery = delivery_time_by_platform(&table);

    assert_eq!(delivery.len(), 1);
    assert_eq!(delivery[0].average_minutes, None);
}

#[test]
fn test_orders_vs_staff_on_sample() {
    let table = load_sample();

    let view = orders_vs_staff_by_hour(&table);

    assert_eq!(view.hours, vec![11, 12, 18, 19]);
    assert_eq!(view.orders.len(), view.hours.len());
    assert_eq!(view.staff_on_duty.len(), view.hours.len());
    assert_close(view.orders[1], 33.0, "noon orders");
    assert_close(view.staff_on_duty[0].unwrap(), 3.5, "11:00 staff");
    assert_close(view.staff_on_duty[1].unwrap(), 14.0 / 3.0, "noon staff");
}

#[test]
fn test_hour_and_weather_totals_agree() {
    let table = create_random_table(600, 99);
    let selection = FilterSelection::new(["Clear", "Rain", "Fog"], ["UberEats", "DoorDash", ""]);

    let (filtered, views) = run_pipeline(&table, &selection);

    let by_hour: f64 = views.orders_by_hour.iter().map(|h| h.orders).sum();
    let by_weather: f64 = views.orders_by_weather.iter().map(|w| w.value).sum();
    let staff_hours: f64 = views.orders_vs_staff.orders.iter().sum();

    assert_close(by_hour, filtered.total_orders(), "hour total");
    assert_close(by_weather, filtered.total_orders(), "weather total");
    assert_close(staff_hours, by_hour, "staff view total");
}

#[test]
fn test_missing_weather_left_out_of_weather_view() {
    let table = create_random_table(600, 99);
    let selection = FilterSelection::all(&table);

    let (filtered, views) = run_pipeline(&table, &selection);

    let missing: f64 = filtered
        .iter()
        .filter(|r| r.weather.is_none())
        .filter_map(|r| r.orders)
        .sum();
    let by_hour: f64 = views.orders_by_hour.iter().map(|h| h.orders).sum();
    let by_weather: f64 = views.orders_by_weather.iter().map(|w| w.value).sum();

    assert!(filtered.has_missing_weather());
    assert!(views.orders_by_weather.iter().all(|w| !w.category.is_empty()));
    assert_close(by_hour, filtered.total_orders(), "hour total");
    assert_close(by_weather + missing, filtered.total_orders(), "weather total");
}

#[test]
fn test_views_never_exceed_filtered_total() {
    let table = create_random_table(300, 8);
    let selection = FilterSelection::new(["Snow"], ["Grubhub", "UberEats"]);

    let (filtered, views) = run_pipeline(&table, &selection);
    let total = filtered.total_orders();

    let daily: f64 = views.daily_trend.iter().map(|d| d.orders).sum();
    let top: f64 = views.top_menu_items.iter().map(|t| t.value).sum();
    assert!(daily <= total + 1e-9);
    assert!(top <= total + 1e-9);
}

#[test]
fn test_moving_average_matches_daily_series() {
    let table = create_random_table(500, 21);

    let trend = daily_trend(&table);

    assert!(!trend.is_empty());
    assert_close(trend[0].moving_average, trend[0].orders, "window of one");
}

#[test]
fn test_empty_table_gives_empty_views() {
    let views = build_views(&OrderTable::default());

    assert_eq!(views, DashboardViews::default());
}

#[test]
fn test_empty_selection_gives_empty_views() {
    let table = load_sample();
    let selection = FilterSelection::new(["Hail"], ["UberEats"]);

    let (filtered, views) = run_pipeline(&table, &selection);

    assert!(filtered.is_empty());
    assert!(views.daily_trend.is_empty());
    assert!(views.orders_vs_staff.is_empty());
    assert!(views.top_menu_items.is_empty());
}
