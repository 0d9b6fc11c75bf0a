//! Aggregated views over a filtered order table
//!
//! Every view follows the same grouping rules:
//! - rows whose group key is missing are left out of that view
//! - missing values are skipped by sums (a group of only missing values sums
//!   to 0) and by means (such a group has no mean)
//! - groups come out ordered by key, except for the top menu items
//!
//! None of these functions can fail. An empty table gives empty views.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::filter::{apply_filter, FilterSelection};
use super::model::{OrderRecord, OrderTable};

/// Trailing window of the daily order moving average.
pub const MOVING_AVERAGE_WINDOW: usize = 7;

/// Number of menu items kept in the best-seller view.
pub const TOP_MENU_ITEMS: usize = 5;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// One day of the daily order trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    /// Orders summed over the day.
    pub orders: f64,
    /// Trailing mean of `orders` over up to [`MOVING_AVERAGE_WINDOW`] days.
    pub moving_average: f64,
}

/// A numeric total for one category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub value: f64,
}

/// Orders summed for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourTotal {
    pub hour: u32,
    pub orders: f64,
}

/// Mean delivery time for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformAverage {
    pub platform: String,
    pub average_minutes: Option<f64>,
}

/// Orders and staffing per hour, as aligned sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdersVsStaff {
    pub hours: Vec<u32>,
    pub orders: Vec<f64>,
    pub staff_on_duty: Vec<Option<f64>>,
}

impl OrdersVsStaff {
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

/// All seven dashboard views computed from one filtered table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardViews {
    pub daily_trend: Vec<DailyTrendPoint>,
    pub revenue_by_platform: Vec<CategoryTotal>,
    pub orders_by_weather: Vec<CategoryTotal>,
    pub orders_by_hour: Vec<HourTotal>,
    pub top_menu_items: Vec<CategoryTotal>,
    pub delivery_time_by_platform: Vec<PlatformAverage>,
    pub orders_vs_staff: OrdersVsStaff,
}

// ---------------------------------------------------------------------------
// Grouping helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Sum `value` per `key`, dropping rows without a key.
fn sum_by<K, FK, FV>(table: &OrderTable, key: FK, value: FV) -> BTreeMap<K, f64>
where
    K: Ord,
    FK: Fn(&OrderRecord) -> Option<K>,
    FV: Fn(&OrderRecord) -> Option<f64>,
{
    let mut groups = BTreeMap::new();
    for record in table.iter() {
        if let Some(k) = key(record) {
            *groups.entry(k).or_insert(0.0) += value(record).unwrap_or(0.0);
        }
    }
    groups
}

/// Mean of `value` per `key`, dropping rows without a key.
fn mean_by<K, FK, FV>(table: &OrderTable, key: FK, value: FV) -> BTreeMap<K, Option<f64>>
where
    K: Ord,
    FK: Fn(&OrderRecord) -> Option<K>,
    FV: Fn(&OrderRecord) -> Option<f64>,
{
    let mut groups: BTreeMap<K, MeanAccumulator> = BTreeMap::new();
    for record in table.iter() {
        if let Some(k) = key(record) {
            groups.entry(k).or_default().push(value(record));
        }
    }
    groups.into_iter().map(|(k, acc)| (k, acc.mean())).collect()
}

fn into_category_totals(groups: BTreeMap<String, f64>) -> Vec<CategoryTotal> {
    groups
        .into_iter()
        .map(|(category, value)| CategoryTotal { category, value })
        .collect()
}

/// Trailing mean over up to `window` samples. The first `window - 1` points
/// average over the samples seen so far.
pub fn trailing_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Orders per calendar day with a trailing 7-day moving average.
pub fn daily_trend(table: &OrderTable) -> Vec<DailyTrendPoint> {
    let daily = sum_by(table, OrderRecord::date, |r| r.orders);
    let totals: Vec<f64> = daily.values().copied().collect();
    let averages = trailing_mean(&totals, MOVING_AVERAGE_WINDOW);

    daily
        .into_iter()
        .zip(averages)
        .map(|((date, orders), moving_average)| DailyTrendPoint {
            date,
            orders,
            moving_average,
        })
        .collect()
}

/// Total revenue per delivery platform.
pub fn revenue_by_platform(table: &OrderTable) -> Vec<CategoryTotal> {
    into_category_totals(sum_by(table, |r| r.platform.clone(), |r| r.revenue))
}

/// Total orders per weather condition.
pub fn orders_by_weather(table: &OrderTable) -> Vec<CategoryTotal> {
    into_category_totals(sum_by(table, |r| r.weather.clone(), |r| r.orders))
}

/// Total orders per hour of day. Rows without a parsed timestamp are skipped.
pub fn orders_by_hour(table: &OrderTable) -> Vec<HourTotal> {
    sum_by(table, OrderRecord::hour, |r| r.orders)
        .into_iter()
        .map(|(hour, orders)| HourTotal { hour, orders })
        .collect()
}

/// The best-selling menu items by total orders, highest first.
///
/// Items with equal totals keep their alphabetical grouping order.
pub fn top_menu_items(table: &OrderTable) -> Vec<CategoryTotal> {
    let mut items = into_category_totals(sum_by(table, |r| r.menu_item.clone(), |r| r.orders));
    // sort_by is stable
    items.sort_by(|a, b| b.value.total_cmp(&a.value));
    items.truncate(TOP_MENU_ITEMS);
    items
}

/// Mean delivery time per platform.
pub fn delivery_time_by_platform(table: &OrderTable) -> Vec<PlatformAverage> {
    mean_by(table, |r| r.platform.clone(), |r| r.delivery_minutes)
        .into_iter()
        .map(|(platform, average_minutes)| PlatformAverage {
            platform,
            average_minutes,
        })
        .collect()
}

/// Orders summed and staff averaged per hour of day.
pub fn orders_vs_staff_by_hour(table: &OrderTable) -> OrdersVsStaff {
    let orders = sum_by(table, OrderRecord::hour, |r| r.orders);
    let staff = mean_by(table, OrderRecord::hour, |r| r.staff_on_duty);

    // Both maps are keyed by the same set of hours.
    let mut view = OrdersVsStaff::default();
    for ((hour, total), (_, mean_staff)) in orders.into_iter().zip(staff) {
        view.hours.push(hour);
        view.orders.push(total);
        view.staff_on_duty.push(mean_staff);
    }
    view
}

/// Compute every dashboard view from a filtered table.
pub fn build_views(filtered: &OrderTable) -> DashboardViews {
    let views = DashboardViews {
        daily_trend: daily_trend(filtered),
        revenue_by_platform: revenue_by_platform(filtered),
        orders_by_weather: orders_by_weather(filtered),
        orders_by_hour: orders_by_hour(filtered),
        top_menu_items: top_menu_items(filtered),
        delivery_time_by_platform: delivery_time_by_platform(filtered),
        orders_vs_staff: orders_vs_staff_by_hour(filtered),
    };

    log::debug!(
        "Built views from {} rows: {} days, {} hours, {} platforms",
        filtered.len(),
        views.daily_trend.len(),
        views.orders_by_hour.len(),
        views.revenue_by_platform.len()
    );

    views
}

/// Filter the raw table and compute every view from the result.
pub fn run_pipeline(raw: &OrderTable, selection: &FilterSelection) -> (OrderTable, DashboardViews) {
    let filtered = apply_filter(raw, selection);
    let views = build_views(&filtered);
    (filtered, views)
}
