//! Order records and the in-memory order table

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

// ---------------------------------------------------------------------------
// Source schema
// ---------------------------------------------------------------------------

pub const ORDER_TIME: &str = "Order_Time";
pub const WEATHER_CONDITION: &str = "Weather_Condition";
pub const DELIVERY_PLATFORM: &str = "Delivery_Platform_Used";
pub const TOTAL_ORDERS: &str = "Total_Orders_Per_Hour";
pub const TOTAL_REVENUE: &str = "Total_Revenue";
pub const DELIVERY_TIME: &str = "Delivery_Time_Minutes";
pub const STAFF_ON_DUTY: &str = "Staff_On_Duty";
pub const MENU_ITEM: &str = "Menu_Item";

/// Category a missing weather condition or delivery platform is matched as
/// when filtering.
pub const MISSING_CATEGORY: &str = "";

/// Label for a category value; the missing category is shown as `(none)`.
pub fn display_category(value: &str) -> String {
    if value == MISSING_CATEGORY {
        "(none)".to_string()
    } else {
        value.to_string()
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse an order timestamp leniently.
///
/// Accepts RFC 3339, the common `YYYY-MM-DD HH:MM[:SS[.f]]` layouts (with a
/// space or `T` separator), slash-separated dates and bare dates (read as
/// midnight). Returns `None` for anything else.
pub fn parse_order_time(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

// ---------------------------------------------------------------------------
// OrderRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single row of the order dataset. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRecord {
    pub order_time: Option<NaiveDateTime>,
    pub weather: Option<String>,
    pub platform: Option<String>,
    /// Hourly order count.
    pub orders: Option<f64>,
    pub revenue: Option<f64>,
    pub delivery_minutes: Option<f64>,
    pub staff_on_duty: Option<f64>,
    pub menu_item: Option<String>,
}

impl OrderRecord {
    /// Hour of day (0-23), `None` when the timestamp did not parse.
    pub fn hour(&self) -> Option<u32> {
        self.order_time.map(|t| t.hour())
    }

    /// Calendar date of the order, `None` when the timestamp did not parse.
    pub fn date(&self) -> Option<NaiveDate> {
        self.order_time.map(|t| t.date())
    }

    /// Weather as matched by the filter: missing becomes [`MISSING_CATEGORY`].
    pub fn normalized_weather(&self) -> &str {
        self.weather.as_deref().unwrap_or(MISSING_CATEGORY)
    }

    /// Platform as matched by the filter: missing becomes [`MISSING_CATEGORY`].
    pub fn normalized_platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(MISSING_CATEGORY)
    }
}

// ---------------------------------------------------------------------------
// OrderTable – the loaded dataset
// ---------------------------------------------------------------------------

/// Owned, read-only collection of order records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTable {
    pub records: Vec<OrderRecord>,
}

impl OrderTable {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.records.iter()
    }

    /// Sum of hourly order counts, skipping missing values.
    pub fn total_orders(&self) -> f64 {
        self.records.iter().filter_map(|r| r.orders).sum()
    }

    /// Sorted distinct weather conditions (missing values excluded).
    pub fn distinct_weather(&self) -> BTreeSet<String> {
        self.records.iter().filter_map(|r| r.weather.clone()).collect()
    }

    /// Sorted distinct delivery platforms (missing values excluded).
    pub fn distinct_platforms(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|r| r.platform.clone())
            .collect()
    }

    /// Whether any row has no weather condition.
    pub fn has_missing_weather(&self) -> bool {
        self.records.iter().any(|r| r.weather.is_none())
    }

    /// Whether any row has no delivery platform.
    pub fn has_missing_platform(&self) -> bool {
        self.records.iter().any(|r| r.platform.is_none())
    }

    /// Number of rows whose timestamp could not be parsed.
    pub fn unparsed_timestamps(&self) -> usize {
        self.records.iter().filter(|r| r.order_time.is_none()).count()
    }
}

impl FromIterator<OrderRecord> for OrderTable {
    fn from_iter<I: IntoIterator<Item = OrderRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
