//! Categorical filtering of the order table

use std::collections::BTreeSet;

use super::model::{OrderRecord, OrderTable, MISSING_CATEGORY};

/// Selected values per filterable column.
///
/// A row passes when its normalised weather condition is in `weather` and its
/// normalised platform is in `platforms`. A missing value is matched as the
/// empty-string category. An empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub weather: BTreeSet<String>,
    pub platforms: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<W, P>(weather: W, platforms: P) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            weather: weather.into_iter().map(Into::into).collect(),
            platforms: platforms.into_iter().map(Into::into).collect(),
        }
    }

    /// Select every value present in `table`, including the missing category
    /// of either column when some rows lack it. Applying this selection keeps
    /// every row.
    pub fn all(table: &OrderTable) -> Self {
        let mut platforms = table.distinct_platforms();
        if table.has_missing_platform() {
            platforms.insert(MISSING_CATEGORY.to_string());
        }
        Self {
            weather: weather_universe(table),
            platforms,
        }
    }

    /// The dashboard's initial selection: every weather condition (missing
    /// included) and every named platform. Rows without a platform are not
    /// offered.
    pub fn dashboard_default(table: &OrderTable) -> Self {
        Self {
            weather: weather_universe(table),
            platforms: table.distinct_platforms(),
        }
    }

    /// Whether a single record passes this selection.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.weather.contains(record.normalized_weather())
            && self.platforms.contains(record.normalized_platform())
    }
}

fn weather_universe(table: &OrderTable) -> BTreeSet<String> {
    let mut weather = table.distinct_weather();
    if table.has_missing_weather() {
        weather.insert(MISSING_CATEGORY.to_string());
    }
    weather
}

/// Return the rows of `table` that pass `selection`, in their original order.
pub fn apply_filter(table: &OrderTable, selection: &FilterSelection) -> OrderTable {
    if selection.weather.is_empty() || selection.platforms.is_empty() {
        log::debug!("Empty filter selection, nothing passes");
        return OrderTable::default();
    }

    let filtered: OrderTable = table
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();

    log::debug!(
        "Filter kept {} of {} rows ({} weather, {} platform values selected)",
        filtered.len(),
        table.len(),
        selection.weather.len(),
        selection.platforms.len()
    );

    filtered
}
