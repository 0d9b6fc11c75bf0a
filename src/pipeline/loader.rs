//! Dataset loader for CSV and Parquet order files

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::error::{DashboardError, DashboardResult};
use super::model::{
    parse_order_time, OrderRecord, OrderTable, DELIVERY_PLATFORM, DELIVERY_TIME, MENU_ITEM,
    ORDER_TIME, STAFF_ON_DUTY, TOTAL_ORDERS, TOTAL_REVENUE, WEATHER_CONDITION,
};

/// File read when no input path is given.
pub const DEFAULT_DATA_PATH: &str = "restaurant_analytics_data_large.csv";

/// Load a dataset from a file (CSV or Parquet based on extension)
///
/// CSV columns are all read as text, so a malformed cell anywhere in the file
/// cannot fail the read; typing happens in [`orders_from_dataframe`].
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        // An inference window of 0 makes every column String.
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => return Err(DashboardError::UnsupportedFormat(extension).into()),
    };

    lf.collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))
}

/// Load an order file and convert it into typed records.
pub fn load_orders(path: &Path) -> Result<OrderTable> {
    let df = load_dataset(path)?;
    let table = orders_from_dataframe(&df)
        .with_context(|| format!("Invalid order data in {}", path.display()))?;

    log::info!("Loaded {} orders from {}", table.len(), path.display());
    Ok(table)
}

/// Convert a DataFrame with the order schema into an [`OrderTable`].
///
/// `Order_Time`, `Weather_Condition`, `Delivery_Platform_Used` and
/// `Total_Orders_Per_Hour` must be present. The remaining columns are read as
/// all-missing when absent. Cells that cannot be read as the column's type
/// become missing values.
pub fn orders_from_dataframe(df: &DataFrame) -> DashboardResult<OrderTable> {
    let height = df.height();

    let order_times: Vec<Option<_>> = required_strings(df, ORDER_TIME)?
        .into_iter()
        .map(|v| v.as_deref().and_then(parse_order_time))
        .collect();
    let weather = required_strings(df, WEATHER_CONDITION)?;
    let platforms = required_strings(df, DELIVERY_PLATFORM)?;
    let orders = required_floats(df, TOTAL_ORDERS)?;
    let revenue = optional_floats(df, TOTAL_REVENUE, height)?;
    let delivery = optional_floats(df, DELIVERY_TIME, height)?;
    let staff = optional_floats(df, STAFF_ON_DUTY, height)?;
    let menu_items = optional_strings(df, MENU_ITEM, height)?;

    let records: Vec<OrderRecord> = order_times
        .into_iter()
        .zip(weather)
        .zip(platforms)
        .zip(orders)
        .zip(revenue)
        .zip(delivery)
        .zip(staff)
        .zip(menu_items)
        .map(
            |(((((((order_time, weather), platform), orders), revenue), delivery), staff), menu)| {
                OrderRecord {
                    order_time,
                    weather,
                    platform,
                    orders,
                    revenue,
                    delivery_minutes: delivery,
                    staff_on_duty: staff,
                    menu_item: menu,
                }
            },
        )
        .collect();

    let table = OrderTable::new(records);

    let unparsed = table.unparsed_timestamps();
    if unparsed > 0 {
        log::warn!(
            "{} of {} rows have an unreadable {}; they are excluded from daily and hourly views",
            unparsed,
            height,
            ORDER_TIME
        );
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Column extraction
// ---------------------------------------------------------------------------

fn required_column<'a>(df: &'a DataFrame, name: &str) -> DashboardResult<&'a Column> {
    df.column(name)
        .map_err(|_| DashboardError::MissingColumn(name.to_string()))
}

fn required_strings(df: &DataFrame, name: &str) -> DashboardResult<Vec<Option<String>>> {
    column_to_strings(required_column(df, name)?)
}

fn required_floats(df: &DataFrame, name: &str) -> DashboardResult<Vec<Option<f64>>> {
    column_to_floats(required_column(df, name)?)
}

fn optional_strings(
    df: &DataFrame,
    name: &str,
    height: usize,
) -> DashboardResult<Vec<Option<String>>> {
    match df.column(name) {
        Ok(col) => column_to_strings(col),
        Err(_) => {
            log::warn!("Column '{}' not found, treating it as empty", name);
            Ok(vec![None; height])
        }
    }
}

fn optional_floats(df: &DataFrame, name: &str, height: usize) -> DashboardResult<Vec<Option<f64>>> {
    match df.column(name) {
        Ok(col) => column_to_floats(col),
        Err(_) => {
            log::warn!("Column '{}' not found, treating it as empty", name);
            Ok(vec![None; height])
        }
    }
}

/// Read any column as text. Numeric category labels are kept as written.
fn column_to_strings(col: &Column) -> DashboardResult<Vec<Option<String>>> {
    let cast = col.cast(&DataType::String)?;
    let values = cast
        .str()?
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect();
    Ok(values)
}

/// Read a column as floats. The cast is non-strict: text that is not a
/// number becomes missing.
fn column_to_floats(col: &Column) -> DashboardResult<Vec<Option<f64>>> {
    let cast = col.cast(&DataType::Float64)?;
    let values = cast
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect();
    Ok(values)
}
