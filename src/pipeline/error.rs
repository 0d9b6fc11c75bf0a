//! Error types for loading order data.
//!
//! Malformed cells never surface here: they become missing values and are
//! skipped by the views. Only problems that make the dataset unusable as a
//! whole are reported as errors.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while loading an order dataset.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// File extension is neither `csv` nor `parquet`.
    #[error("Unsupported file format: {0}. Supported formats: csv, parquet")]
    UnsupportedFormat(String),

    /// A column the views cannot do without is absent from the header.
    #[error("Required column '{0}' not found in dataset")]
    MissingColumn(String),

    /// Failure reported by polars while reading or casting.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result alias for the loader.
pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
