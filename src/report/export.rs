//! JSON export of the dashboard views

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{DashboardViews, FilterSelection};

/// Metadata about the run that produced the views
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    /// Tool version
    pub version: String,
    /// Input file path
    pub input_file: String,
    /// Rows in the loaded dataset
    pub rows_loaded: usize,
    /// Rows kept by the filter
    pub rows_kept: usize,
    /// Selected weather conditions
    pub weather: Vec<String>,
    /// Selected delivery platforms (`""` is the missing-platform category)
    pub platforms: Vec<String>,
}

/// Complete export: metadata plus every view
#[derive(Debug, Serialize)]
pub struct ViewsExport<'a> {
    pub metadata: ExportMetadata,
    pub views: &'a DashboardViews,
}

/// Parameters for the export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub selection: &'a FilterSelection,
}

/// Serialize the views with their metadata to a pretty JSON string.
pub fn views_to_json(views: &DashboardViews, params: &ExportParams) -> Result<String> {
    let export = ViewsExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            rows_loaded: params.rows_loaded,
            rows_kept: params.rows_kept,
            weather: params.selection.weather.iter().cloned().collect(),
            platforms: params.selection.platforms.iter().cloned().collect(),
        },
        views,
    };

    serde_json::to_string_pretty(&export).context("Failed to serialize dashboard views to JSON")
}

/// Export the views to a JSON file
pub fn export_views(views: &DashboardViews, output_path: &Path, params: &ExportParams) -> Result<()> {
    let json = views_to_json(views, params)?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write views to {}", output_path.display()))?;

    Ok(())
}
