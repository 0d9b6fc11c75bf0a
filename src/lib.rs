//! Restaurant analytics dashboard library
//!
//! Loads restaurant order data, filters it by weather condition and
//! delivery platform, and computes the aggregated views shown on the
//! dashboard.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
