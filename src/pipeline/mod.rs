//! Pipeline module - loading, filtering and the dashboard views
//!
//! ```text
//!  CSV / Parquet ──► loader ──► OrderTable ──► filter ──► views ──► DashboardViews
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod views;

pub use error::*;
pub use filter::*;
pub use loader::*;
pub use model::*;
pub use views::*;
