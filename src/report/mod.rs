//! Report module - presenting the dashboard views

pub mod export;
pub mod summary;
pub mod views_table;

pub use export::*;
pub use summary::*;
pub use views_table::*;
