//! Plot utilities module.

pub mod axes;
pub mod decimation;
pub mod export;

pub use axes::{initial_bounds, log_tick_label, log_transform};
pub use decimation::decimate_minmax;
pub use export::{export_csv, save_csv, ExportError};
