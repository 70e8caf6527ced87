//! LagSim application library

pub mod app;
pub mod plotting;
pub mod state;
pub mod ui;

// Re-export commonly used items
pub use app::LagSimApp;
pub use state::{AppState, SubmitError};
