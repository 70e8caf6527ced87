//! Shared types for LagSim.
//!
//! This crate defines the data that crosses the boundary between the numerical
//! core and the application:
//! - Demo settings (slider factors) and their documented ranges
//! - Plot specifications handed to the renderer
//! - Plot style configuration

pub mod ranges;
mod plot;
mod settings;

pub use plot::*;
pub use settings::*;
