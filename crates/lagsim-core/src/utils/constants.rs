//! Sampling constants and defaults

/// Default number of points for the continuous frequency and time grids
pub const DEFAULT_RESOLUTION: usize = 10_000;

/// Lower bound of the continuous frequency grid, as a power of ten [rad/s]
pub const OMEGA_MIN_EXP: f64 = -3.0;

/// Upper bound of the continuous frequency grid, as a power of ten [rad/s]
pub const OMEGA_MAX_EXP: f64 = 3.0;
