//! LagSim - continuous vs. discretized first-order lag
//!
//! Compares the continuous-time system `H(ω) = −1/(1 + jωτ)` against versions of it
//! sampled on a finite frequency grid, in both the frequency domain (Bode magnitude)
//! and the time domain (impulse response).
//!
//! # Architecture
//!
//! Everything is a pure function from parameters to immutable arrays:
//! - [`transfer`] samples the transfer function (log grid or DFT grid)
//! - [`impulse`] recovers impulse responses (closed form or inverse FFT)
//! - [`comparison`] wires one continuous and two discrete instances into plot series
//!
//! # Example
//!
//! ```rust
//! use lagsim::prelude::*;
//!
//! let system = DiscreteSystem::from_factors(1.0, 10, 0.1, 100).unwrap();
//! let response = transfer_discrete(&system).unwrap();
//! let h = impulse_discrete(&response, system.t()).unwrap();
//! assert_eq!(h.len(), 100);
//! ```

pub mod comparison;
pub mod error;
pub mod impulse;
pub mod system;
pub mod transfer;
pub mod utils;

pub use comparison::{Comparison, DiscreteResult};
pub use error::ParameterError;
pub use impulse::{impulse_continuous, impulse_discrete, TimeResponse};
pub use system::{ContinuousSystem, DiscreteSystem};
pub use transfer::{first_order_lag, transfer_continuous, transfer_discrete, FrequencyResponse};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::comparison::{Comparison, DiscreteResult};
    pub use crate::error::ParameterError;
    pub use crate::impulse::{impulse_continuous, impulse_discrete, TimeResponse};
    pub use crate::system::{ContinuousSystem, DiscreteSystem};
    pub use crate::transfer::{
        first_order_lag, transfer_continuous, transfer_discrete, FrequencyResponse,
    };
    pub use crate::utils::constants::DEFAULT_RESOLUTION;
}
