//! Parameter validation errors

use thiserror::Error;

/// Rejected input to one of the generators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Time constant must be positive and finite, got {0}")]
    NonPositiveTimeConstant(f64),

    #[error("Sample period must be positive and finite, got {0}")]
    NonPositiveSamplePeriod(f64),

    #[error("Bandwidth must be positive and finite, got {0}")]
    NonPositiveBandwidth(f64),

    #[error("Sample count must be at least 1")]
    EmptySampleCount,

    #[error("Time axis upper bound must be positive and finite, got {0}")]
    NonPositiveDuration(f64),

    #[error("Resolution must be at least 2 points, got {0}")]
    ResolutionTooSmall(usize),

    #[error("Frequency response is empty")]
    EmptyResponse,
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn check_tau(tau: f64) -> Result<f64, ParameterError> {
    if is_positive(tau) {
        Ok(tau)
    } else {
        Err(ParameterError::NonPositiveTimeConstant(tau))
    }
}

pub(crate) fn check_sample_period(t: f64) -> Result<f64, ParameterError> {
    if is_positive(t) {
        Ok(t)
    } else {
        Err(ParameterError::NonPositiveSamplePeriod(t))
    }
}

pub(crate) fn check_resolution(resolution: usize) -> Result<usize, ParameterError> {
    if resolution >= 2 {
        Ok(resolution)
    } else {
        Err(ParameterError::ResolutionTooSmall(resolution))
    }
}
