//! Physical parameters of the compared systems
//!
//! Outside this crate the fields are only set by the validating constructors.
//! The generators re-check them before sampling.

use std::f64::consts::PI;

use crate::error::{check_sample_period, check_tau, is_positive, ParameterError};

/// Continuous-time first-order lag with time constant `tau`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousSystem {
    pub(crate) tau: f64,
}

impl ContinuousSystem {
    pub fn new(tau: f64) -> Result<Self, ParameterError> {
        Self { tau }.validate()
    }

    /// Time constant [s]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub(crate) fn validate(self) -> Result<Self, ParameterError> {
        check_tau(self.tau)?;
        Ok(self)
    }
}

/// The same lag, sampled with period `t` over `n` samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteSystem {
    pub(crate) tau: f64,
    pub(crate) omega_l: f64,
    pub(crate) t: f64,
    pub(crate) n: usize,
}

impl DiscreteSystem {
    pub fn new(tau: f64, omega_l: f64, t: f64, n: usize) -> Result<Self, ParameterError> {
        Self { tau, omega_l, t, n }.validate()
    }

    /// Derive the physical parameters from the slider factors.
    ///
    /// - `omega_l = omega_factor / tau`
    /// - `t = t_factor * π / omega_l`
    pub fn from_factors(
        tau: f64,
        omega_factor: u32,
        t_factor: f64,
        n: usize,
    ) -> Result<Self, ParameterError> {
        let tau = check_tau(tau)?;
        let omega_l = omega_factor as f64 / tau;
        Self::new(tau, omega_l, t_factor * PI / omega_l, n)
    }

    /// Time constant [s]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Bandwidth [rad/s] the sample period was derived from
    pub fn omega_l(&self) -> f64 {
        self.omega_l
    }

    /// Sample period [s]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Number of samples
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total sampled duration `n * t` [s]
    pub fn duration(&self) -> f64 {
        self.n as f64 * self.t
    }

    /// Frequency grid spacing `2π / (t * n)` [rad/s]
    pub fn frequency_spacing(&self) -> f64 {
        2.0 * PI / self.t / self.n as f64
    }

    pub(crate) fn validate(self) -> Result<Self, ParameterError> {
        check_tau(self.tau)?;
        if !is_positive(self.omega_l) {
            return Err(ParameterError::NonPositiveBandwidth(self.omega_l));
        }
        check_sample_period(self.t)?;
        if self.n == 0 {
            return Err(ParameterError::EmptySampleCount);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_factors() {
        let system = DiscreteSystem::from_factors(1.0, 10, 0.1, 100).unwrap();
        assert_abs_diff_eq!(system.omega_l(), 10.0);
        assert_abs_diff_eq!(system.t(), 0.1 * PI / 10.0, epsilon = 1e-15);
        assert_abs_diff_eq!(system.frequency_spacing(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(system.duration(), 100.0 * system.t(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_factors_scales_with_tau() {
        let system = DiscreteSystem::from_factors(0.5, 5, 0.2, 10).unwrap();
        assert_abs_diff_eq!(system.omega_l(), 10.0);
        assert_abs_diff_eq!(system.t(), 0.2 * PI / 10.0, epsilon = 1e-15);
    }

    #[test]
    fn test_validate_catches_unchecked_literals() {
        let zero_period = DiscreteSystem {
            tau: 1.0,
            omega_l: 1.0,
            t: 0.0,
            n: 4,
        };
        assert_eq!(
            zero_period.validate(),
            Err(ParameterError::NonPositiveSamplePeriod(0.0))
        );

        let negative_tau = ContinuousSystem { tau: -1.0 };
        assert_eq!(
            negative_tau.validate(),
            Err(ParameterError::NonPositiveTimeConstant(-1.0))
        );
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(
            ContinuousSystem::new(0.0),
            Err(ParameterError::NonPositiveTimeConstant(0.0))
        );
        assert_eq!(
            DiscreteSystem::new(1.0, 1.0, -0.1, 10),
            Err(ParameterError::NonPositiveSamplePeriod(-0.1))
        );
        assert_eq!(
            DiscreteSystem::new(1.0, 1.0, 0.1, 0),
            Err(ParameterError::EmptySampleCount)
        );
        assert_eq!(
            DiscreteSystem::from_factors(1.0, 0, 0.1, 10),
            Err(ParameterError::NonPositiveBandwidth(0.0))
        );
        assert!(matches!(
            ContinuousSystem::new(f64::NAN),
            Err(ParameterError::NonPositiveTimeConstant(_))
        ));
    }
}
