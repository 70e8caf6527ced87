//! Transfer function generator
//!
//! Samples the first-order lag
//!
//! ```text
//! H(ω) = −1 / (1 + jωτ)
//! ```
//!
//! either on a log-spaced grid (continuous reference) or on the uniform DFT grid
//! `ω_k = k·2π/(t·n)` of a discrete system. Both use the same formula; the
//! discretization lives entirely in the frequency grid.

use num_complex::Complex64;

use crate::error::{check_resolution, ParameterError};
use crate::system::{ContinuousSystem, DiscreteSystem};
use crate::utils::constants::{OMEGA_MAX_EXP, OMEGA_MIN_EXP};
use crate::utils::logspace;

/// Ordered `(ω, H(ω))` samples
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Angular frequencies [rad/s]
    pub omega: Vec<f64>,
    /// Complex transfer function values
    pub values: Vec<Complex64>,
}

impl FrequencyResponse {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// |H(ω)| for every sample
    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|h| h.norm()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.omega.iter().copied().zip(self.values.iter().copied())
    }

    /// `[ω, |H(ω)|]` points, skipping the first `skip` samples
    pub fn magnitude_points(&self, skip: usize) -> Vec<[f64; 2]> {
        self.iter().skip(skip).map(|(w, h)| [w, h.norm()]).collect()
    }
}

/// Evaluate `−1 / (1 + jωτ)`
#[inline]
pub fn first_order_lag(tau: f64, omega: f64) -> Complex64 {
    -1.0 / Complex64::new(1.0, omega * tau)
}

/// Continuous reference: `resolution` log-spaced points over `[10⁻³, 10³]` rad/s
pub fn transfer_continuous(
    system: &ContinuousSystem,
    resolution: usize,
) -> Result<FrequencyResponse, ParameterError> {
    let system = system.validate()?;
    let resolution = check_resolution(resolution)?;
    let omega = logspace(OMEGA_MIN_EXP, OMEGA_MAX_EXP, resolution);
    let values = omega.iter().map(|&w| first_order_lag(system.tau(), w)).collect();

    Ok(FrequencyResponse { omega, values })
}

/// Discrete system: `n` points on the DFT grid, starting at DC.
///
/// The DC sample is kept; plotting code drops it on log axes.
pub fn transfer_discrete(system: &DiscreteSystem) -> Result<FrequencyResponse, ParameterError> {
    let system = system.validate()?;

    let delta_omega = system.frequency_spacing();
    let omega: Vec<f64> = (0..system.n()).map(|k| k as f64 * delta_omega).collect();
    let values = omega.iter().map(|&w| first_order_lag(system.tau(), w)).collect();

    Ok(FrequencyResponse { omega, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_first_order_lag_values() {
        let h = first_order_lag(1.0, 1.0);
        // −1/(1+j) = −0.5 + 0.5j
        assert_abs_diff_eq!(h.re, -0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(h.im, 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(h.norm(), FRAC_1_SQRT_2, epsilon = 1e-15);

        let dc = first_order_lag(2.0, 0.0);
        assert_eq!(dc, Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn test_continuous_grid() {
        let system = ContinuousSystem::new(1.0).unwrap();
        let response = transfer_continuous(&system, 1_000).unwrap();

        assert_eq!(response.len(), 1_000);
        assert_abs_diff_eq!(response.omega[0], 1e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(response.omega[999], 1e3, epsilon = 1e-9);
    }

    #[test]
    fn test_continuous_rejects_small_resolution() {
        let system = ContinuousSystem::new(1.0).unwrap();
        assert_eq!(
            transfer_continuous(&system, 1),
            Err(ParameterError::ResolutionTooSmall(1))
        );
    }

    #[test]
    fn test_discrete_grid_starts_at_dc() {
        let system = DiscreteSystem::new(1.0, 1.0, 0.1, 8).unwrap();
        let response = transfer_discrete(&system).unwrap();

        assert_eq!(response.len(), 8);
        assert_eq!(response.omega[0], 0.0);
        assert_eq!(response.values[0], Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn test_magnitude_points_skip_dc() {
        let system = DiscreteSystem::new(1.0, 1.0, 0.1, 8).unwrap();
        let response = transfer_discrete(&system).unwrap();

        let points = response.magnitude_points(1);
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|p| p[0] > 0.0));
    }

    #[test]
    fn test_generators_reject_unchecked_systems() {
        let zero_period = DiscreteSystem {
            tau: 1.0,
            omega_l: 1.0,
            t: 0.0,
            n: 4,
        };
        assert_eq!(
            transfer_discrete(&zero_period),
            Err(ParameterError::NonPositiveSamplePeriod(0.0))
        );

        let zero_tau = ContinuousSystem { tau: 0.0 };
        assert_eq!(
            transfer_continuous(&zero_tau, 100),
            Err(ParameterError::NonPositiveTimeConstant(0.0))
        );
    }
}
