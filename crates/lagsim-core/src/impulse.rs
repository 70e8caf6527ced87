//! Impulse response generator
//!
//! The continuous response is evaluated in closed form,
//!
//! ```text
//! h(t) = −(1/τ)·e^(−t/τ)
//! ```
//!
//! while each discrete response is recovered from its sampled transfer function
//! with an inverse FFT.

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::{check_resolution, check_sample_period, is_positive, ParameterError};
use crate::system::ContinuousSystem;
use crate::transfer::FrequencyResponse;
use crate::utils::linspace;

/// Ordered `(t, h(t))` samples
#[derive(Debug, Clone, PartialEq)]
pub struct TimeResponse {
    /// Sample instants [s]
    pub time: Vec<f64>,
    /// Impulse response amplitude
    pub values: Vec<f64>,
}

impl TimeResponse {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.values.iter().copied())
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(|(t, h)| [t, h]).collect()
    }
}

/// Closed-form impulse response on `resolution` points over `[0, t_max]`
pub fn impulse_continuous(
    system: &ContinuousSystem,
    t_max: f64,
    resolution: usize,
) -> Result<TimeResponse, ParameterError> {
    let tau = system.validate()?.tau();
    let resolution = check_resolution(resolution)?;
    if !is_positive(t_max) {
        return Err(ParameterError::NonPositiveDuration(t_max));
    }

    let time = linspace(0.0, t_max, resolution);
    let values = time.iter().map(|&t| -(-t / tau).exp() / tau).collect();

    Ok(TimeResponse { time, values })
}

/// Scale applied to the raw inverse FFT output.
///
/// The physical response is `Re(ifft(H)) · 2/t` where `ifft` carries the `1/n`
/// normalization. rustfft's inverse transform is unnormalized, so the `1/n` is
/// folded in here.
#[inline]
pub fn inverse_scale(t: f64, n: usize) -> f64 {
    2.0 / (t * n as f64)
}

/// Discrete impulse response: real part of the inverse FFT of `response`,
/// scaled by [`inverse_scale`], stamped at `k * t`.
///
/// No conjugate-symmetry check is performed on the input. The imaginary part of
/// the inverse transform is dropped; its largest magnitude is logged at debug level.
pub fn impulse_discrete(
    response: &FrequencyResponse,
    t: f64,
) -> Result<TimeResponse, ParameterError> {
    let t = check_sample_period(t)?;
    if response.is_empty() {
        return Err(ParameterError::EmptyResponse);
    }

    let n = response.len();
    let mut buffer: Vec<Complex64> = response.values.clone();

    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut buffer);

    let scale = inverse_scale(t, n);
    let residual = buffer.iter().map(|c| c.im.abs()).fold(0.0, f64::max) * scale;
    log::debug!("inverse FFT over {} samples, max discarded imaginary part {:.3e}", n, residual);

    let values = buffer.iter().map(|c| c.re * scale).collect();
    let time = (0..n).map(|k| k as f64 * t).collect();

    Ok(TimeResponse { time, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::DiscreteSystem;
    use crate::transfer::transfer_discrete;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_continuous_initial_value() {
        let system = ContinuousSystem::new(0.5).unwrap();
        let h = impulse_continuous(&system, 2.0, 101).unwrap();

        assert_eq!(h.len(), 101);
        assert_abs_diff_eq!(h.values[0], -2.0, epsilon = 1e-15);
        assert_eq!(h.time[0], 0.0);
        assert_eq!(h.time[100], 2.0);
    }

    #[test]
    fn test_continuous_rejects_bad_axis() {
        let system = ContinuousSystem::new(1.0).unwrap();
        assert_eq!(
            impulse_continuous(&system, 0.0, 100),
            Err(ParameterError::NonPositiveDuration(0.0))
        );
        assert_eq!(
            impulse_continuous(&system, 1.0, 0),
            Err(ParameterError::ResolutionTooSmall(0))
        );

        // A negative tau would give a growing positive response
        let unstable = ContinuousSystem { tau: -1.0 };
        assert_eq!(
            impulse_continuous(&unstable, 1.0, 3),
            Err(ParameterError::NonPositiveTimeConstant(-1.0))
        );
    }

    #[test]
    fn test_single_sample() {
        // One DC sample: ifft is the identity, so h = Re(H0) * 2/t
        let response = FrequencyResponse {
            omega: vec![0.0],
            values: vec![Complex64::new(-1.0, 0.0)],
        };
        let h = impulse_discrete(&response, 0.5).unwrap();
        assert_eq!(h.len(), 1);
        assert_abs_diff_eq!(h.values[0], -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_direct_sum() {
        // Reference: (1/n) Σ_k H_k e^{+j2πkm/n}, real part, times 2/t
        let system = DiscreteSystem::new(1.0, 10.0, 0.05, 16).unwrap();
        let response = transfer_discrete(&system).unwrap();
        let h = impulse_discrete(&response, system.t()).unwrap();

        let n = response.len();
        for m in 0..n {
            let sum: Complex64 = response
                .values
                .iter()
                .enumerate()
                .map(|(k, hk)| {
                    let phase = 2.0 * std::f64::consts::PI * (k * m) as f64 / n as f64;
                    hk * Complex64::from_polar(1.0, phase)
                })
                .sum();
            let expected = sum.re / n as f64 * 2.0 / system.t();
            assert_abs_diff_eq!(h.values[m], expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_discrete_time_stamps() {
        let system = DiscreteSystem::new(1.0, 10.0, 0.25, 4).unwrap();
        let response = transfer_discrete(&system).unwrap();
        let h = impulse_discrete(&response, system.t()).unwrap();
        assert_eq!(h.time, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_discrete_rejects_bad_input() {
        let empty = FrequencyResponse {
            omega: Vec::new(),
            values: Vec::new(),
        };
        assert_eq!(impulse_discrete(&empty, 0.1), Err(ParameterError::EmptyResponse));

        let response = FrequencyResponse {
            omega: vec![0.0],
            values: vec![Complex64::new(-1.0, 0.0)],
        };
        assert_eq!(
            impulse_discrete(&response, 0.0),
            Err(ParameterError::NonPositiveSamplePeriod(0.0))
        );
    }
}
