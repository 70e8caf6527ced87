//! One continuous reference against two discretized systems.

use lagsim_types::{colors, DemoSettings, PlotSpec, Series, SystemFactors, TraceStyle};

use crate::error::ParameterError;
use crate::impulse::{impulse_continuous, impulse_discrete, TimeResponse};
use crate::system::{ContinuousSystem, DiscreteSystem};
use crate::transfer::{transfer_continuous, transfer_discrete, FrequencyResponse};

const DISCRETE_COLORS: [[u8; 3]; 2] = [colors::RED, colors::BLUE];

/// A discrete system together with both of its responses
#[derive(Debug, Clone)]
pub struct DiscreteResult {
    pub system: DiscreteSystem,
    pub transfer: FrequencyResponse,
    pub impulse: TimeResponse,
}

/// Result of one full recompute
#[derive(Debug, Clone)]
pub struct Comparison {
    continuous: ContinuousSystem,
    continuous_transfer: FrequencyResponse,
    continuous_impulse: TimeResponse,
    discrete: [DiscreteResult; 2],
    t_max: f64,
}

impl Comparison {
    /// Recompute all three systems from `settings`.
    ///
    /// `resolution` is the number of points on the continuous frequency and time grids.
    pub fn compute(settings: &DemoSettings, resolution: usize) -> Result<Self, ParameterError> {
        let continuous = ContinuousSystem::new(settings.tau)?;
        let continuous_transfer = transfer_continuous(&continuous, resolution)?;

        let systems = [
            discrete_system(settings.tau, &settings.systems[0])?,
            discrete_system(settings.tau, &settings.systems[1])?,
        ];
        for (i, system) in systems.iter().enumerate() {
            log::debug!(
                "system {}: omega_l={:.4} t={:.6} n={} delta_omega={:.6}",
                i + 1,
                system.omega_l(),
                system.t(),
                system.n(),
                system.frequency_spacing()
            );
        }

        let t_max = systems[0].duration().max(systems[1].duration());
        let continuous_impulse = impulse_continuous(&continuous, t_max, resolution)?;

        let [first, second] = systems;
        let discrete = [discrete_result(first)?, discrete_result(second)?];

        Ok(Self {
            continuous,
            continuous_transfer,
            continuous_impulse,
            discrete,
            t_max,
        })
    }

    pub fn continuous(&self) -> &ContinuousSystem {
        &self.continuous
    }

    pub fn continuous_transfer(&self) -> &FrequencyResponse {
        &self.continuous_transfer
    }

    pub fn continuous_impulse(&self) -> &TimeResponse {
        &self.continuous_impulse
    }

    /// Discrete system `index` (0 or 1)
    pub fn discrete(&self, index: usize) -> Option<&DiscreteResult> {
        self.discrete.get(index)
    }

    /// Upper bound of the continuous time axis: the longer of the two sampled durations
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Bode magnitude plot on log-log axes. Discrete traces omit their DC sample.
    pub fn bode_plot(&self) -> PlotSpec {
        let mut spec = PlotSpec::new("Bode Plot", "Frequency [rad/s]", "Magnitude")
            .with_log_axes(true, true);

        spec.push(Series::new(
            "Continuous",
            self.continuous_transfer.magnitude_points(0),
            TraceStyle::line(colors::LIME, 4.0),
        ));
        for (i, result) in self.discrete.iter().enumerate() {
            spec.push(Series::new(
                format!("Discrete {}", i + 1),
                result.transfer.magnitude_points(1),
                TraceStyle::dotted(DISCRETE_COLORS[i]),
            ));
        }

        spec
    }

    /// Impulse response plot, initially zoomed to `[0, tau]`
    pub fn impulse_plot(&self) -> PlotSpec {
        let tau = self.continuous.tau();
        let mut spec = PlotSpec::new("Impulse Response", "Time [s]", "h").with_x_range(0.0, tau);

        spec.push(Series::new(
            "Continuous",
            self.continuous_impulse.points(),
            TraceStyle::line(colors::LIME, 4.0),
        ));
        for (i, result) in self.discrete.iter().enumerate() {
            spec.push(Series::new(
                format!("Discrete {}", i + 1),
                result.impulse.points(),
                TraceStyle::line_with_markers(DISCRETE_COLORS[i], 1.0),
            ));
        }

        spec
    }
}

fn discrete_system(tau: f64, factors: &SystemFactors) -> Result<DiscreteSystem, ParameterError> {
    DiscreteSystem::from_factors(tau, factors.omega_factor, factors.t_factor, factors.n)
}

fn discrete_result(system: DiscreteSystem) -> Result<DiscreteResult, ParameterError> {
    let transfer = transfer_discrete(&system)?;
    let impulse = impulse_discrete(&transfer, system.t())?;
    Ok(DiscreteResult {
        system,
        transfer,
        impulse,
    })
}
