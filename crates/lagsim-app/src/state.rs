//! Application state: pending form values and the last applied comparison.
//!
//! Contains no UI code so it can be tested without a window.

use lagsim::utils::constants::DEFAULT_RESOLUTION;
use lagsim::{Comparison, ParameterError};
use lagsim_types::{DemoSettings, PlotSettings, PlotSpec, SettingsError};
use thiserror::Error;

/// Why a submitted set of parameters was rejected
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Plots derived from one applied comparison
pub struct Plots {
    pub bode: PlotSpec,
    pub impulse: PlotSpec,
}

pub struct AppState {
    /// Values currently shown in the form
    pending: DemoSettings,

    /// Values the plots were computed from
    applied: DemoSettings,

    comparison: Option<Comparison>,
    plots: Option<Plots>,
    last_error: Option<String>,

    /// Points on the continuous grids
    resolution: usize,

    pub plot_settings: PlotSettings,

    /// Set when plots change; the renderer resets its view and clears it
    pub reset_view: bool,

    /// Status line shown in the toolbar
    pub status: Option<String>,
}

impl AppState {
    /// Create state and run the first computation
    pub fn new(settings: DemoSettings) -> Self {
        Self::with_resolution(settings, DEFAULT_RESOLUTION)
    }

    pub fn with_resolution(settings: DemoSettings, resolution: usize) -> Self {
        let mut state = Self {
            pending: settings,
            applied: settings,
            comparison: None,
            plots: None,
            last_error: None,
            resolution,
            plot_settings: PlotSettings::default(),
            reset_view: false,
            status: None,
        };
        if let Err(err) = state.submit() {
            log::warn!("initial settings rejected: {}", err);
        }
        state
    }

    pub fn pending(&self) -> &DemoSettings {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut DemoSettings {
        &mut self.pending
    }

    pub fn applied(&self) -> &DemoSettings {
        &self.applied
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending != self.applied || self.comparison.is_none()
    }

    /// Validate the pending values, recompute everything and publish the result.
    ///
    /// On error the previous plots stay in place.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let result = self.recompute();
        self.last_error = result.as_ref().err().map(|e| e.to_string());
        result
    }

    fn recompute(&mut self) -> Result<(), SubmitError> {
        self.pending.validate()?;
        let comparison = Comparison::compute(&self.pending, self.resolution)?;

        log::info!(
            "applied tau={} systems={:?} (t_max={:.3})",
            self.pending.tau,
            self.pending.systems,
            comparison.t_max()
        );

        self.plots = Some(Plots {
            bode: comparison.bode_plot(),
            impulse: comparison.impulse_plot(),
        });
        self.comparison = Some(comparison);
        self.applied = self.pending;
        self.reset_view = true;
        Ok(())
    }

    /// Drop pending edits
    pub fn revert(&mut self) {
        self.pending = self.applied;
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    pub fn plots(&self) -> Option<&Plots> {
        self.plots.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
