//! Demo settings: the slider factors that parameterize one comparison.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::ranges::{self, OMEGA_FACTOR, TAU, T_FACTOR};

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Setting `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Slider factors for one discrete system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemFactors {
    /// Bandwidth factor: `omega_l = omega_factor / tau`
    pub omega_factor: u32,

    /// Sample period factor: `T = t_factor * pi / omega_l`
    pub t_factor: f64,

    /// Number of samples
    pub n: usize,
}

impl Default for SystemFactors {
    fn default() -> Self {
        Self {
            omega_factor: 10,
            t_factor: 0.1,
            n: 100,
        }
    }
}

/// Field names reported by `SettingsError::OutOfRange` for one system
struct FactorFields {
    omega_factor: &'static str,
    t_factor: &'static str,
    n: &'static str,
}

const SYSTEM_FIELDS: [FactorFields; 2] = [
    FactorFields {
        omega_factor: "systems[0].omega_factor",
        t_factor: "systems[0].t_factor",
        n: "systems[0].n",
    },
    FactorFields {
        omega_factor: "systems[1].omega_factor",
        t_factor: "systems[1].t_factor",
        n: "systems[1].n",
    },
];

impl SystemFactors {
    pub fn new(omega_factor: u32, t_factor: f64, n: usize) -> Self {
        Self {
            omega_factor,
            t_factor,
            n,
        }
    }

    fn validate(&self, fields: &FactorFields) -> Result<(), SettingsError> {
        if !OMEGA_FACTOR.contains(self.omega_factor) {
            return Err(SettingsError::OutOfRange {
                field: fields.omega_factor,
                value: self.omega_factor as f64,
            });
        }
        if !T_FACTOR.contains(self.t_factor) {
            return Err(SettingsError::OutOfRange {
                field: fields.t_factor,
                value: self.t_factor,
            });
        }
        if !ranges::is_sample_count(self.n) {
            return Err(SettingsError::OutOfRange {
                field: fields.n,
                value: self.n as f64,
            });
        }
        Ok(())
    }

    fn clamped(&self) -> Self {
        Self {
            omega_factor: OMEGA_FACTOR.snap(self.omega_factor),
            t_factor: T_FACTOR.snap(self.t_factor),
            n: ranges::nearest_sample_count(self.n),
        }
    }
}

/// All parameters of one comparison run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Time constant shared by all three systems
    pub tau: f64,

    /// Discrete systems 1 and 2
    pub systems: [SystemFactors; 2],
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            tau: 1.0,
            systems: [
                SystemFactors::new(10, 0.1, 100),
                SystemFactors::new(5, 0.1, 1_000),
            ],
        }
    }
}

impl DemoSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check every value against the documented slider ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !TAU.contains(self.tau) {
            return Err(SettingsError::OutOfRange {
                field: "tau",
                value: self.tau,
            });
        }
        for (system, fields) in self.systems.iter().zip(&SYSTEM_FIELDS) {
            system.validate(fields)?;
        }
        Ok(())
    }

    /// Snap every value onto the nearest slider position
    pub fn clamped(&self) -> Self {
        Self {
            tau: TAU.snap(self.tau),
            systems: [self.systems[0].clamped(), self.systems[1].clamped()],
        }
    }
}
