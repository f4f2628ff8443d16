//! Simulation configuration — stress series, threshold, step count.
//!
//! The default three-phase stress pattern is an explicit configuration
//! value rather than a fallback buried inside the driver. Validation runs
//! at the boundary and never inside the update rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::default_pattern::*;
use crate::constants::growth::{
    DEFAULT_INITIAL_POPULATION, DEFAULT_STEPS, DEFAULT_STRESS_THRESHOLD,
};

/// Ordered per-step stress levels, never empty.
///
/// Lookups past the end hold the last level constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StressSeries(Vec<f64>);

impl StressSeries {
    pub fn new(levels: Vec<f64>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::EmptyStressSeries);
        }
        Ok(Self(levels))
    }

    /// A single level held for every step.
    pub fn constant(level: f64) -> Self {
        Self(vec![level])
    }

    /// 20 calm steps at 0.2, 40 stressed at 0.6, 40 recovering at 0.3.
    pub fn default_pattern() -> Self {
        let mut levels = Vec::with_capacity(CALM_STEPS + STRESSED_STEPS + RECOVERY_STEPS);
        levels.extend(std::iter::repeat(CALM_LEVEL).take(CALM_STEPS));
        levels.extend(std::iter::repeat(STRESSED_LEVEL).take(STRESSED_STEPS));
        levels.extend(std::iter::repeat(RECOVERY_LEVEL).take(RECOVERY_STEPS));
        Self(levels)
    }

    /// Stress level at step `index`, padded with the last level.
    pub fn level_at(&self, index: usize) -> f64 {
        match self.0.get(index) {
            Some(&level) => level,
            // Non-empty by construction.
            None => self.0[self.0.len() - 1],
        }
    }

    pub fn levels(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StressSeries {
    fn default() -> Self {
        Self::default_pattern()
    }
}

impl TryFrom<Vec<f64>> for StressSeries {
    type Error = ConfigError;

    fn try_from(levels: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<StressSeries> for Vec<f64> {
    fn from(series: StressSeries) -> Self {
        series.0
    }
}

/// Everything a simulation run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Population at step zero.
    pub initial_population: u64,
    /// Stress level above which growth is suppressed.
    pub stress_threshold: f64,
    /// Number of steps to simulate.
    pub steps: u32,
    /// Per-step stress levels.
    pub stress_series: StressSeries,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_population: DEFAULT_INITIAL_POPULATION,
            stress_threshold: DEFAULT_STRESS_THRESHOLD,
            steps: DEFAULT_STEPS,
            stress_series: StressSeries::default_pattern(),
        }
    }
}

/// Configuration problem found at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Stress series has no levels to hold.
    EmptyStressSeries,
    /// Threshold outside [0, 1].
    ThresholdOutOfRange(f64),
    /// A stress level outside [0, 1].
    StressLevelOutOfRange { index: usize, level: f64 },
    /// Nothing to simulate.
    ZeroSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyStressSeries => write!(f, "stress series is empty"),
            ConfigError::ThresholdOutOfRange(t) => {
                write!(f, "stress threshold {} is outside [0, 1]", t)
            }
            ConfigError::StressLevelOutOfRange { index, level } => {
                write!(f, "stress level {} at step {} is outside [0, 1]", level, index)
            }
            ConfigError::ZeroSteps => write!(f, "step count is zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Validate a configuration, returning all problems found.
///
/// The model itself accepts every value; callers decide whether these are
/// warnings or hard errors.
pub fn validate_config(config: &SimulationConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if !in_unit_range(config.stress_threshold) {
        errors.push(ConfigError::ThresholdOutOfRange(config.stress_threshold));
    }
    for (index, &level) in config.stress_series.levels().iter().enumerate() {
        if !in_unit_range(level) {
            errors.push(ConfigError::StressLevelOutOfRange { index, level });
        }
    }
    if config.steps == 0 {
        errors.push(ConfigError::ZeroSteps);
    }

    if !errors.is_empty() {
        log::warn!("simulation config has {} problem(s)", errors.len());
    }
    errors
}
