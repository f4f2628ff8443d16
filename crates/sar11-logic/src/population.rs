//! Population state and the per-step update rule.
//!
//! Each step applies a fixed base growth rate. Above the stress threshold,
//! growth is suppressed linearly by stress intensity while cells replicate
//! DNA without dividing, which adds a term proportional to stress.

use serde::{Deserialize, Serialize};

use crate::constants::growth::{BASE_GROWTH_RATE, REPLICATION_COEFFICIENT};

/// One recorded update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The `time_step` passed to the update that produced this record.
    pub time: f64,
    /// Population after the update.
    pub population: u64,
    /// Stress level the update was evaluated at.
    pub stress_level: f64,
}

/// Population of a single simulation run.
#[derive(Debug, Clone)]
pub struct PopulationState {
    population: u64,
    stress_threshold: f64,
    history: Vec<StepRecord>,
}

impl PopulationState {
    pub fn new(initial_population: u64, stress_threshold: f64) -> Self {
        Self {
            population: initial_population,
            stress_threshold,
            history: Vec::new(),
        }
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn stress_threshold(&self) -> f64 {
        self.stress_threshold
    }

    /// Every update so far, oldest first.
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Advance the population by one step and return the new count.
    ///
    /// Inputs are not range-checked. The fractional part of the change is
    /// truncated toward zero, so small populations with sub-unit growth do
    /// not move. The result is clamped at zero.
    pub fn update(&mut self, stress_level: f64, time_step: f64) -> u64 {
        let (effective_growth, replication_factor) = step_rates(stress_level, self.stress_threshold);

        let current = self.population as f64;
        let delta = current * effective_growth * time_step + current * replication_factor * time_step;

        // Float-to-int casts saturate; a runaway population pins at u64::MAX.
        let next = (self.population as i128).saturating_add(delta.trunc() as i128);
        self.population = next.clamp(0, u64::MAX as i128) as u64;

        self.history.push(StepRecord {
            time: time_step,
            population: self.population,
            stress_level,
        });

        self.population
    }
}

/// Effective growth and replication factor for one step.
///
/// The threshold comparison is strict: a stress level equal to the
/// threshold takes the unstressed branch.
pub fn step_rates(stress_level: f64, stress_threshold: f64) -> (f64, f64) {
    if stress_level > stress_threshold {
        (
            BASE_GROWTH_RATE * (1.0 - stress_level),
            REPLICATION_COEFFICIENT * stress_level,
        )
    } else {
        (BASE_GROWTH_RATE, 0.0)
    }
}
