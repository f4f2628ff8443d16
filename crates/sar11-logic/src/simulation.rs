//! Batch simulation driver.
//!
//! Advances one [`PopulationState`] across a stress series with a fixed time
//! step of 1.0 and records one [`SimulationStep`] per step. Deterministic:
//! identical inputs always give identical output.

use serde::{Deserialize, Serialize};

use crate::config::{SimulationConfig, StressSeries};
use crate::constants::growth::DRIVER_TIME_STEP;
use crate::population::PopulationState;

/// One simulated step, as seen by analysis and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationStep {
    pub time: u32,
    pub population: u64,
    pub stress_level: f64,
}

/// Time-ordered output of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub steps: Vec<SimulationStep>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first_population(&self) -> Option<u64> {
        self.steps.first().map(|s| s.population)
    }

    pub fn final_population(&self) -> Option<u64> {
        self.steps.last().map(|s| s.population)
    }

    /// Population column, in time order.
    pub fn populations(&self) -> Vec<u64> {
        self.steps.iter().map(|s| s.population).collect()
    }
}

/// Runs simulations from a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct SimulationDriver {
    config: SimulationConfig,
}

impl SimulationDriver {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate `step_count` steps from `initial_population`.
    ///
    /// `None` uses the configured stress series. Steps past the end of the
    /// series reuse its last level.
    pub fn run(
        &self,
        initial_population: u64,
        stress_series: Option<&StressSeries>,
        step_count: u32,
    ) -> SimulationResult {
        let series = stress_series.unwrap_or(&self.config.stress_series);
        let mut state = PopulationState::new(initial_population, self.config.stress_threshold);
        let mut steps = Vec::with_capacity(step_count as usize);

        for i in 0..step_count {
            let stress_level = series.level_at(i as usize);
            let population = state.update(stress_level, DRIVER_TIME_STEP);
            log::debug!(
                "step {}: stress={} population={}",
                i,
                stress_level,
                population
            );
            steps.push(SimulationStep {
                time: i,
                population,
                stress_level,
            });
        }

        log::info!(
            "simulated {} steps: {} -> {}",
            step_count,
            initial_population,
            state.population()
        );
        SimulationResult { steps }
    }

    /// Simulate with every parameter taken from the configuration.
    pub fn run_config(&self) -> SimulationResult {
        self.run(self.config.initial_population, None, self.config.steps)
    }
}

/// Run with the default configuration (threshold 0.5, three-phase pattern).
pub fn run_simulation(
    initial_population: u64,
    stress_series: Option<&StressSeries>,
    step_count: u32,
) -> SimulationResult {
    SimulationDriver::default().run(initial_population, stress_series, step_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_length_and_times() {
        let result = run_simulation(1000, None, 100);
        assert_eq!(result.len(), 100);
        for (i, step) in result.steps.iter().enumerate() {
            assert_eq!(step.time, i as u32);
        }
    }

    #[test]
    fn test_default_run_uses_three_phases() {
        let result = run_simulation(1000, None, 100);
        assert_eq!(result.steps[0].stress_level, 0.2);
        assert_eq!(result.steps[20].stress_level, 0.6);
        assert_eq!(result.steps[60].stress_level, 0.3);
    }

    #[test]
    fn test_first_steps_match_update_rule() {
        let result = run_simulation(1000, None, 3);
        // unstressed: +10% each step, truncated
        assert_eq!(result.populations(), vec![1100, 1210, 1331]);
    }

    #[test]
    fn test_deterministic() {
        let a = run_simulation(1000, None, 100);
        let b = run_simulation(1000, None, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_series_holds_last_level() {
        let series = StressSeries::new(vec![0.2, 0.7]).unwrap();
        let result = run_simulation(100, Some(&series), 5);
        let levels: Vec<f64> = result.steps.iter().map(|s| s.stress_level).collect();
        assert_eq!(levels, vec![0.2, 0.7, 0.7, 0.7, 0.7]);
    }

    #[test]
    fn test_longer_default_run_pads() {
        let result = run_simulation(10, None, 120);
        assert_eq!(result.len(), 120);
        assert!(result.steps[100..].iter().all(|s| s.stress_level == 0.3));
    }

    #[test]
    fn test_zero_steps() {
        let result = run_simulation(1000, None, 0);
        assert!(result.is_empty());
        assert_eq!(result.final_population(), None);
    }

    #[test]
    fn test_config_threshold_used() {
        let config = SimulationConfig {
            stress_threshold: 0.9,
            ..SimulationConfig::default()
        };
        let driver = SimulationDriver::new(config);
        let series = StressSeries::constant(0.6);
        // 0.6 is below 0.9, so growth stays at 10%
        let result = driver.run(1000, Some(&series), 1);
        assert_eq!(result.final_population(), Some(1100));
    }

    #[test]
    fn test_run_config() {
        let config = SimulationConfig {
            initial_population: 500,
            steps: 10,
            stress_series: StressSeries::constant(0.0),
            ..SimulationConfig::default()
        };
        let result = SimulationDriver::new(config.clone()).run_config();
        assert_eq!(result.len(), 10);
        assert_eq!(
            result,
            SimulationDriver::default().run(500, Some(&config.stress_series), 10)
        );
    }
}
