//! Stress/growth analysis over a finished simulation.
//!
//! Splits a run into high- and low-stress windows, measures the average net
//! population change per record in each, counts rising-edge crossings into
//! high stress, and reports the population extrema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::analysis::{CRITICAL_CROSSING, HIGH_STRESS, LOW_STRESS};
use crate::simulation::{SimulationResult, SimulationStep};

/// Derived metrics of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Net population change per record while stress > 0.5.
    pub high_stress_growth_rate: f64,
    /// Net population change per record while stress < 0.3.
    pub low_stress_growth_rate: f64,
    /// Rising-edge crossings above 0.5.
    pub critical_stress_events: u32,
    pub max_population: u64,
    pub min_population: u64,
}

/// A metric value as rendered in reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(u64),
    Rate(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            // Integral rates keep a trailing ".0" so they read as rates.
            MetricValue::Rate(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 => {
                write!(f, "{:.1}", r)
            }
            MetricValue::Rate(r) => write!(f, "{}", r),
        }
    }
}

impl AnalysisSummary {
    /// Named metrics in report order.
    pub fn metrics(&self) -> [(&'static str, MetricValue); 5] {
        [
            (
                "high_stress_growth_rate",
                MetricValue::Rate(self.high_stress_growth_rate),
            ),
            (
                "low_stress_growth_rate",
                MetricValue::Rate(self.low_stress_growth_rate),
            ),
            (
                "critical_stress_events",
                MetricValue::Count(self.critical_stress_events as u64),
            ),
            ("max_population", MetricValue::Count(self.max_population)),
            ("min_population", MetricValue::Count(self.min_population)),
        ]
    }
}

/// Average net change per record, not per unit time. Empty windows give 0.
fn window_growth<'a>(window: impl Iterator<Item = &'a SimulationStep>) -> f64 {
    let mut count = 0usize;
    let mut first = None;
    let mut last = None;
    for step in window {
        count += 1;
        if first.is_none() {
            first = Some(step.population);
        }
        last = Some(step.population);
    }
    match (first, last) {
        (Some(first), Some(last)) => (last as f64 - first as f64) / count as f64,
        _ => 0.0,
    }
}

/// Indices where stress rises above the crossing level from at or below it.
/// The first record has no predecessor and never counts.
pub fn critical_crossings(steps: &[SimulationStep]) -> Vec<usize> {
    steps
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| {
            pair[1].stress_level > CRITICAL_CROSSING && pair[0].stress_level <= CRITICAL_CROSSING
        })
        .map(|(i, _)| i + 1)
        .collect()
}

/// Analyze a completed run. An empty run yields all zeros.
pub fn analyze(result: &SimulationResult) -> AnalysisSummary {
    let steps = &result.steps;

    let high_stress_growth_rate =
        window_growth(steps.iter().filter(|s| s.stress_level > HIGH_STRESS));
    let low_stress_growth_rate =
        window_growth(steps.iter().filter(|s| s.stress_level < LOW_STRESS));

    let critical_stress_events = critical_crossings(steps).len() as u32;

    let max_population = steps.iter().map(|s| s.population).max().unwrap_or(0);
    let min_population = steps.iter().map(|s| s.population).min().unwrap_or(0);

    AnalysisSummary {
        high_stress_growth_rate,
        low_stress_growth_rate,
        critical_stress_events,
        max_population,
        min_population,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_from(points: &[(u64, f64)]) -> SimulationResult {
        SimulationResult {
            steps: points
                .iter()
                .enumerate()
                .map(|(i, &(population, stress_level))| SimulationStep {
                    time: i as u32,
                    population,
                    stress_level,
                })
                .collect(),
        }
    }

    #[test]
    fn test_rising_edges_counted() {
        let result = result_from(&[(10, 0.2), (13, 0.6), (15, 0.6), (16, 0.3), (19, 0.7)]);
        assert_eq!(critical_crossings(&result.steps), vec![1, 4]);
        assert_eq!(analyze(&result).critical_stress_events, 2);
    }

    #[test]
    fn test_first_record_never_counts() {
        let result = result_from(&[(10, 0.9), (10, 0.9), (10, 0.4), (10, 0.5), (10, 0.51)]);
        assert_eq!(critical_crossings(&result.steps), vec![4]);
    }

    #[test]
    fn test_all_low_stress() {
        let result = result_from(&[(100, 0.1), (120, 0.2), (150, 0.29)]);
        let summary = analyze(&result);
        assert_eq!(summary.high_stress_growth_rate, 0.0);
        assert_eq!(summary.critical_stress_events, 0);
        // (150 - 100) / 3
        assert!((summary.low_stress_growth_rate - 50.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_growth_divides_by_record_count() {
        // high: 200 → 260 over 4 records = 15; mid-band 0.4 belongs to neither window
        let result = result_from(&[(200, 0.6), (210, 0.4), (230, 0.8), (260, 0.9)]);
        let summary = analyze(&result);
        assert_eq!(summary.high_stress_growth_rate, 20.0);

        let result = result_from(&[(200, 0.6), (220, 0.7), (240, 0.8), (260, 0.9)]);
        assert_eq!(analyze(&result).high_stress_growth_rate, 15.0);
    }

    #[test]
    fn test_negative_growth() {
        let result = result_from(&[(100, 0.1), (40, 0.1)]);
        assert_eq!(analyze(&result).low_stress_growth_rate, -30.0);
    }

    #[test]
    fn test_boundaries_excluded() {
        // 0.5 is not high, 0.3 is not low
        let result = result_from(&[(1, 0.5), (5, 0.3), (9, 0.5)]);
        let summary = analyze(&result);
        assert_eq!(summary.high_stress_growth_rate, 0.0);
        assert_eq!(summary.low_stress_growth_rate, 0.0);
    }

    #[test]
    fn test_extrema() {
        let result = result_from(&[(50, 0.1), (5, 0.9), (500, 0.2)]);
        let summary = analyze(&result);
        assert_eq!(summary.max_population, 500);
        assert_eq!(summary.min_population, 5);
    }

    #[test]
    fn test_empty_result() {
        let summary = analyze(&SimulationResult::default());
        assert_eq!(summary.max_population, 0);
        assert_eq!(summary.min_population, 0);
        assert_eq!(summary.critical_stress_events, 0);
        assert_eq!(summary.high_stress_growth_rate, 0.0);
    }

    #[test]
    fn test_metric_rendering() {
        let summary = AnalysisSummary {
            high_stress_growth_rate: 22.5,
            low_stress_growth_rate: 0.0,
            critical_stress_events: 2,
            max_population: 1220,
            min_population: 1000,
        };
        let rendered: Vec<String> = summary
            .metrics()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "high_stress_growth_rate: 22.5",
                "low_stress_growth_rate: 0.0",
                "critical_stress_events: 2",
                "max_population: 1220",
                "min_population: 1000",
            ]
        );
    }

    #[test]
    fn test_integral_rates_render_as_floats() {
        assert_eq!(MetricValue::Rate(20.0).to_string(), "20.0");
        assert_eq!(MetricValue::Rate(-30.0).to_string(), "-30.0");
        assert_eq!(MetricValue::Rate(280.75).to_string(), "280.75");
        assert_eq!(MetricValue::Count(20).to_string(), "20");

        let result = result_from(&[(200, 0.6), (220, 0.7), (240, 0.8), (260, 0.9)]);
        let summary = analyze(&result);
        let (name, value) = summary.metrics()[0];
        assert_eq!(format!("{}: {}", name, value), "high_stress_growth_rate: 15.0");
    }
}
