//! Text reports — detailed run report and summary report.
//!
//! Reports are plain data rendered to a `String`; writing them anywhere is
//! the caller's job. Every entry renders as `"  - {name}: {value}"`.

use crate::analysis::AnalysisSummary;
use crate::config::SimulationConfig;
use crate::constants::analysis::{HIGH_STRESS, LOW_STRESS};
use crate::simulation::SimulationResult;

/// A named report entry.
pub type Entry = (String, String);

fn entry(name: &str, value: impl ToString) -> Entry {
    (name.to_string(), value.to_string())
}

fn push_section(lines: &mut Vec<String>, title: &str, entries: &[Entry]) {
    lines.push(format!("{}:", title));
    for (name, value) in entries {
        lines.push(format!("  - {}: {}", name, value));
    }
    lines.push(String::new());
}

/// Insert thousands separators: 1234567 → "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// DETAILED REPORT
// ============================================================================

/// Full report of one run. Missing summary values print as `N/A`.
#[derive(Debug, Clone, Default)]
pub struct DetailedReport {
    pub time_period: Option<String>,
    pub initial_population: Option<u64>,
    pub final_population: Option<u64>,
    pub environmental_conditions: Vec<Entry>,
    pub key_metrics: Vec<Entry>,
    pub stress_analysis: Vec<Entry>,
}

impl DetailedReport {
    pub fn from_run(
        config: &SimulationConfig,
        result: &SimulationResult,
        summary: &AnalysisSummary,
    ) -> Self {
        let steps = &result.steps;
        let mean_stress = if steps.is_empty() {
            0.0
        } else {
            steps.iter().map(|s| s.stress_level).sum::<f64>() / steps.len() as f64
        };
        let high = steps.iter().filter(|s| s.stress_level > HIGH_STRESS).count();
        let low = steps.iter().filter(|s| s.stress_level < LOW_STRESS).count();

        Self {
            time_period: Some(format!("{} steps", steps.len())),
            initial_population: Some(config.initial_population),
            final_population: result.final_population(),
            environmental_conditions: vec![
                entry("stress_threshold", config.stress_threshold),
                entry("stress_series_length", config.stress_series.len()),
                entry("mean_stress_level", format!("{:.3}", mean_stress)),
            ],
            key_metrics: summary
                .metrics()
                .iter()
                .map(|(name, value)| entry(name, value))
                .collect(),
            stress_analysis: vec![
                entry("high_stress_steps", high),
                entry("low_stress_steps", low),
                entry("critical_stress_events", summary.critical_stress_events),
            ],
        }
    }

    pub fn render(&self) -> String {
        let na = || "N/A".to_string();
        let mut lines = vec![
            "SAR11 Survival Analysis Report".to_string(),
            "=".repeat(40),
            String::new(),
        ];

        push_section(
            &mut lines,
            "Simulation Summary",
            &[
                entry("Time period", self.time_period.clone().unwrap_or_else(na)),
                entry(
                    "Initial population",
                    self.initial_population.map_or_else(na, |p| p.to_string()),
                ),
                entry(
                    "Final population",
                    self.final_population.map_or_else(na, |p| p.to_string()),
                ),
            ],
        );
        push_section(
            &mut lines,
            "Environmental Conditions",
            &self.environmental_conditions,
        );
        push_section(&mut lines, "Key Metrics", &self.key_metrics);
        push_section(&mut lines, "Stress Analysis", &self.stress_analysis);

        lines.join("\n")
    }
}

// ============================================================================
// SUMMARY REPORT
// ============================================================================

/// Short report; empty sections are omitted.
#[derive(Debug, Clone, Default)]
pub struct SummaryReport {
    pub population_data: Vec<u64>,
    pub critical_thresholds: Vec<Entry>,
    pub risk_assessment: Vec<Entry>,
    pub recommendations: Vec<String>,
}

/// Qualitative level for a fraction in [0, 1].
fn risk_level(fraction: f64) -> &'static str {
    if fraction > 0.5 {
        "high"
    } else if fraction > 0.2 {
        "moderate"
    } else {
        "low"
    }
}

impl SummaryReport {
    pub fn from_run(
        config: &SimulationConfig,
        result: &SimulationResult,
        summary: &AnalysisSummary,
    ) -> Self {
        let population_data = result.populations();
        let steps = result.len().max(1) as f64;
        let stressed = result
            .steps
            .iter()
            .filter(|s| s.stress_level > config.stress_threshold)
            .count() as f64;
        let exposure = risk_level(stressed / steps);

        let trend = match (result.first_population(), result.final_population()) {
            (Some(first), Some(last)) if last > first => "growing",
            (Some(first), Some(last)) if last < first => "declining",
            _ => "stable",
        };

        let mut recommendations = Vec::new();
        if exposure != "low" {
            recommendations.push(format!(
                "Track replication-without-division during the {} high-stress windows",
                summary.critical_stress_events
            ));
        }
        if trend == "declining" {
            recommendations.push("Investigate conditions driving population decline".to_string());
        }
        if summary.min_population == 0 && !result.is_empty() {
            recommendations.push("Population collapsed; review stress inputs".to_string());
        }

        Self {
            population_data,
            critical_thresholds: vec![
                entry("stress_threshold", config.stress_threshold),
                entry("high_stress_cutoff", HIGH_STRESS),
                entry("low_stress_cutoff", LOW_STRESS),
            ],
            risk_assessment: vec![
                entry("stress_exposure", exposure),
                entry("population_trend", trend),
            ],
            recommendations,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "SAR11 Survival Analyzer - Summary Report".to_string(),
            "=".repeat(50),
            String::new(),
        ];

        if let (Some(&initial), Some(&last)) =
            (self.population_data.first(), self.population_data.last())
        {
            let change = if initial != 0 {
                (last as f64 - initial as f64) / initial as f64 * 100.0
            } else {
                0.0
            };
            push_section(
                &mut lines,
                "Population Dynamics",
                &[
                    entry("Initial population", group_thousands(initial)),
                    entry("Final population", group_thousands(last)),
                    entry("Population change", format!("{:.2}%", change)),
                ],
            );
        }

        if !self.critical_thresholds.is_empty() {
            push_section(&mut lines, "Critical Thresholds", &self.critical_thresholds);
        }
        if !self.risk_assessment.is_empty() {
            push_section(&mut lines, "Risk Assessment", &self.risk_assessment);
        }
        if !self.recommendations.is_empty() {
            lines.push("Recommendations:".to_string());
            for rec in &self.recommendations {
                lines.push(format!("  - {}", rec));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::simulation::run_simulation;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(865_034_223), "865,034,223");
    }

    #[test]
    fn test_detailed_report_empty_uses_na() {
        let text = DetailedReport::default().render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SAR11 Survival Analysis Report");
        assert_eq!(lines[1], "=".repeat(40));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Simulation Summary:");
        assert_eq!(lines[4], "  - Time period: N/A");
        assert_eq!(lines[5], "  - Initial population: N/A");
        assert_eq!(lines[6], "  - Final population: N/A");
        assert!(text.contains("Environmental Conditions:\n\nKey Metrics:\n\nStress Analysis:\n"));
    }

    #[test]
    fn test_detailed_report_from_run() {
        let config = SimulationConfig::default();
        let result = run_simulation(1000, None, 100);
        let summary = analyze(&result);
        let text = DetailedReport::from_run(&config, &result, &summary).render();

        assert!(text.contains("  - Time period: 100 steps"));
        assert!(text.contains("  - Initial population: 1000"));
        assert!(text.contains("  - Final population: 865034223"));
        assert!(text.contains("  - critical_stress_events: 1"));
        assert!(text.contains("  - max_population: 865034223"));
        assert!(text.contains("  - high_stress_steps: 40"));
        assert!(text.contains("  - low_stress_steps: 20"));
        assert!(text.contains("  - mean_stress_level: 0.400"));
    }

    #[test]
    fn test_summary_report_population_section() {
        let report = SummaryReport {
            population_data: vec![1000, 1500, 2500],
            ..Default::default()
        };
        let text = report.render();
        assert!(text.starts_with("SAR11 Survival Analyzer - Summary Report\n"));
        assert!(text.contains("  - Initial population: 1,000"));
        assert!(text.contains("  - Final population: 2,500"));
        assert!(text.contains("  - Population change: 150.00%"));
        assert!(!text.contains("Critical Thresholds"));
        assert!(!text.contains("Recommendations"));
    }

    #[test]
    fn test_summary_report_zero_initial() {
        let report = SummaryReport {
            population_data: vec![0, 0],
            ..Default::default()
        };
        assert!(report.render().contains("  - Population change: 0.00%"));
    }

    #[test]
    fn test_summary_report_empty_sections_omitted() {
        let text = SummaryReport::default().render();
        assert_eq!(
            text,
            format!(
                "SAR11 Survival Analyzer - Summary Report\n{}\n",
                "=".repeat(50)
            )
        );
    }

    #[test]
    fn test_summary_report_from_run() {
        let config = SimulationConfig::default();
        let result = run_simulation(1000, None, 100);
        let summary = analyze(&result);
        let report = SummaryReport::from_run(&config, &result, &summary);

        assert_eq!(report.population_data.len(), 100);
        // 40 of 100 steps above threshold
        assert!(report
            .risk_assessment
            .contains(&entry("stress_exposure", "moderate")));
        assert!(report
            .risk_assessment
            .contains(&entry("population_trend", "growing")));
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.render().contains("Recommendations:\n  - Track"));
    }
}
