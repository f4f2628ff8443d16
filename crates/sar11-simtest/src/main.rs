//! SAR11 Headless Simulation Harness
//!
//! Validates the population model, driver, analyzer, stressors and report
//! output against known values and the bundled scenario file.
//! Runs entirely in-process — no files written, no plotting.
//!
//! Usage:
//!   cargo run -p sar11-simtest
//!   cargo run -p sar11-simtest -- --verbose

use sar11_logic::analysis::{analyze, critical_crossings};
use sar11_logic::config::{validate_config, ConfigError, SimulationConfig, StressSeries};
use sar11_logic::decay;
use sar11_logic::export::to_csv;
use sar11_logic::population::{step_rates, PopulationState};
use sar11_logic::report::{DetailedReport, SummaryReport};
use sar11_logic::simulation::{run_simulation, SimulationDriver};
use sar11_logic::stress::{ModelState, StressorKind};
use serde::Deserialize;

// ── Scenario file (expected outcomes per stress pattern) ────────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/stress_scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    initial_population: u64,
    steps: u32,
    stress_series: Option<StressSeries>,
    expected_final_population: u64,
    expected_critical_events: u32,
    expected_min_population: u64,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== SAR11 Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Update rule worked examples
    results.extend(validate_update_rule(verbose));

    // 2. Driver behavior
    results.extend(validate_driver(verbose));

    // 3. Analyzer
    results.extend(validate_analyzer(verbose));

    // 4. Scenario file
    results.extend(validate_scenarios(verbose));

    // 5. Stressors
    results.extend(validate_stressors(verbose));

    // 6. Config, reports, export
    results.extend(validate_outputs(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Update Rule ──────────────────────────────────────────────────────

fn validate_update_rule(_verbose: bool) -> Vec<TestResult> {
    println!("--- Update Rule ---");
    let mut results = Vec::new();

    let mut stressed = PopulationState::new(1000, 0.5);
    let pop = stressed.update(0.6, 1.0);
    results.push(TestResult {
        name: "update_stressed_example".into(),
        passed: pop == 1220,
        detail: format!("1000 @ stress 0.6 → {} (expected 1220)", pop),
    });

    let mut calm = PopulationState::new(1000, 0.5);
    let pop = calm.update(0.4, 1.0);
    results.push(TestResult {
        name: "update_calm_example".into(),
        passed: pop == 1100,
        detail: format!("1000 @ stress 0.4 → {} (expected 1100)", pop),
    });

    let (growth, replication) = step_rates(0.5, 0.5);
    results.push(TestResult {
        name: "update_threshold_strict".into(),
        passed: growth == 0.1 && replication == 0.0,
        detail: format!(
            "stress == threshold → growth={} replication={}",
            growth, replication
        ),
    });

    // Sweep: no input combination drives population below zero or skips history
    let mut history_ok = true;
    let mut collapsed = 0;
    for &population in &[0u64, 1, 7, 1000, 1_000_000] {
        for &stress in &[0.0, 0.3, 0.5, 0.51, 0.9, 1.0, 1.5] {
            for &dt in &[0.0, 0.5, 1.0, -3.0, -50.0] {
                let mut state = PopulationState::new(population, 0.5);
                if state.update(stress, dt) == 0 {
                    collapsed += 1;
                }
                history_ok &= state.history().len() == 1;
            }
        }
    }
    results.push(TestResult {
        name: "update_history_every_call".into(),
        passed: history_ok,
        detail: format!("175 updates recorded, {} clamped to zero", collapsed),
    });

    let mut small = PopulationState::new(9, 0.5);
    let pop = small.update(0.0, 1.0);
    results.push(TestResult {
        name: "update_truncates_fraction".into(),
        passed: pop == 9,
        detail: format!("9 @ +10% → {} (0.9 truncated)", pop),
    });

    results
}

// ── 2. Driver ───────────────────────────────────────────────────────────

fn validate_driver(verbose: bool) -> Vec<TestResult> {
    println!("--- Simulation Driver ---");
    let mut results = Vec::new();

    let a = run_simulation(1000, None, 100);
    let b = run_simulation(1000, None, 100);
    results.push(TestResult {
        name: "driver_deterministic".into(),
        passed: a == b,
        detail: "two default runs are identical".into(),
    });

    results.push(TestResult {
        name: "driver_step_count".into(),
        passed: a.len() == 100 && a.steps.iter().enumerate().all(|(i, s)| s.time == i as u32),
        detail: format!("{} steps, times 0..100", a.len()),
    });

    let padded = run_simulation(1000, None, 130);
    let tail_ok = padded.steps[100..].iter().all(|s| s.stress_level == 0.3);
    results.push(TestResult {
        name: "driver_pads_with_last_level".into(),
        passed: padded.len() == 130 && tail_ok,
        detail: "steps 100..130 reuse stress 0.3".into(),
    });

    let empty = run_simulation(1000, None, 0);
    results.push(TestResult {
        name: "driver_zero_steps".into(),
        passed: empty.is_empty(),
        detail: "0 steps → empty result".into(),
    });

    if verbose {
        println!("  Default run, every 10th step:");
        for step in a.steps.iter().step_by(10) {
            println!(
                "    t={:3} stress={:.1} population={}",
                step.time, step.stress_level, step.population
            );
        }
    }

    results
}

// ── 3. Analyzer ─────────────────────────────────────────────────────────

fn validate_analyzer(_verbose: bool) -> Vec<TestResult> {
    println!("--- Behavior Analyzer ---");
    let mut results = Vec::new();

    let series = StressSeries::new(vec![0.2, 0.6, 0.6, 0.3, 0.7]).expect("non-empty");
    let result = run_simulation(10, Some(&series), 5);
    let crossings = critical_crossings(&result.steps);
    results.push(TestResult {
        name: "analyzer_rising_edges".into(),
        passed: crossings == vec![1, 4],
        detail: format!("crossings at {:?} (expected [1, 4])", crossings),
    });

    let calm = analyze(&run_simulation(1000, Some(&StressSeries::constant(0.1)), 25));
    results.push(TestResult {
        name: "analyzer_all_low_stress".into(),
        passed: calm.high_stress_growth_rate == 0.0 && calm.critical_stress_events == 0,
        detail: format!(
            "high_growth={} events={}",
            calm.high_stress_growth_rate, calm.critical_stress_events
        ),
    });

    let summary = analyze(&run_simulation(1000, None, 100));
    results.push(TestResult {
        name: "analyzer_default_run".into(),
        passed: summary.high_stress_growth_rate == 477_617.025
            && summary.low_stress_growth_rate == 280.75
            && summary.critical_stress_events == 1,
        detail: format!(
            "high={} low={} events={}",
            summary.high_stress_growth_rate,
            summary.low_stress_growth_rate,
            summary.critical_stress_events
        ),
    });

    results
}

// ── 4. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Scenario File ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "scenarios_not_empty".into(),
        passed: !scenarios.is_empty(),
        detail: format!("{} scenarios loaded", scenarios.len()),
    });

    for scenario in &scenarios {
        let result = run_simulation(
            scenario.initial_population,
            scenario.stress_series.as_ref(),
            scenario.steps,
        );
        let summary = analyze(&result);
        let final_pop = result.final_population().unwrap_or(scenario.initial_population);

        let passed = final_pop == scenario.expected_final_population
            && summary.critical_stress_events == scenario.expected_critical_events
            && summary.min_population == scenario.expected_min_population;
        results.push(TestResult {
            name: format!("scenario_{}", scenario.name),
            passed,
            detail: format!(
                "final={} (exp {}) events={} (exp {}) min={} (exp {})",
                final_pop,
                scenario.expected_final_population,
                summary.critical_stress_events,
                scenario.expected_critical_events,
                summary.min_population,
                scenario.expected_min_population
            ),
        });

        if verbose {
            println!(
                "  {:24} {:>4} steps → {}",
                scenario.name, scenario.steps, final_pop
            );
        }
    }

    results
}

// ── 5. Stressors ────────────────────────────────────────────────────────

fn validate_stressors(verbose: bool) -> Vec<TestResult> {
    println!("--- Environmental Stressors ---");
    let mut results = Vec::new();

    let full = ModelState {
        nutrient_level: Some(1.0),
        growth_rate: Some(0.1),
        mortality_rate: Some(0.01),
        stress_response: Some(0.0),
        predation_rate: Some(0.05),
    };

    for kind in StressorKind::ALL {
        let untouched = kind.apply(ModelState::default(), 1.0) == ModelState::default();
        results.push(TestResult {
            name: format!("stressor_{}_tolerates_missing", kind),
            passed: untouched,
            detail: "empty state passes through unchanged".into(),
        });

        let after = kind.apply(full, 1.0);
        let nutrients_drop = after.nutrient_level.unwrap_or(1.0) < 1.0;
        results.push(TestResult {
            name: format!("stressor_{}_reduces_nutrients", kind),
            passed: nutrients_drop,
            detail: format!("nutrient_level 1.0 → {:?}", after.nutrient_level),
        });

        if verbose {
            println!("  {} @ 1.0: {:?}", kind, after);
        }
    }

    results
}

// ── 6. Config, Reports & Export ─────────────────────────────────────────

fn validate_outputs(_verbose: bool) -> Vec<TestResult> {
    println!("--- Config, Reports & Export ---");
    let mut results = Vec::new();

    let config = SimulationConfig::default();
    results.push(TestResult {
        name: "config_default_valid".into(),
        passed: validate_config(&config).is_empty(),
        detail: "default config has no problems".into(),
    });

    results.push(TestResult {
        name: "config_empty_series_rejected".into(),
        passed: StressSeries::new(Vec::new()) == Err(ConfigError::EmptyStressSeries),
        detail: "empty stress series refused at construction".into(),
    });

    let result = SimulationDriver::new(config.clone()).run_config();
    let summary = analyze(&result);

    let csv = to_csv(&result);
    let rows = csv.lines().count();
    results.push(TestResult {
        name: "export_csv_rows".into(),
        passed: csv.starts_with("time,population\n") && rows == result.len() + 1,
        detail: format!("{} lines (header + {} rows)", rows, result.len()),
    });

    let detailed = DetailedReport::from_run(&config, &result, &summary).render();
    let metric_lines = detailed.lines().filter(|l| l.starts_with("  - ")).count();
    results.push(TestResult {
        name: "report_detailed_entries".into(),
        passed: detailed.starts_with("SAR11 Survival Analysis Report") && metric_lines == 14,
        detail: format!("{} entry lines", metric_lines),
    });

    let short = SummaryReport::from_run(&config, &result, &summary).render();
    results.push(TestResult {
        name: "report_summary_population".into(),
        passed: short.contains("  - Initial population: 1,100"),
        detail: "summary report groups thousands".into(),
    });

    let curve = decay::demo_curve();
    let decays = curve.windows(2).all(|w| w[1].1 < w[0].1);
    results.push(TestResult {
        name: "decay_demo_curve".into(),
        passed: curve.len() == 1000 && decays,
        detail: format!(
            "{} points, {:.1} → {:.1}",
            curve.len(),
            curve.first().map_or(0.0, |p| p.1),
            curve.last().map_or(0.0, |p| p.1)
        ),
    });

    results
}
