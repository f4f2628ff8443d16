//! SAR11 Survival Analyzer command-line front end.
//!
//! Usage:
//!   sar11 simulate --steps 100 --out-dir results
//!   sar11 decay
//!   sar11 cell-sizes --samples 1000
//!   sar11 stress bloom --intensity 0.5 --state '{"nutrient_level": 1.0}'

mod cli;
mod plot;

use std::error::Error;
use std::fs;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use sar11_logic::analysis::analyze;
use sar11_logic::config::{validate_config, SimulationConfig, StressSeries};
use sar11_logic::decay;
use sar11_logic::export::{curve_to_csv, to_csv};
use sar11_logic::report::{DetailedReport, SummaryReport};
use sar11_logic::simulation::SimulationDriver;
use sar11_logic::stress::{ModelState, StressorKind};
use tracing::{info, warn};

use crate::cli::{CellSizeArgs, Cli, Command, DecayArgs, SimulateArgs, StressArgs};

const RESULTS_CSV: &str = "sar11_results.csv";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(args) => simulate(args),
        Command::Decay(args) => decay_demo(args),
        Command::CellSizes(args) => cell_sizes(args),
        Command::Stress(args) => apply_stressor(args),
    }
}

// ── simulate ────────────────────────────────────────────────────────────

fn load_config(args: &SimulateArgs) -> Result<SimulationConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => SimulationConfig::default(),
    };

    if let Some(population) = args.initial_population {
        config.initial_population = population;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(threshold) = args.stress_threshold {
        config.stress_threshold = threshold;
    }
    if let Some(levels) = &args.stress {
        config.stress_series = StressSeries::new(levels.clone())?;
    }
    Ok(config)
}

fn simulate(args: SimulateArgs) -> Result<(), Box<dyn Error>> {
    println!("Starting SAR11 Survival Analyzer...");
    let config = load_config(&args)?;

    let problems = validate_config(&config);
    for problem in &problems {
        warn!("config: {}", problem);
    }
    if args.strict && !problems.is_empty() {
        return Err(format!("{} config problem(s) in strict mode", problems.len()).into());
    }

    let driver = SimulationDriver::new(config.clone());
    let result = driver.run_config();
    let summary = analyze(&result);

    let detailed = DetailedReport::from_run(&config, &result, &summary).render();
    let short = SummaryReport::from_run(&config, &result, &summary).render();
    println!("{}", detailed);

    fs::create_dir_all(&args.out_dir)?;
    write_output(&args.out_dir, RESULTS_CSV, &to_csv(&result))?;
    write_output(&args.out_dir, "sar11_report.txt", &detailed)?;
    write_output(&args.out_dir, "sar11_summary.txt", &short)?;

    if !args.no_plot {
        let series: Vec<(f64, f64)> = result
            .steps
            .iter()
            .map(|s| (s.time as f64, s.population as f64))
            .collect();
        let chart = args.out_dir.join("sar11_population.png");
        plot::render_population_trend(&chart, "Population Trends Over Time", &series)?;
        info!("Wrote {}", chart.display());
    }

    println!(
        "Simulation completed. Results saved to {}",
        args.out_dir.join(RESULTS_CSV).display()
    );
    Ok(())
}

fn write_output(dir: &Path, name: &str, contents: &str) -> Result<(), Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    info!("Wrote {}", path.display());
    Ok(())
}

// ── decay ───────────────────────────────────────────────────────────────

fn decay_demo(args: DecayArgs) -> Result<(), Box<dyn Error>> {
    println!("Starting SAR11 Survival Analyzer...");
    let curve = decay::demo_curve();

    fs::create_dir_all(&args.out_dir)?;
    if !args.no_plot {
        let chart = args.out_dir.join("sar11_simulation.png");
        plot::render_population_trend(&chart, "SAR11 Population Dynamics Simulation", &curve)?;
        info!("Wrote {}", chart.display());
    }
    write_output(&args.out_dir, RESULTS_CSV, &curve_to_csv(&curve))?;

    println!(
        "Simulation completed. Results saved to {}",
        args.out_dir.join(RESULTS_CSV).display()
    );
    Ok(())
}

// ── cell-sizes ──────────────────────────────────────────────────────────

/// Mean and spread of generated cell diameters, in micrometres.
const CELL_SIZE_MEAN: f64 = 0.4;
const CELL_SIZE_SD: f64 = 0.05;

fn read_measurements(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value: f64 = line
            .parse()
            .map_err(|e| format!("{}:{}: {}", path.display(), line_no + 1, e))?;
        if value.is_finite() {
            values.push(value);
        } else {
            warn!("{}:{}: skipping non-finite value {}", path.display(), line_no + 1, value);
        }
    }
    Ok(values)
}

/// Normally distributed sizes, clamped positive.
fn generate_measurements(samples: usize, seed: u64) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(CELL_SIZE_MEAN, CELL_SIZE_SD)?;
    Ok((0..samples)
        .map(|_| rng.sample(normal).max(f64::EPSILON))
        .collect())
}

fn cell_sizes(args: CellSizeArgs) -> Result<(), Box<dyn Error>> {
    let sizes = match &args.input {
        Some(path) => read_measurements(path)?,
        None => generate_measurements(args.samples, args.seed)?,
    };
    info!("Plotting {} cell-size measurements", sizes.len());
    plot::render_cell_size_histogram(&args.output, "Cell Size Distribution", &sizes)?;
    println!("Saved histogram to {}", args.output.display());
    Ok(())
}

// ── stress ──────────────────────────────────────────────────────────────

fn apply_stressor(args: StressArgs) -> Result<(), Box<dyn Error>> {
    let kind: StressorKind = args.kind.parse()?;
    let state: ModelState = serde_json::from_str(&args.state)?;
    if !(0.0..=1.0).contains(&args.intensity) {
        warn!("intensity {} is outside [0, 1]", args.intensity);
    }

    let after = kind.apply(state, args.intensity);
    info!("Applied {} at intensity {}", kind, args.intensity);
    println!("{}", serde_json::to_string_pretty(&after)?);
    Ok(())
}
