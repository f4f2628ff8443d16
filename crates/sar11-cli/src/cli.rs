use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "SAR11 Survival Analyzer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate population dynamics under a stress series and report on it
    Simulate(SimulateArgs),
    /// Render the exponential decay demo curve
    Decay(DecayArgs),
    /// Plot a histogram of cell-size measurements
    CellSizes(CellSizeArgs),
    /// Apply an environmental stressor to a model state
    Stress(StressArgs),
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Simulation config (JSON); missing fields take defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Starting population (overrides config)
    #[arg(long)]
    pub initial_population: Option<u64>,

    /// Number of steps (overrides config)
    #[arg(long)]
    pub steps: Option<u32>,

    /// Stress threshold (overrides config)
    #[arg(long)]
    pub stress_threshold: Option<f64>,

    /// Comma-separated stress levels, e.g. 0.2,0.6,0.3 (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub stress: Option<Vec<f64>>,

    /// Directory for CSV, report and chart output
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the population chart
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Abort on out-of-range configuration instead of warning
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct DecayArgs {
    /// Directory for CSV and chart output
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the chart
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

#[derive(Args, Debug)]
pub struct CellSizeArgs {
    /// File with one measurement per line; generated when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of generated measurements
    #[arg(long, default_value_t = 500)]
    pub samples: usize,

    /// RNG seed for generated measurements
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output chart path
    #[arg(long, default_value = "sar11_cell_sizes.png")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct StressArgs {
    /// Stressor: bloom or scarcity
    pub kind: String,

    /// Intensity in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub intensity: f64,

    /// Model state as JSON, e.g. '{"nutrient_level": 1.0}'
    #[arg(long, default_value = "{}")]
    pub state: String,
}
