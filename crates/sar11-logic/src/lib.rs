//! Pure population-dynamics logic for the SAR11 Survival Analyzer.
//!
//! This crate holds every piece of model logic, independent of any file
//! system, plotting backend, or command-line front end. Functions take plain
//! data and return results, so the CLI, the headless simtest harness, and
//! the tests all drive the exact same code.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`analysis`] | Stress/growth statistics over a finished run |
//! | [`config`] | Simulation configuration, stress series, validation |
//! | [`constants`] | Growth, replication, stressor and analysis tunables |
//! | [`decay`] | Exponential decay demo curve |
//! | [`export`] | CSV export of simulation output |
//! | [`population`] | Population state and the per-step update rule |
//! | [`report`] | Detailed and summary text reports |
//! | [`simulation`] | Batch driver advancing a population over a stress series |
//! | [`stress`] | Environmental stressors applied to a typed model state |

pub mod analysis;
pub mod config;
pub mod constants;
pub mod decay;
pub mod export;
pub mod population;
pub mod report;
pub mod simulation;
pub mod stress;

pub use analysis::{analyze, AnalysisSummary, MetricValue};
pub use config::{validate_config, ConfigError, SimulationConfig, StressSeries};
pub use population::{PopulationState, StepRecord};
pub use simulation::{run_simulation, SimulationDriver, SimulationResult, SimulationStep};
pub use stress::{EnvironmentalStressor, ModelState, StressorKind};
