//! Model constants — growth, replication, stressor coefficients, cut-offs.
//!
//! Plain `f64` constants with no runtime dependency. The update rule, the
//! analyzer, and the stressors all read from here.

/// Population update rule.
pub mod growth {
    /// Growth rate applied every step when unstressed.
    pub const BASE_GROWTH_RATE: f64 = 0.1;
    /// Replication-without-division coefficient, scaled by stress level.
    pub const REPLICATION_COEFFICIENT: f64 = 0.3;
    /// Stress threshold used when none is configured.
    pub const DEFAULT_STRESS_THRESHOLD: f64 = 0.5;
    /// Starting population used when none is configured.
    pub const DEFAULT_INITIAL_POPULATION: u64 = 1000;
    /// Time increment the driver passes to every update.
    pub const DRIVER_TIME_STEP: f64 = 1.0;
    /// Steps simulated by default.
    pub const DEFAULT_STEPS: u32 = 100;
}

/// Default three-phase stress pattern: calm, stressed, recovering.
pub mod default_pattern {
    pub const CALM_LEVEL: f64 = 0.2;
    pub const CALM_STEPS: usize = 20;
    pub const STRESSED_LEVEL: f64 = 0.6;
    pub const STRESSED_STEPS: usize = 40;
    pub const RECOVERY_LEVEL: f64 = 0.3;
    pub const RECOVERY_STEPS: usize = 40;
}

/// Behavior analysis cut-offs.
pub mod analysis {
    /// Steps strictly above this count as high stress.
    pub const HIGH_STRESS: f64 = 0.5;
    /// Steps strictly below this count as low stress.
    pub const LOW_STRESS: f64 = 0.3;
    /// Rising through this level counts as a critical stress event.
    pub const CRITICAL_CROSSING: f64 = 0.5;
}

/// Stressor coefficients, applied per unit of intensity.
pub mod stressors {
    // Phytoplankton bloom
    pub const BLOOM_NUTRIENT_LOSS: f64 = 0.3;
    pub const BLOOM_PREDATION_GAIN: f64 = 0.1;
    pub const BLOOM_GROWTH_GAIN: f64 = 0.05;
    // Nutrient scarcity
    pub const SCARCITY_NUTRIENT_LOSS: f64 = 0.4;
    pub const SCARCITY_GROWTH_LOSS: f64 = 0.2;
    pub const SCARCITY_MORTALITY_GAIN: f64 = 0.1;
    pub const SCARCITY_STRESS_RESPONSE_GAIN: f64 = 0.15;
}

/// Exponential decay demo curve.
pub mod decay {
    pub const INITIAL_POPULATION: f64 = 1000.0;
    pub const DECAY_RATE: f64 = 0.02;
    pub const END_TIME: f64 = 100.0;
    pub const POINTS: usize = 1000;
}
