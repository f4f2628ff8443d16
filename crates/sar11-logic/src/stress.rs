//! Environmental stressors — phytoplankton bloom and nutrient scarcity.
//!
//! Stressors act on a [`ModelState`] of optional named fields. A field that
//! is `None` is left untouched, so callers control which effects apply by
//! choosing which fields to track. These transforms are independent of the
//! simulation driver and are composed manually by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::stressors::*;

/// Named environmental fields a stressor can act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortality_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_response: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predation_rate: Option<f64>,
}

fn scale(field: &mut Option<f64>, factor: f64) {
    if let Some(v) = field {
        *v *= factor;
    }
}

fn add(field: &mut Option<f64>, amount: f64) {
    if let Some(v) = field {
        *v += amount;
    }
}

/// Bloom: competition drains nutrients, grazers arrive, food boosts growth.
pub fn apply_phytoplankton_bloom(mut state: ModelState, intensity: f64) -> ModelState {
    scale(&mut state.nutrient_level, 1.0 - BLOOM_NUTRIENT_LOSS * intensity);
    add(&mut state.predation_rate, BLOOM_PREDATION_GAIN * intensity);
    add(&mut state.growth_rate, BLOOM_GROWTH_GAIN * intensity);
    state
}

/// Scarcity: fewer nutrients, slower growth, starvation, stress response.
pub fn apply_nutrient_scarcity(mut state: ModelState, intensity: f64) -> ModelState {
    scale(&mut state.nutrient_level, 1.0 - SCARCITY_NUTRIENT_LOSS * intensity);
    scale(&mut state.growth_rate, 1.0 - SCARCITY_GROWTH_LOSS * intensity);
    add(&mut state.mortality_rate, SCARCITY_MORTALITY_GAIN * intensity);
    add(
        &mut state.stress_response,
        SCARCITY_STRESS_RESPONSE_GAIN * intensity,
    );
    state
}

/// Kinds of environmental stressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressorKind {
    PhytoplanktonBloom,
    NutrientScarcity,
}

impl StressorKind {
    pub const ALL: [StressorKind; 2] = [Self::PhytoplanktonBloom, Self::NutrientScarcity];

    pub fn name(self) -> &'static str {
        match self {
            Self::PhytoplanktonBloom => "phytoplankton_bloom",
            Self::NutrientScarcity => "nutrient_scarcity",
        }
    }

    pub fn apply(self, state: ModelState, intensity: f64) -> ModelState {
        match self {
            Self::PhytoplanktonBloom => apply_phytoplankton_bloom(state, intensity),
            Self::NutrientScarcity => apply_nutrient_scarcity(state, intensity),
        }
    }
}

impl fmt::Display for StressorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized stressor name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStressor(pub String);

impl fmt::Display for UnknownStressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown stressor '{}' (expected bloom or scarcity)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStressor {}

impl FromStr for StressorKind {
    type Err = UnknownStressor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bloom" | "phytoplankton_bloom" => Ok(Self::PhytoplanktonBloom),
            "scarcity" | "nutrient_scarcity" => Ok(Self::NutrientScarcity),
            _ => Err(UnknownStressor(s.to_string())),
        }
    }
}

/// A stressor with a fixed severity, used as the intensity when applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalStressor {
    pub kind: StressorKind,
    pub severity: f64,
}

impl EnvironmentalStressor {
    pub fn new(kind: StressorKind, severity: f64) -> Self {
        Self { kind, severity }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn apply(&self, state: ModelState) -> ModelState {
        self.kind.apply(state, self.severity)
    }
}
