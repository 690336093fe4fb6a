//! Engine requests.
//!
//! [`RequestSpec`] is the loose JSON shape collaborators send (mode and
//! preset as strings). It is validated into a [`SimulationRequest`] whose
//! [`EngineMode`] is a closed sum type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use scenario_core::types::{Fundamentals, LeverVector, PerturbationModel, SimulationConfig};
use scenario_engine::modes::StressPreset;

use crate::error::EngineError;

/// Engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineMode {
    /// One unperturbed projection
    Deterministic,
    /// One projection after a macro preset
    Stress(StressPreset),
    /// Seeded batch aggregated at the median
    MonteCarlo,
    /// Elasticity, tornado and optional shock
    Sensitivity,
}

impl EngineMode {
    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deterministic => "deterministic",
            Self::Stress(_) => "stress",
            Self::MonteCarlo => "montecarlo",
            Self::Sensitivity => "sensitivity",
        }
    }

    /// Whether the mode samples randomness.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Self::MonteCarlo | Self::Sensitivity)
    }

    /// Perturbation used when the request names none.
    ///
    /// Sensitivity defaults to the lever-coupled model so every candidate
    /// lever reaches the projector.
    pub fn default_perturbation(&self) -> PerturbationModel {
        match self {
            Self::Sensitivity => PerturbationModel::LeverCoupled,
            _ => PerturbationModel::GrowthOnly,
        }
    }

    /// Parses a mode name, taking the preset for stress mode.
    pub fn parse(name: &str, preset: Option<&str>) -> Result<Self, EngineError> {
        match name.replace(['_', '-'], "").to_lowercase().as_str() {
            "deterministic" => Ok(Self::Deterministic),
            "montecarlo" => Ok(Self::MonteCarlo),
            "sensitivity" => Ok(Self::Sensitivity),
            "stress" => {
                let preset = preset
                    .ok_or_else(|| EngineError::configuration("Stress mode requires a stressPreset"))?;
                StressPreset::from_str(preset)
                    .map(Self::Stress)
                    .map_err(|e| EngineError::configuration(e.to_string()))
            }
            _ => Err(EngineError::configuration(format!(
                "Invalid engine mode: {}",
                name
            ))),
        }
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stress(preset) => write!(f, "stress:{}", preset),
            other => f.write_str(other.name()),
        }
    }
}

/// Validated engine request.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    /// Mode to dispatch to
    pub mode: EngineMode,
    /// Starting fundamentals
    pub fundamentals: Fundamentals,
    /// Lever settings; scenario modes fall back to neutral levers
    pub levers: Option<LeverVector>,
    /// Seed; required by stochastic modes
    pub seed: Option<u64>,
    /// Trials per batch
    pub iterations: Option<usize>,
    /// Projection horizon
    pub horizon_months: Option<u32>,
    /// Per-trial perturbation
    pub perturbation: Option<PerturbationModel>,
    /// Lever points for sensitivity
    pub perturbation_pct: Option<f64>,
    /// Trials per sensitivity batch
    pub runs: Option<usize>,
    /// Shock intensity evaluated alongside sensitivity
    pub shock_intensity_pct: Option<f64>,
    /// Opaque version tag echoed in the response
    pub model_version: Option<String>,
}

impl SimulationRequest {
    /// Request with only a mode and fundamentals.
    pub fn new(mode: EngineMode, fundamentals: Fundamentals) -> Self {
        Self {
            mode,
            fundamentals,
            levers: None,
            seed: None,
            iterations: None,
            horizon_months: None,
            perturbation: None,
            perturbation_pct: None,
            runs: None,
            shock_intensity_pct: None,
            model_version: None,
        }
    }

    /// Sets the levers.
    #[must_use]
    pub fn with_levers(mut self, levers: LeverVector) -> Self {
        self.levers = Some(levers);
        self
    }

    /// Sets the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the iteration count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Simulation config with the given iteration fallback.
    ///
    /// The seed is carried as given; callers decide whether it is required.
    pub fn simulation_config(&self, default_iterations: usize) -> Result<SimulationConfig, EngineError> {
        let mut builder = SimulationConfig::builder()
            .iterations(self.iterations.unwrap_or(default_iterations))
            .maybe_seed(self.seed)
            .perturbation(
                self.perturbation
                    .unwrap_or_else(|| self.mode.default_perturbation()),
            );
        if let Some(horizon) = self.horizon_months {
            builder = builder.horizon_months(horizon);
        }
        Ok(builder.build()?)
    }
}

/// Wire shape of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSpec {
    pub engine_mode: Option<String>,
    pub fundamentals: Option<Fundamentals>,
    pub levers: Option<LeverVector>,
    pub seed: Option<u64>,
    pub iterations: Option<usize>,
    pub horizon_months: Option<u32>,
    pub perturbation: Option<String>,
    pub stress_preset: Option<String>,
    pub perturbation_pct: Option<f64>,
    pub runs: Option<usize>,
    pub shock_intensity_pct: Option<f64>,
    pub model_version: Option<String>,
}

impl RequestSpec {
    /// Parses a JSON request.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::configuration(format!("Malformed request: {}", e)))
    }
}

impl TryFrom<RequestSpec> for SimulationRequest {
    type Error = EngineError;

    fn try_from(spec: RequestSpec) -> Result<Self, Self::Error> {
        let mode_name = spec
            .engine_mode
            .as_deref()
            .ok_or_else(|| EngineError::configuration("Invalid engine mode: missing"))?;
        let mode = EngineMode::parse(mode_name, spec.stress_preset.as_deref())?;
        let fundamentals = spec
            .fundamentals
            .ok_or_else(|| EngineError::configuration("Request is missing fundamentals"))?;
        fundamentals.validate()?;
        let perturbation = spec
            .perturbation
            .as_deref()
            .map(PerturbationModel::from_str)
            .transpose()
            .map_err(|e| EngineError::configuration(e.to_string()))?;

        Ok(Self {
            mode,
            fundamentals,
            levers: spec.levers.map(LeverVector::clamped),
            seed: spec.seed,
            iterations: spec.iterations,
            horizon_months: spec.horizon_months,
            perturbation,
            perturbation_pct: spec.perturbation_pct,
            runs: spec.runs,
            shock_intensity_pct: spec.shock_intensity_pct,
            model_version: spec.model_version,
        })
    }
}
