//! Engine responses and run metadata.

use serde::{Deserialize, Serialize};

use scenario_core::types::SimulationResult;
use scenario_engine::SimulationWarning;
use scenario_risk::sensitivity::SensitivityProfile;
use scenario_risk::{Analysis, ShockResult};

/// Sensitivity output: profile plus an optional shock evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityBundle {
    /// Elasticity, tornado and baseline batch
    #[serde(flatten)]
    pub profile: SensitivityProfile,
    /// Shock result when an intensity was requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shock: Option<ShockResult>,
}

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum EngineOutput {
    /// Deterministic, stress or Monte Carlo result
    Scenario(SimulationResult),
    /// Sensitivity analysis
    Sensitivity(Analysis<SensitivityBundle>),
}

/// Observational metadata; never feeds back into computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Mode name
    pub engine_mode: String,
    /// Stress preset, for stress runs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stress_preset: Option<String>,
    /// Caller-supplied version tag
    pub model_version: String,
    /// Seed, if any
    pub seed: Option<u64>,
    /// Wall-clock duration
    pub execution_time_ms: f64,
    /// RFC 3339 completion time
    pub timestamp: String,
    /// Non-fatal input diagnostics
    #[serde(default)]
    pub warnings: Vec<SimulationWarning>,
}

/// Engine response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Run output
    pub result: EngineOutput,
    /// Run metadata
    pub meta: ResponseMeta,
}

impl SimulationResponse {
    /// Scenario result, if this was a scenario run.
    pub fn scenario(&self) -> Option<&SimulationResult> {
        match &self.result {
            EngineOutput::Scenario(result) => Some(result),
            EngineOutput::Sensitivity(_) => None,
        }
    }

    /// Sensitivity analysis, if this was a sensitivity run.
    pub fn sensitivity(&self) -> Option<&Analysis<SensitivityBundle>> {
        match &self.result {
            EngineOutput::Scenario(_) => None,
            EngineOutput::Sensitivity(analysis) => Some(analysis),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
