//! Error types for the simulation engine.

use scenario_core::types::ScenarioError;
use thiserror::Error;

/// Errors raised by deterministic, stress and Monte Carlo runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Invalid inputs or configuration
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// Stress preset name not recognised
    #[error("Unknown stress preset: {0}")]
    UnknownStressPreset(String),
}
