//! Engine facade errors.

use scenario_core::types::ScenarioError;
use scenario_engine::SimulationError;
use scenario_risk::RiskError;
use thiserror::Error;

/// Errors surfaced by [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Invalid or missing mode, missing seed for a stochastic mode, or an
    /// unknown stress preset.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid inputs.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// A simulation run failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Sensitivity or shock analysis failed.
    #[error(transparent)]
    Risk(#[from] RiskError),
}

impl EngineError {
    /// Configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
