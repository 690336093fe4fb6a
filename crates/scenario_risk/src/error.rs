//! Error types for cross-lever analysis.
//!
//! This module provides structured error types for sensitivity and shock
//! analysis using `thiserror` for derivation.

use scenario_core::types::ScenarioError;
use scenario_engine::SimulationError;
use thiserror::Error;

/// Errors that can occur during sensitivity or shock analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// A Monte Carlo batch failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Sensitivity options failed validation.
    #[error("Invalid analysis options: {0}")]
    InvalidOptions(String),

    /// The cancellation token fired between batches.
    #[error("Analysis cancelled")]
    Cancelled,
}

impl From<ScenarioError> for RiskError {
    fn from(err: ScenarioError) -> Self {
        Self::Simulation(SimulationError::Scenario(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_cancelled() {
        assert_eq!(RiskError::Cancelled.to_string(), "Analysis cancelled");
    }

    #[test]
    fn test_error_display_invalid_options() {
        let err = RiskError::InvalidOptions("runs must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid analysis options: runs must be positive"
        );
    }

    #[test]
    fn test_scenario_error_is_transparent() {
        let err: RiskError = ScenarioError::MissingSeed.into();
        assert_eq!(err.to_string(), "Seed is required for stochastic simulation");
        assert!(matches!(
            err,
            RiskError::Simulation(SimulationError::Scenario(ScenarioError::MissingSeed))
        ));
    }
}
