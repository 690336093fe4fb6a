//! Error types for scenario inputs and configuration.

use thiserror::Error;

/// Errors raised while constructing or validating simulation inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// A fundamental was NaN or infinite.
    #[error("Non-finite fundamental '{name}': {value}")]
    NonFiniteFundamental {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Iteration count outside the accepted range.
    #[error("Invalid iteration count {0}: must be in range [1, 10_000_000]")]
    InvalidIterations(usize),

    /// Horizon outside the accepted range.
    #[error("Invalid horizon {0} months: must be in range [1, 600]")]
    InvalidHorizon(u32),

    /// A stochastic run was requested without a seed.
    #[error("Seed is required for stochastic simulation")]
    MissingSeed,

    /// Lever name not recognised.
    #[error("Unknown lever: {0}")]
    UnknownLever(String),

    /// Perturbation model name not recognised.
    #[error("Unknown perturbation model: {0}")]
    UnknownPerturbation(String),

    /// Model parameter failed validation.
    #[error("Invalid model parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the problem
        reason: String,
    },
}
