//! Simulation configuration.
//!
//! [`SimulationConfig`] is immutable once built. Use
//! [`SimulationConfigBuilder`] to construct validated instances.

use std::fmt;
use std::str::FromStr;

use super::error::ScenarioError;

/// Maximum number of trials allowed in one batch.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Horizon assumed when the caller gives none (one year).
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Longest horizon accepted.
pub const MAX_HORIZON_MONTHS: u32 = 600;

/// How each Monte Carlo trial perturbs its inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PerturbationModel {
    /// Growth rate shocked by a uniform factor in `[0.9, 1.1]`.
    #[default]
    GrowthOnly,
    /// Growth and burn shocked in `[0.9, 1.1]`, cash in `[0.95, 1.05]`.
    Fundamentals,
    /// Shock amplitude and drift driven by the macro levers.
    LeverCoupled,
}

impl PerturbationModel {
    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GrowthOnly => "growthOnly",
            Self::Fundamentals => "fundamentals",
            Self::LeverCoupled => "leverCoupled",
        }
    }
}

impl fmt::Display for PerturbationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PerturbationModel {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace(['_', '-'], "").to_lowercase().as_str() {
            "growthonly" | "simple" => Ok(Self::GrowthOnly),
            "fundamentals" => Ok(Self::Fundamentals),
            "levercoupled" => Ok(Self::LeverCoupled),
            _ => Err(ScenarioError::UnknownPerturbation(s.to_string())),
        }
    }
}

/// Simulation configuration.
///
/// # Examples
///
/// ```
/// use scenario_core::types::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .iterations(500)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.iterations(), 500);
/// assert_eq!(config.seed(), Some(7));
/// assert_eq!(config.horizon_months(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationConfig {
    iterations: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    seed: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    horizon_months: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    perturbation: Option<PerturbationModel>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of trials per batch.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Seed, if one was supplied.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed, or [`ScenarioError::MissingSeed`].
    #[inline]
    pub fn require_seed(&self) -> Result<u64, ScenarioError> {
        self.seed.ok_or(ScenarioError::MissingSeed)
    }

    /// Projection horizon in months.
    #[inline]
    pub fn horizon_months(&self) -> u32 {
        self.horizon_months.unwrap_or(DEFAULT_HORIZON_MONTHS)
    }

    /// Perturbation model applied per trial; [`PerturbationModel::GrowthOnly`]
    /// unless one was set.
    #[inline]
    pub fn perturbation(&self) -> PerturbationModel {
        self.perturbation.unwrap_or_default()
    }

    /// Perturbation model, if the caller set one.
    #[inline]
    pub fn explicit_perturbation(&self) -> Option<PerturbationModel> {
        self.perturbation
    }

    /// Returns a copy using `model` unless a model was already set.
    #[must_use]
    pub fn with_default_perturbation(self, model: PerturbationModel) -> Self {
        Self {
            perturbation: Some(self.perturbation.unwrap_or(model)),
            ..self
        }
    }

    /// Returns a copy running `iterations` trials per batch.
    #[must_use]
    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }

    /// Returns a copy with the given seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `iterations` is 0 or greater than [`MAX_ITERATIONS`]
    /// - `horizon_months` is 0 or greater than [`MAX_HORIZON_MONTHS`]
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ScenarioError::InvalidIterations(self.iterations));
        }
        if let Some(horizon) = self.horizon_months {
            if horizon == 0 || horizon > MAX_HORIZON_MONTHS {
                return Err(ScenarioError::InvalidHorizon(horizon));
            }
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    iterations: Option<usize>,
    seed: Option<u64>,
    horizon_months: Option<u32>,
    perturbation: Option<PerturbationModel>,
}

impl SimulationConfigBuilder {
    /// Sets the number of trials per batch.
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the projection horizon in months.
    #[inline]
    pub fn horizon_months(mut self, horizon_months: u32) -> Self {
        self.horizon_months = Some(horizon_months);
        self
    }

    /// Sets the perturbation model.
    #[inline]
    pub fn perturbation(mut self, perturbation: PerturbationModel) -> Self {
        self.perturbation = Some(perturbation);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError` if `iterations` is unset or out of range, or
    /// the horizon is out of range.
    pub fn build(self) -> Result<SimulationConfig, ScenarioError> {
        let config = SimulationConfig {
            iterations: self.iterations.ok_or(ScenarioError::InvalidIterations(0))?,
            seed: self.seed,
            horizon_months: self.horizon_months,
            perturbation: self.perturbation,
        };
        config.validate()?;
        Ok(config)
    }
}
