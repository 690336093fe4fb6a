//! Monte Carlo sampler.
//!
//! Runs the projector once per trial, each trial drawing from its own
//! generator derived from `(seed, trial_index)`, then aggregates through a
//! full sort. Trial order therefore never affects the aggregate, and batches
//! above the parallel threshold fan out over Rayon.

use rayon::prelude::*;
use scenario_core::projector::{ModelParams, Projector};
use scenario_core::types::{
    Fundamentals, LeverVector, SimulationConfig, SimulationResult, TrialOutcome,
};

use super::perturbation::perturb;
use super::stats::Percentiles;
use crate::error::SimulationError;
use crate::rng::ScenarioRng;

/// Batch size from which trials run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Condensed batch aggregate used by cross-lever analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BatchSummary {
    /// Fraction of surviving trials
    pub survival_rate: f64,
    /// Median final ARR
    #[cfg_attr(feature = "serde", serde(rename = "medianARR"))]
    pub median_arr: f64,
    /// Median runway in months
    pub median_runway: f64,
}

/// Full distribution of a Monte Carlo batch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MonteCarloDistribution {
    /// Number of trials
    pub iterations: usize,
    /// Seed of the batch
    pub seed: u64,
    /// Fraction of surviving trials
    pub survival_rate: f64,
    /// Final ARR percentiles
    pub arr: Percentiles,
    /// Runway percentiles
    pub runway: Percentiles,
    /// Enterprise value at the median ARR
    pub enterprise_value: f64,
}

impl MonteCarloDistribution {
    /// Condenses into a [`BatchSummary`].
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            survival_rate: self.survival_rate,
            median_arr: self.arr.p50,
            median_runway: self.runway.p50,
        }
    }

    /// Converts into an engine result taken from the median trial.
    pub fn to_result(&self) -> SimulationResult {
        SimulationResult::new(
            self.survival_rate,
            self.runway.p50,
            self.arr.p50,
            self.enterprise_value,
        )
    }
}

/// Monte Carlo sampler.
///
/// Stateless apart from its parameters: every call is a pure function of its
/// arguments, so one sampler can serve concurrent callers.
///
/// # Examples
///
/// ```rust
/// use scenario_core::prelude::*;
/// use scenario_engine::mc::MonteCarloSampler;
///
/// let sampler = MonteCarloSampler::default();
/// let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
/// let config = SimulationConfig::builder().iterations(500).seed(7).build().unwrap();
///
/// let a = sampler.run_monte_carlo(&f, &LeverVector::default(), &config).unwrap();
/// let b = sampler.run_monte_carlo(&f, &LeverVector::default(), &config).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloSampler {
    params: ModelParams,
    parallel_threshold: usize,
}

impl Default for MonteCarloSampler {
    fn default() -> Self {
        Self::new(ModelParams::default())
    }
}

impl MonteCarloSampler {
    /// Creates a sampler with the given model parameters.
    pub fn new(params: ModelParams) -> Self {
        Self {
            params,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Returns a copy using `threshold` as the parallel cut-over.
    #[must_use]
    pub fn with_parallel_threshold(self, threshold: usize) -> Self {
        Self {
            parallel_threshold: threshold,
            ..self
        }
    }

    /// Model parameters in use.
    #[inline]
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Projector configured for `config`'s horizon.
    #[inline]
    pub fn projector(&self, config: &SimulationConfig) -> Projector {
        Projector::new(self.params).with_horizon(config.horizon_months())
    }

    /// Runs every trial of a batch.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or carries no seed.
    pub fn run_trials(
        &self,
        fundamentals: &Fundamentals,
        levers: &LeverVector,
        config: &SimulationConfig,
    ) -> Result<Vec<TrialOutcome>, SimulationError> {
        config.validate()?;
        fundamentals.validate()?;
        let seed = config.require_seed()?;
        let projector = self.projector(config);
        let model = config.perturbation();
        let n = config.iterations();

        let trial = |index: usize| {
            let mut rng = ScenarioRng::for_trial(seed, index);
            let perturbed = perturb(model, fundamentals, levers, &mut rng);
            projector.project(&perturbed.fundamentals, levers, perturbed.growth_shock)
        };

        let outcomes = if n >= self.parallel_threshold {
            (0..n).into_par_iter().map(trial).collect()
        } else {
            (0..n).map(trial).collect()
        };
        Ok(outcomes)
    }

    /// Runs a batch and returns its full distribution.
    pub fn run_distribution(
        &self,
        fundamentals: &Fundamentals,
        levers: &LeverVector,
        config: &SimulationConfig,
    ) -> Result<MonteCarloDistribution, SimulationError> {
        let outcomes = self.run_trials(fundamentals, levers, config)?;
        let seed = config.require_seed()?;
        let n = outcomes.len();

        let survivors = outcomes.iter().filter(|o| o.did_survive).count();
        let mut arr: Vec<f64> = outcomes.iter().map(|o| o.final_arr).collect();
        let mut runway: Vec<f64> = outcomes.iter().map(|o| o.final_runway_months).collect();

        let arr = Percentiles::from_unsorted(&mut arr);
        let runway = Percentiles::from_unsorted(&mut runway);
        let survival_rate = survivors as f64 / n as f64;

        tracing::debug!(
            iterations = n,
            seed,
            survival_rate,
            median_arr = arr.p50,
            median_runway = runway.p50,
            "monte carlo batch complete"
        );

        Ok(MonteCarloDistribution {
            iterations: n,
            seed,
            survival_rate,
            arr,
            runway,
            enterprise_value: arr.p50 * self.params.ev_multiple,
        })
    }

    /// Runs a batch and returns survival rate plus medians.
    pub fn run_batch(
        &self,
        levers: &LeverVector,
        fundamentals: &Fundamentals,
        config: &SimulationConfig,
    ) -> Result<BatchSummary, SimulationError> {
        Ok(self.run_distribution(fundamentals, levers, config)?.summary())
    }

    /// Runs a batch and returns an engine result from the median trial.
    ///
    /// `survival_probability` is the empirical survival fraction and
    /// `enterprise_value` is taken at the median ARR.
    pub fn run_monte_carlo(
        &self,
        fundamentals: &Fundamentals,
        levers: &LeverVector,
        config: &SimulationConfig,
    ) -> Result<SimulationResult, SimulationError> {
        Ok(self.run_distribution(fundamentals, levers, config)?.to_result())
    }
}
