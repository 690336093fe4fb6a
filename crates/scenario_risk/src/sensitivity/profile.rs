//! Sensitivity engine: elasticity, tornado and the combined profile.

use scenario_core::types::{Fundamentals, LeverVector, SimulationConfig};
use scenario_engine::mc::{BatchSummary, MonteCarloSampler};

use super::elasticity::ElasticityEntry;
use super::options::SensitivityOptions;
use super::sweep::{run_sweep, LeverSweep};
use super::tornado::TornadoBar;
use crate::analysis::Analysis;
use crate::error::RiskError;
use crate::parallel::ParallelConfig;

/// Reason reported when a profile is cancelled.
pub const CANCELLED_REASON: &str = "cancelled";

/// Elasticity and tornado from one sweep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SensitivityProfile {
    /// Batch at the unmodified levers
    pub baseline: BatchSummary,
    /// Entries, strongest first
    pub elasticity: Vec<ElasticityEntry>,
    /// Bars, widest first
    pub tornado: Vec<TornadoBar>,
}

impl From<LeverSweep> for SensitivityProfile {
    fn from(sweep: LeverSweep) -> Self {
        Self {
            baseline: sweep.baseline,
            elasticity: sweep.elasticity(),
            tornado: sweep.tornado(),
        }
    }
}

/// Runs lever sweeps through a Monte Carlo sampler.
///
/// Candidates fan out over Rayon; each candidate's up and down batches run
/// back to back with a cancellation check before each.
///
/// # Examples
///
/// ```
/// use scenario_core::prelude::*;
/// use scenario_risk::sensitivity::{SensitivityEngine, SensitivityOptions};
///
/// let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
/// let config = SimulationConfig::builder()
///     .iterations(500)
///     .seed(7)
///     .perturbation(PerturbationModel::LeverCoupled)
///     .build()
///     .unwrap();
///
/// let entries = SensitivityEngine::default()
///     .compute_elasticity(&LeverVector::default(), &f, &config, &SensitivityOptions::default())
///     .unwrap();
/// assert_eq!(entries[0].elasticity_score, 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SensitivityEngine {
    sampler: MonteCarloSampler,
    parallel: ParallelConfig,
}

impl SensitivityEngine {
    /// Creates an engine over `sampler`.
    pub fn new(sampler: MonteCarloSampler) -> Self {
        Self {
            sampler,
            parallel: ParallelConfig::default(),
        }
    }

    /// Returns a copy using `parallel` for candidate fan-out.
    #[must_use]
    pub fn with_parallel(self, parallel: ParallelConfig) -> Self {
        Self { parallel, ..self }
    }

    /// Underlying sampler.
    pub fn sampler(&self) -> &MonteCarloSampler {
        &self.sampler
    }

    /// Runs the raw sweep.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidOptions`] for bad options
    /// - [`RiskError::Simulation`] for a missing seed or invalid inputs
    /// - [`RiskError::Cancelled`] if the token fires
    pub fn sweep(
        &self,
        levers: &LeverVector,
        fundamentals: &Fundamentals,
        config: &SimulationConfig,
        options: &SensitivityOptions,
    ) -> Result<LeverSweep, RiskError> {
        run_sweep(&self.sampler, &self.parallel, levers, fundamentals, config, options)
    }

    /// Elasticity entries sorted by descending score.
    pub fn compute_elasticity(
        &self,
        levers: &LeverVector,
        fundamentals: &Fundamentals,
        config: &SimulationConfig,
        options: &SensitivityOptions,
    ) -> Result<Vec<ElasticityEntry>, RiskError> {
        Ok(self.sweep(levers, fundamentals, config, options)?.elasticity())
    }

    /// Top tornado bars sorted by descending spread.
    pub fn compute_tornado(
        &self,
        levers: &LeverVector,
        fundamentals: &Fundamentals,
        config: &SimulationConfig,
        options: &SensitivityOptions,
    ) -> Result<Vec<TornadoBar>, RiskError> {
        Ok(self.sweep(levers, fundamentals, config, options)?.tornado())
    }

    /// Elasticity and tornado from a single sweep.
    ///
    /// Missing levers or config, or a cancelled token, give
    /// [`Analysis::NotComputed`]. Other failures are errors.
    pub fn compute_profile(
        &self,
        levers: Option<&LeverVector>,
        fundamentals: &Fundamentals,
        config: Option<&SimulationConfig>,
        options: &SensitivityOptions,
    ) -> Result<Analysis<SensitivityProfile>, RiskError> {
        let Some(levers) = levers else {
            return Ok(Analysis::not_computed(
                "base levers are required for sensitivity analysis",
            ));
        };
        let Some(config) = config else {
            return Ok(Analysis::not_computed(
                "simulation config is required for sensitivity analysis",
            ));
        };
        match self.sweep(levers, fundamentals, config, options) {
            Ok(sweep) => Ok(Analysis::Computed(sweep.into())),
            Err(RiskError::Cancelled) => {
                tracing::info!("sensitivity profile cancelled");
                Ok(Analysis::not_computed(CANCELLED_REASON))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancellationToken;
    use crate::sensitivity::ImpactDirection;
    use scenario_core::types::{Lever, PerturbationModel};

    fn base() -> Fundamentals {
        Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap()
    }

    fn coupled(seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .iterations(1)
            .seed(seed)
            .perturbation(PerturbationModel::LeverCoupled)
            .build()
            .unwrap()
    }

    #[test]
    fn test_growth_only_isolates_cost_discipline() {
        // Only cost discipline reaches the projector under the simple model
        let config = SimulationConfig::builder()
            .iterations(1)
            .seed(1)
            .perturbation(PerturbationModel::GrowthOnly)
            .build()
            .unwrap();
        let entries = SensitivityEngine::default()
            .compute_elasticity(&LeverVector::default(), &base(), &config, &SensitivityOptions::default())
            .unwrap();

        assert_eq!(entries[0].lever, Lever::CostDiscipline);
        assert_eq!(entries[0].elasticity_score, 1.0);
        assert_eq!(entries[0].direction, ImpactDirection::Positive);
        assert!(entries[0].delta_runway > 0.0);
        assert!(entries[1..].iter().all(|e| e.elasticity_score == 0.0));
        assert!(entries[1..].iter().all(|e| e.direction == ImpactDirection::Neutral));
    }

    #[test]
    fn test_lever_coupled_directions() {
        let entries = SensitivityEngine::default()
            .compute_elasticity(&LeverVector::default(), &base(), &coupled(11), &SensitivityOptions::default())
            .unwrap();
        let direction = |lever: Lever| {
            entries
                .iter()
                .find(|e| e.lever == lever)
                .map(|e| e.direction)
                .unwrap()
        };

        assert_eq!(direction(Lever::DemandStrength), ImpactDirection::Positive);
        assert_eq!(direction(Lever::FundingPressure), ImpactDirection::Negative);
        assert_eq!(direction(Lever::ExecutionRisk), ImpactDirection::Negative);
        assert_eq!(direction(Lever::CostDiscipline), ImpactDirection::Positive);
    }

    #[test]
    fn test_profile_matches_separate_calls() {
        let engine = SensitivityEngine::default();
        let options = SensitivityOptions::default().with_runs(120);
        let levers = LeverVector::default();
        let config = coupled(5);

        let profile = engine
            .compute_profile(Some(&levers), &base(), Some(&config), &options)
            .unwrap()
            .into_computed()
            .unwrap();
        let elasticity = engine.compute_elasticity(&levers, &base(), &config, &options).unwrap();
        let tornado = engine.compute_tornado(&levers, &base(), &config, &options).unwrap();

        assert_eq!(profile.elasticity, elasticity);
        assert_eq!(profile.tornado, tornado);
    }

    #[test]
    fn test_profile_missing_context() {
        let engine = SensitivityEngine::default();
        let options = SensitivityOptions::default();

        let no_levers = engine
            .compute_profile(None, &base(), Some(&coupled(1)), &options)
            .unwrap();
        assert!(no_levers.reason().unwrap().contains("levers"));

        let no_config = engine
            .compute_profile(Some(&LeverVector::default()), &base(), None, &options)
            .unwrap();
        assert!(no_config.reason().unwrap().contains("config"));
    }

    #[test]
    fn test_profile_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let options = SensitivityOptions::default().with_cancellation(token);

        let analysis = SensitivityEngine::default()
            .compute_profile(Some(&LeverVector::default()), &base(), Some(&coupled(1)), &options)
            .unwrap();
        assert_eq!(analysis, Analysis::not_computed(CANCELLED_REASON));
    }

    #[test]
    fn test_profile_missing_seed_is_error() {
        let config = SimulationConfig::builder().iterations(10).build().unwrap();
        let result = SensitivityEngine::default().compute_profile(
            Some(&LeverVector::default()),
            &base(),
            Some(&config),
            &SensitivityOptions::default(),
        );
        assert!(result.is_err());
    }
}
