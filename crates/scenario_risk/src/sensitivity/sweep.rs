//! Up/down batch sweep shared by elasticity and tornado.

use scenario_core::types::{Fundamentals, Lever, LeverVector, SimulationConfig};
use scenario_engine::mc::{BatchSummary, MonteCarloSampler};

use super::options::SensitivityOptions;
use crate::batch::analysis_config;
use crate::error::RiskError;
use crate::parallel::{try_map, ParallelConfig};

/// Batch results for one candidate lever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeverResponse {
    /// Nudged lever
    pub lever: Lever,
    /// Batch with the lever raised
    pub up: BatchSummary,
    /// Batch with the lever lowered
    pub down: BatchSummary,
}

/// Raw output of a sensitivity sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct LeverSweep {
    /// Batch at the unmodified levers
    pub baseline: BatchSummary,
    /// One entry per candidate, in candidate order
    pub responses: Vec<LeverResponse>,
    /// ARR multiple for enterprise value
    pub ev_multiple: f64,
}

impl LeverSweep {
    /// Enterprise value of a batch's median ARR.
    #[inline]
    pub fn enterprise_value(&self, summary: &BatchSummary) -> f64 {
        summary.median_arr * self.ev_multiple
    }
}

/// Runs the baseline batch and one up/down pair per candidate.
///
/// Every batch shares the configured seed, so up and down batches see the
/// same random draws and their difference isolates the lever. The token is
/// checked before each batch.
pub(crate) fn run_sweep(
    sampler: &MonteCarloSampler,
    parallel: &ParallelConfig,
    levers: &LeverVector,
    fundamentals: &Fundamentals,
    config: &SimulationConfig,
    options: &SensitivityOptions,
) -> Result<LeverSweep, RiskError> {
    options.validate()?;
    let batch_config = analysis_config(config).with_iterations(options.runs);
    batch_config.validate()?;
    batch_config.require_seed()?;

    let base = levers.clamped();
    let pct = options.perturbation_pct;
    let cancel = &options.cancellation;

    cancel.check()?;
    let baseline = sampler.run_batch(&base, fundamentals, &batch_config)?;

    let responses = try_map(
        &options.candidates,
        parallel,
        |&lever| -> Result<LeverResponse, RiskError> {
            cancel.check()?;
            let up = sampler.run_batch(&base.nudged(lever, pct), fundamentals, &batch_config)?;
            cancel.check()?;
            let down = sampler.run_batch(&base.nudged(lever, -pct), fundamentals, &batch_config)?;
            Ok(LeverResponse { lever, up, down })
        },
    )?;

    tracing::debug!(
        candidates = responses.len(),
        runs = options.runs,
        perturbation_pct = pct,
        baseline_survival = baseline.survival_rate,
        "sensitivity sweep complete"
    );

    Ok(LeverSweep {
        baseline,
        responses,
        ev_multiple: sampler.params().sensitivity_ev_multiple,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancellationToken;

    fn base() -> Fundamentals {
        Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap()
    }

    fn config() -> SimulationConfig {
        SimulationConfig::builder().iterations(50).seed(3).build().unwrap()
    }

    #[test]
    fn test_sweep_shape() {
        let sweep = run_sweep(
            &MonteCarloSampler::default(),
            &ParallelConfig::default(),
            &LeverVector::default(),
            &base(),
            &config(),
            &SensitivityOptions::default().with_runs(40),
        )
        .unwrap();

        assert_eq!(sweep.responses.len(), 5);
        assert_eq!(sweep.ev_multiple, 3.5);
        let levers: Vec<Lever> = sweep.responses.iter().map(|r| r.lever).collect();
        assert_eq!(levers, Lever::DEFAULT_CANDIDATES.to_vec());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let run = |parallel: ParallelConfig| {
            run_sweep(
                &MonteCarloSampler::default(),
                &parallel,
                &LeverVector::default(),
                &base(),
                &config(),
                &SensitivityOptions::default().with_runs(60),
            )
            .unwrap()
        };
        assert_eq!(run(ParallelConfig::new(1)), run(ParallelConfig::sequential()));
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let err = run_sweep(
            &MonteCarloSampler::default(),
            &ParallelConfig::default(),
            &LeverVector::default(),
            &base(),
            &config(),
            &SensitivityOptions::default().with_cancellation(token),
        )
        .unwrap_err();
        assert_eq!(err, RiskError::Cancelled);
    }

    #[test]
    fn test_missing_seed() {
        let config = SimulationConfig::builder().iterations(10).build().unwrap();
        let err = run_sweep(
            &MonteCarloSampler::default(),
            &ParallelConfig::default(),
            &LeverVector::default(),
            &base(),
            &config,
            &SensitivityOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Seed is required for stochastic simulation");
    }
}
