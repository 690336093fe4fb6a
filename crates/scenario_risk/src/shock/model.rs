//! Shock propagation model.

use scenario_core::types::{Fundamentals, Lever, LeverVector, SimulationConfig};
use scenario_engine::mc::MonteCarloSampler;

use super::classify::ShockClass;
use crate::analysis::Analysis;
use crate::batch::analysis_config;
use crate::cancel::CancellationToken;
use crate::error::RiskError;
use crate::parallel::{try_map, ParallelConfig};
use crate::sensitivity::DEFAULT_SENSITIVITY_RUNS;

/// Largest accepted shock intensity, in percent.
pub const MAX_SHOCK_INTENSITY_PCT: f64 = 200.0;

// Lever points moved per unit of intensity (t = pct / 100)
const VOLATILITY_PER_UNIT: f64 = 30.0;
const DEMAND_PER_UNIT: f64 = 25.0;
const FUNDING_PER_UNIT: f64 = 20.0;

/// Outcome of one shock intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShockResult {
    /// Intensity applied, after clamping
    pub shock_intensity_pct: f64,
    /// Fraction of surviving trials
    pub survival_probability: f64,
    /// EV at the median ARR
    #[cfg_attr(feature = "serde", serde(rename = "medianEV"))]
    pub median_ev: f64,
    /// Median runway in months
    pub median_runway: f64,
    /// `1 − survival_probability`
    pub failure_probability: f64,
    /// Robustness class
    pub classification: ShockClass,
}

/// Clamps an intensity onto `[0, 200]`; NaN becomes 0.
#[inline]
pub fn clamp_intensity(intensity_pct: f64) -> f64 {
    if intensity_pct.is_nan() {
        0.0
    } else {
        intensity_pct.clamp(0.0, MAX_SHOCK_INTENSITY_PCT)
    }
}

/// Applies the macro shock to a lever vector.
///
/// # Examples
///
/// ```
/// use scenario_core::types::LeverVector;
/// use scenario_risk::shock::shocked_levers;
///
/// let shocked = shocked_levers(&LeverVector::default(), 200.0);
/// assert_eq!(shocked.market_volatility, 100.0);
/// assert_eq!(shocked.demand_strength, 0.0);
/// assert_eq!(shocked.funding_pressure, 90.0);
/// ```
pub fn shocked_levers(base: &LeverVector, intensity_pct: f64) -> LeverVector {
    let t = clamp_intensity(intensity_pct) / 100.0;
    base.clamped()
        .nudged(Lever::MarketVolatility, t * VOLATILITY_PER_UNIT)
        .nudged(Lever::DemandStrength, -t * DEMAND_PER_UNIT)
        .nudged(Lever::FundingPressure, t * FUNDING_PER_UNIT)
}

/// Runs shocked batches through a sampler.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShockModel {
    sampler: MonteCarloSampler,
    parallel: ParallelConfig,
}

impl ShockModel {
    /// Creates a model over `sampler`.
    pub fn new(sampler: MonteCarloSampler) -> Self {
        Self {
            sampler,
            parallel: ParallelConfig::default(),
        }
    }

    /// Returns a copy using `parallel` for sweeps.
    #[must_use]
    pub fn with_parallel(self, parallel: ParallelConfig) -> Self {
        Self { parallel, ..self }
    }

    /// Runs one intensity.
    ///
    /// EV uses the sensitivity multiple. Batches run under the lever-coupled
    /// model unless `config` names another.
    pub fn propagate(
        &self,
        levers: &LeverVector,
        fundamentals: &Fundamentals,
        config: &SimulationConfig,
        intensity_pct: f64,
    ) -> Result<ShockResult, RiskError> {
        let intensity = clamp_intensity(intensity_pct);
        let shocked = shocked_levers(levers, intensity);
        let batch = self
            .sampler
            .run_batch(&shocked, fundamentals, &analysis_config(config))?;

        let survival = batch.survival_rate;
        let classification = ShockClass::classify(survival);
        tracing::debug!(
            intensity,
            survival,
            %classification,
            "shock propagated"
        );

        Ok(ShockResult {
            shock_intensity_pct: intensity,
            survival_probability: survival,
            median_ev: batch.median_arr * self.sampler.params().sensitivity_ev_multiple,
            median_runway: batch.median_runway,
            failure_probability: 1.0 - survival,
            classification,
        })
    }

    /// Runs several intensities, in input order.
    ///
    /// The token is checked before each batch.
    pub fn sweep(
        &self,
        levers: &LeverVector,
        fundamentals: &Fundamentals,
        config: &SimulationConfig,
        intensities: &[f64],
        cancel: &CancellationToken,
    ) -> Result<Vec<ShockResult>, RiskError> {
        try_map(intensities, &self.parallel, |&pct| {
            cancel.check()?;
            self.propagate(levers, fundamentals, config, pct)
        })
    }
}

fn with_runs(config: &SimulationConfig, runs: Option<usize>) -> SimulationConfig {
    config.with_iterations(runs.unwrap_or(DEFAULT_SENSITIVITY_RUNS))
}

/// One intensity with the default model; `runs` defaults to 200.
pub fn compute_shock_propagation(
    levers: &LeverVector,
    fundamentals: &Fundamentals,
    config: &SimulationConfig,
    intensity_pct: f64,
    runs: Option<usize>,
) -> Result<ShockResult, RiskError> {
    ShockModel::default().propagate(levers, fundamentals, &with_runs(config, runs), intensity_pct)
}

/// Several intensities with the default model; `runs` defaults to 200.
pub fn shock_sweep(
    levers: &LeverVector,
    fundamentals: &Fundamentals,
    config: &SimulationConfig,
    intensities: &[f64],
    runs: Option<usize>,
) -> Result<Vec<ShockResult>, RiskError> {
    ShockModel::default().sweep(
        levers,
        fundamentals,
        &with_runs(config, runs),
        intensities,
        &CancellationToken::new(),
    )
}

/// Like [`compute_shock_propagation`], but missing context is not an error.
pub fn analyse_shock(
    levers: Option<&LeverVector>,
    fundamentals: &Fundamentals,
    config: Option<&SimulationConfig>,
    intensity_pct: f64,
    runs: Option<usize>,
) -> Result<Analysis<ShockResult>, RiskError> {
    match (levers, config) {
        (None, _) => Ok(Analysis::not_computed(
            "base levers are required for shock propagation",
        )),
        (_, None) => Ok(Analysis::not_computed(
            "simulation config is required for shock propagation",
        )),
        (Some(levers), Some(config)) => {
            compute_shock_propagation(levers, fundamentals, config, intensity_pct, runs)
                .map(Analysis::Computed)
        }
    }
}
