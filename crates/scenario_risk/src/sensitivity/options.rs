//! Tuning knobs for a sensitivity sweep.

use scenario_core::types::{Lever, LEVER_MAX, MAX_ITERATIONS};

use crate::cancel::CancellationToken;
use crate::error::RiskError;

/// Lever points added and removed around the baseline.
pub const DEFAULT_PERTURBATION_PCT: f64 = 5.0;

/// Trials per up/down batch.
pub const DEFAULT_SENSITIVITY_RUNS: usize = 200;

/// Options for a sensitivity sweep.
///
/// # Examples
///
/// ```
/// use scenario_core::types::Lever;
/// use scenario_risk::sensitivity::SensitivityOptions;
///
/// let options = SensitivityOptions::default()
///     .with_runs(100)
///     .with_candidates(vec![Lever::CostDiscipline, Lever::PricingPower]);
/// assert_eq!(options.perturbation_pct, 5.0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SensitivityOptions {
    /// Points added to (and removed from) each candidate lever
    pub perturbation_pct: f64,
    /// Trials per batch
    pub runs: usize,
    /// Levers to examine, in tie-break order
    pub candidates: Vec<Lever>,
    /// Checked between batches
    pub cancellation: CancellationToken,
}

impl Default for SensitivityOptions {
    fn default() -> Self {
        Self {
            perturbation_pct: DEFAULT_PERTURBATION_PCT,
            runs: DEFAULT_SENSITIVITY_RUNS,
            candidates: Lever::DEFAULT_CANDIDATES.to_vec(),
            cancellation: CancellationToken::new(),
        }
    }
}

impl SensitivityOptions {
    /// Sets the perturbation size in lever points.
    #[must_use]
    pub fn with_perturbation_pct(mut self, pct: f64) -> Self {
        self.perturbation_pct = pct;
        self
    }

    /// Sets trials per batch.
    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Replaces the candidate levers.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<Lever>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// - `perturbation_pct` is not in `(0, 100]`
    /// - `runs` is 0 or above the iteration ceiling
    pub fn validate(&self) -> Result<(), RiskError> {
        let pct = self.perturbation_pct;
        if !(pct.is_finite() && pct > 0.0 && pct <= LEVER_MAX) {
            return Err(RiskError::InvalidOptions(format!(
                "perturbation must be in (0, 100] lever points, got {}",
                pct
            )));
        }
        if self.runs == 0 || self.runs > MAX_ITERATIONS {
            return Err(RiskError::InvalidOptions(format!(
                "runs must be in [1, {}], got {}",
                MAX_ITERATIONS, self.runs
            )));
        }
        Ok(())
    }
}
