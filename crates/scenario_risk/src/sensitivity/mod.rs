//! Lever sensitivity analysis.
//!
//! For each candidate lever, two Monte Carlo batches run with the lever
//! nudged up and down by a fixed number of points. The gaps between the
//! batches give:
//!
//! - [`ElasticityEntry`]: signed deltas plus a score normalised to the
//!   strongest lever
//! - [`TornadoBar`]: low/high survival and EV, ranked by EV spread
//!
//! [`compute_sensitivity_profile`] derives both from one sweep.

mod elasticity;
mod options;
mod profile;
mod sweep;
mod tornado;

pub use elasticity::{
    normalise_scores, raw_magnitude, sort_by_score, ElasticityEntry, ImpactDirection,
    DENOMINATOR_FLOOR, EV_WEIGHT, RUNWAY_WEIGHT,
};
pub use options::{SensitivityOptions, DEFAULT_PERTURBATION_PCT, DEFAULT_SENSITIVITY_RUNS};
pub use profile::{SensitivityEngine, SensitivityProfile, CANCELLED_REASON};
pub use sweep::{LeverResponse, LeverSweep};
pub use tornado::{rank_tornado, TornadoBar, TORNADO_MAX_BARS};

use scenario_core::types::{Fundamentals, LeverVector, SimulationConfig};

use crate::analysis::Analysis;
use crate::error::RiskError;

/// Elasticity entries with the default engine.
pub fn compute_elasticity(
    levers: &LeverVector,
    fundamentals: &Fundamentals,
    config: &SimulationConfig,
    options: &SensitivityOptions,
) -> Result<Vec<ElasticityEntry>, RiskError> {
    SensitivityEngine::default().compute_elasticity(levers, fundamentals, config, options)
}

/// Tornado bars with the default engine.
pub fn compute_tornado(
    levers: &LeverVector,
    fundamentals: &Fundamentals,
    config: &SimulationConfig,
    options: &SensitivityOptions,
) -> Result<Vec<TornadoBar>, RiskError> {
    SensitivityEngine::default().compute_tornado(levers, fundamentals, config, options)
}

/// Combined profile with the default engine.
pub fn compute_sensitivity_profile(
    levers: Option<&LeverVector>,
    fundamentals: &Fundamentals,
    config: Option<&SimulationConfig>,
    options: &SensitivityOptions,
) -> Result<Analysis<SensitivityProfile>, RiskError> {
    SensitivityEngine::default().compute_profile(levers, fundamentals, config, options)
}
