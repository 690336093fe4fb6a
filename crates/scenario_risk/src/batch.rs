//! Batch configuration shared by sensitivity and shock analysis.

use scenario_core::types::{PerturbationModel, SimulationConfig};

/// Perturbation model for analysis batches when the caller sets none.
///
/// The macro levers that sensitivity and shock analysis move only reach the
/// projector through this model.
pub const ANALYSIS_PERTURBATION: PerturbationModel = PerturbationModel::LeverCoupled;

/// Resolves the configuration an analysis batch runs under.
///
/// An explicitly chosen perturbation model is kept.
#[inline]
pub fn analysis_config(config: &SimulationConfig) -> SimulationConfig {
    config.with_default_perturbation(ANALYSIS_PERTURBATION)
}
