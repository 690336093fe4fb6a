//! Monte Carlo sampler and its building blocks.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSampler
//! ├── SimulationConfig   (iterations, seed, horizon, perturbation)
//! ├── ScenarioRng        (one stream per (seed, trial_index))
//! ├── perturb()          (per-trial input shock)
//! ├── Projector          (single-trial projection)
//! └── Percentiles        (full-sort aggregation)
//! ```
//!
//! The simple growth-only batch is the default perturbation model, not a
//! separate algorithm: richer models only change what [`perturb`] shocks.

mod perturbation;
mod sampler;
mod stats;

pub use perturbation::{perturb, PerturbedTrial, GROWTH_SHOCK_HALF_WIDTH};
pub use sampler::{BatchSummary, MonteCarloDistribution, MonteCarloSampler, DEFAULT_PARALLEL_THRESHOLD};
pub use stats::{percentile, sort_ascending, Percentiles, PERCENTILE_LEVELS};
