//! # Scenario Engine (Layer 2: Simulation)
//!
//! Runs the single-trial projector in three ways:
//!
//! - [`modes::run_deterministic`]: one unperturbed projection, tiered survival
//! - [`modes::run_stress`]: one named macro preset, then deterministic
//! - [`mc::MonteCarloSampler`]: seeded batches aggregated into percentiles
//!
//! ## Reproducibility
//!
//! No generator outlives a trial. Trial `i` of a batch seeded with `s` always
//! draws from `ScenarioRng::for_trial(s, i)`, so identical inputs give
//! bit-identical aggregates whether trials run sequentially or on Rayon.
//!
//! ## Usage Example
//!
//! ```rust
//! use scenario_core::prelude::*;
//! use scenario_engine::mc::MonteCarloSampler;
//! use scenario_engine::modes::{run_stress, StressPreset};
//!
//! let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
//! let levers = LeverVector::default();
//!
//! let stressed = run_stress(&Projector::default(), &f, &levers, StressPreset::CostSpike);
//! assert!(stressed.runway_months < 21.0);
//!
//! let config = SimulationConfig::builder().iterations(200).seed(1).build().unwrap();
//! let batch = MonteCarloSampler::default().run_batch(&levers, &f, &config).unwrap();
//! assert_eq!(batch.survival_rate, 1.0);
//! ```

#![warn(missing_docs)]

pub mod diagnostics;
pub mod error;
pub mod mc;
pub mod modes;
pub mod rng;

pub use diagnostics::{inspect_inputs, SimulationWarning};
pub use error::SimulationError;
pub use mc::{BatchSummary, MonteCarloDistribution, MonteCarloSampler, Percentiles};
pub use modes::{run_deterministic, run_stress, StressPreset};
