//! # Scenario Risk (L3: Analysis)
//!
//! Cross-lever analysis built on repeated Monte Carlo batches.
//!
//! This crate provides:
//! - Lever sensitivity: elasticity scores and tornado ranking
//! - Shock propagation with robustness classification
//! - [`Analysis`]: `Computed` or `NotComputed { reason }` for on-demand use
//! - [`CancellationToken`]: checked between batches
//! - Rayon fan-out over independent batches
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           scenario_risk (L3)            │
//! ├─────────────────────────────────────────┤
//! │  sensitivity/ - Elasticity, Tornado     │
//! │  shock/       - Shock propagation       │
//! │  analysis     - Computed | NotComputed  │
//! │  batch        - Analysis batch config   │
//! │  cancel       - Cancellation token      │
//! │  parallel/    - Rayon utilities         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          scenario_engine (L2)           │
//! │  Seeded Monte Carlo sampler             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use scenario_core::prelude::*;
//! use scenario_risk::sensitivity::{compute_tornado, SensitivityOptions};
//! use scenario_risk::shock::{compute_shock_propagation, ShockClass};
//!
//! let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
//! let levers = LeverVector::default();
//! let config = SimulationConfig::builder()
//!     .iterations(200)
//!     .seed(42)
//!     .perturbation(PerturbationModel::LeverCoupled)
//!     .build()
//!     .unwrap();
//!
//! let tornado = compute_tornado(&levers, &f, &config, &SensitivityOptions::default()).unwrap();
//! assert!(tornado.len() <= 5);
//!
//! let shock = compute_shock_propagation(&levers, &f, &config, 100.0, None).unwrap();
//! assert_eq!(shock.classification, ShockClass::Robust);
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod batch;
pub mod cancel;
pub mod error;
pub mod parallel;
pub mod sensitivity;
pub mod shock;

pub use analysis::Analysis;
pub use batch::{analysis_config, ANALYSIS_PERTURBATION};
pub use cancel::CancellationToken;
pub use error::RiskError;
pub use sensitivity::{
    compute_elasticity, compute_sensitivity_profile, compute_tornado, ElasticityEntry,
    ImpactDirection, SensitivityEngine, SensitivityOptions, SensitivityProfile, TornadoBar,
};
pub use shock::{compute_shock_propagation, shock_sweep, ShockClass, ShockModel, ShockResult};
