//! # Scenario Core (L1: Foundation)
//!
//! Value types and the single-trial projector for runway scenario
//! simulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           scenario_core (L1)            │
//! ├─────────────────────────────────────────┤
//! │  types/     - Lever, LeverVector,       │
//! │               Fundamentals, Config,     │
//! │               TrialOutcome, Result      │
//! │  projector  - Single-trial projector    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: no global state, no ambient randomness.
//!
//! ## Example
//!
//! ```
//! use scenario_core::prelude::*;
//!
//! let fundamentals = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
//! let levers = LeverVector::default().with(Lever::CostDiscipline, 80.0);
//!
//! let outcome = Projector::default().project(&fundamentals, &levers, 1.0);
//! assert!(outcome.final_runway_months > 20.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod projector;
pub mod types;

/// Commonly used types.
pub mod prelude {
    pub use crate::projector::{ModelParams, Projector};
    pub use crate::types::{
        Fundamentals, Lever, LeverVector, PerturbationModel, ScenarioError, SimulationConfig,
        SimulationResult, TrialOutcome,
    };
}
