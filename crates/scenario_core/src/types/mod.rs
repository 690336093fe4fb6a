//! Input and output value types for the scenario engine.
//!
//! This module provides:
//! - [`Lever`] and [`LeverVector`]: bounded strategic dials
//! - [`Fundamentals`]: starting financial facts
//! - [`SimulationConfig`]: iterations, seed, horizon, perturbation model
//! - [`TrialOutcome`] and [`SimulationResult`]: projector and engine outputs
//! - [`ScenarioError`]: validation failures

mod config;
mod error;
mod fundamentals;
mod lever;
mod outcome;

pub use config::{
    PerturbationModel, SimulationConfig, SimulationConfigBuilder, DEFAULT_HORIZON_MONTHS,
    MAX_HORIZON_MONTHS, MAX_ITERATIONS,
};
pub use error::ScenarioError;
pub use fundamentals::Fundamentals;
pub use lever::{clamp_lever, Lever, LeverVector, LEVER_MAX, LEVER_MIN, LEVER_NEUTRAL};
pub use outcome::{SimulationResult, TrialOutcome};
