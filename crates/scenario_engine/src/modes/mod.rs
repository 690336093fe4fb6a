//! Single-run modes.
//!
//! - Deterministic: one unperturbed projection with tiered survival
//! - Stress: one named macro preset applied before the deterministic run

mod deterministic;
mod stress;

pub use deterministic::{run_deterministic, tiered_survival, UPPER_TIER_MONTHS};
pub use stress::{run_stress, StressPreset};
